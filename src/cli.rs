// src/cli.rs
use crate::analysis::run_analysis;
use crate::config::{AppConfig, KeywordPanel};
use crate::core::ConfigManager;
use crate::scraping::scrape_to_csv;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "job-market")]
#[command(about = "Scrape job listings and chart where, who and what is hiring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// YAML or TOML configuration file (defaults to $JOB_MARKET_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write JSON logs to this file, truncated on start
    #[arg(long, global = true)]
    pub log_json: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch search result pages and write the unique listings to CSV
    Scrape {
        #[arg(long)]
        pages: Option<u32>,
        #[arg(long)]
        keywords: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Retries per page on transient failures (default: none)
        #[arg(long)]
        retries: Option<u32>,
    },
    /// Compute top cities, companies and skills and render the dashboard
    Analyze {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        panel: Option<KeywordPanel>,
        /// Rows per chart, applied to all three panels
        #[arg(long)]
        top: Option<usize>,
    },
}

impl Command {
    /// Fold command line overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        match self {
            Command::Scrape {
                pages,
                keywords,
                location,
                output,
                retries,
            } => {
                let scrape = &mut config.scrape;
                if let Some(pages) = pages {
                    scrape.max_pages = *pages;
                }
                if let Some(keywords) = keywords {
                    scrape.keywords = keywords.clone();
                }
                if let Some(location) = location {
                    scrape.location = location.clone();
                }
                if let Some(output) = output {
                    scrape.output_path = output.clone();
                }
                if let Some(retries) = retries {
                    scrape.retry.max_retries = *retries;
                }
            }
            Command::Analyze {
                input,
                output,
                panel,
                top,
            } => {
                let analysis = &mut config.analysis;
                if let Some(input) = input {
                    analysis.input_path = input.clone();
                }
                if let Some(output) = output {
                    analysis.output_path = output.clone();
                }
                if let Some(panel) = panel {
                    analysis.panel = *panel;
                }
                if let Some(top) = top {
                    analysis.top_cities = *top;
                    analysis.top_companies = *top;
                    analysis.top_keywords = *top;
                }
            }
        }
    }
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load(cli.config.as_deref())?;
    cli.command.apply_overrides(&mut config);

    match cli.command {
        Command::Scrape { .. } => {
            let summary = scrape_to_csv(&config.scrape)
                .await
                .context("Scrape did not produce a dataset")?;
            if let Some(reason) = &summary.stop_reason {
                warn!("Scrape ended early: {}", reason);
            }
            info!("Dataset ready at {}", config.scrape.output_path.display());
        }
        Command::Analyze { .. } => {
            run_analysis(&config.analysis).context("Analysis did not produce a dashboard")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetError;

    #[test]
    fn test_scrape_overrides() {
        let cli = Cli::parse_from([
            "job-market",
            "scrape",
            "--pages",
            "4",
            "--keywords",
            "Data Engineer",
            "--retries",
            "2",
        ]);
        let mut config = AppConfig::default();
        cli.command.apply_overrides(&mut config);

        assert_eq!(config.scrape.max_pages, 4);
        assert_eq!(config.scrape.keywords, "Data Engineer");
        assert_eq!(config.scrape.location, "India");
        assert_eq!(config.scrape.retry.max_retries, 2);
    }

    #[test]
    fn test_analyze_overrides() {
        let cli = Cli::parse_from([
            "job-market",
            "--config",
            "market.yaml",
            "analyze",
            "--panel",
            "keywords",
            "--top",
            "8",
        ]);
        let mut config = AppConfig::default();
        cli.command.apply_overrides(&mut config);

        assert_eq!(cli.config, Some(PathBuf::from("market.yaml")));
        assert_eq!(config.analysis.panel, KeywordPanel::Keywords);
        assert_eq!(config.analysis.top_cities, 8);
        assert_eq!(config.analysis.top_keywords, 8);
    }

    #[tokio::test]
    async fn test_missing_dataset_fails_with_single_wrapped_error() {
        let input = std::env::temp_dir().join(format!("{}.csv", uuid::Uuid::new_v4()));
        let output = input.with_extension("png");
        let cli = Cli::parse_from([
            "job-market",
            "analyze",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);

        let err = handle_command(cli).await.unwrap_err();

        assert_eq!(err.to_string(), "Analysis did not produce a dashboard");
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::Missing(path)) if *path == input
        ));
        assert!(!output.exists());
    }
}
