// src/core/config_manager.rs
//! Loads `AppConfig` from an optional YAML or TOML file

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_ENV_VAR: &str = "JOB_MARKET_CONFIG";

pub struct ConfigManager;

impl ConfigManager {
    /// Resolve the config file from the explicit path or `JOB_MARKET_CONFIG`.
    /// Without either, built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));

        match path {
            Some(path) => Self::load_from_file(&path),
            None => {
                info!("No configuration file given, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }

        info!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<AppConfig> {
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            toml::from_str(content).with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            serde_yaml::from_str(content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeywordPanel, MatchMode};

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "scrape:\n  max_pages: 3\n  keywords: Data Engineer\n";
        let config = ConfigManager::parse(yaml, Path::new("config.yaml")).unwrap();

        assert_eq!(config.scrape.max_pages, 3);
        assert_eq!(config.scrape.keywords, "Data Engineer");
        assert_eq!(config.scrape.jobs_per_page, 25);
        assert_eq!(config.scrape.retry.max_retries, 0);
        assert_eq!(config.analysis.top_cities, 10);
        assert!(!config.analysis.skills.is_empty());
    }

    #[test]
    fn test_toml_by_extension() {
        let toml = r#"
[analysis]
panel = "keywords"
top_companies = 5

[[analysis.skills]]
keyword = "r"
label = "R Language"
mode = "word_boundary"
"#;
        let config = ConfigManager::parse(toml, Path::new("market.toml")).unwrap();

        assert_eq!(config.analysis.panel, KeywordPanel::Keywords);
        assert_eq!(config.analysis.top_companies, 5);
        assert_eq!(config.analysis.skills.len(), 1);
        assert_eq!(config.analysis.skills[0].mode, MatchMode::WordBoundary);
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("{}.yaml", uuid::Uuid::new_v4()));
        assert!(ConfigManager::load(Some(path.as_path())).is_err());
    }
}
