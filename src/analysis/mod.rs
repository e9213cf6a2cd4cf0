// src/analysis/mod.rs
//! Turns the scraped dataset into top-N tables and the dashboard image

pub mod frequency;
pub mod keywords;
pub mod normalizer;
pub mod report;
pub mod tagger;

pub use frequency::FrequencyTable;
pub use keywords::KeywordExtractor;
pub use normalizer::Normalizer;
pub use report::{render_dashboard, Panel};
pub use tagger::Tagger;

use crate::config::{AnalysisConfig, KeywordPanel};
use crate::dataset::read_dataset;
use crate::types::JobListing;
use anyhow::Result;
use plotters::style::RGBColor;
use tracing::info;

#[derive(Debug, Clone)]
pub struct MarketReport {
    pub total_listings: usize,
    pub kept_listings: usize,
    pub cities: FrequencyTable,
    pub companies: FrequencyTable,
    pub keywords: FrequencyTable,
    pub panel: KeywordPanel,
}

impl MarketReport {
    pub fn panels(&self) -> Vec<Panel> {
        let (keyword_title, empty_message) = match self.panel {
            KeywordPanel::Skills => ("Trending Skills", "No skills detected in job titles"),
            KeywordPanel::Keywords => ("Trending Title Keywords", "No keywords left after filtering"),
        };

        vec![
            Panel {
                title: "Top Locations (Cities Only)".to_string(),
                table: self.cities.clone(),
                color: RGBColor(33, 145, 140),
                empty_message: "No city-level locations".to_string(),
            },
            Panel {
                title: "Companies Hiring the Most".to_string(),
                table: self.companies.clone(),
                color: RGBColor(172, 28, 83),
                empty_message: "No companies".to_string(),
            },
            Panel {
                title: keyword_title.to_string(),
                table: self.keywords.clone(),
                color: RGBColor(59, 76, 192),
                empty_message: empty_message.to_string(),
            },
        ]
    }

    pub fn log_tables(&self) {
        info!(
            "{} of {} listings kept after location filtering",
            self.kept_listings, self.total_listings
        );
        info!("Top cities:\n{}", self.cities);
        info!("Top companies:\n{}", self.companies);
        info!("Top {:?}:\n{}", self.panel, self.keywords);
    }
}

fn title_of(listing: &JobListing) -> Option<&str> {
    let role = listing.role.trim();
    (!role.is_empty()).then_some(role)
}

/// Compute all three tables. Listings with an excluded location are dropped
/// before any counting.
pub fn analyze(listings: &[JobListing], config: &AnalysisConfig) -> Result<MarketReport> {
    let normalizer = Normalizer::new(&config.locations);
    let kept = normalizer.filter_listings(listings);

    let cities = FrequencyTable::from_values(
        normalizer.city_labels(kept.iter().copied()),
        config.top_cities,
    );
    let companies = FrequencyTable::from_values(
        kept.iter().map(|listing| listing.company.trim()),
        config.top_companies,
    );

    let titles = kept.iter().map(|listing| title_of(listing));
    let keyword_values = match config.panel {
        KeywordPanel::Skills => Tagger::new(&config.skills)?.tag_all(titles),
        KeywordPanel::Keywords => KeywordExtractor::new(&config.ignore_words).words_all(titles),
    };
    let keywords = FrequencyTable::from_values(keyword_values, config.top_keywords);

    Ok(MarketReport {
        total_listings: listings.len(),
        kept_listings: kept.len(),
        cities,
        companies,
        keywords,
        panel: config.panel,
    })
}

/// Read the dataset, compute the report, and write the dashboard PNG.
pub fn run_analysis(config: &AnalysisConfig) -> Result<MarketReport> {
    let listings = read_dataset(&config.input_path)?;
    let report = analyze(&listings, config)?;
    report.log_tables();

    render_dashboard(
        &config.output_path,
        &report.panels(),
        config.chart_width,
        config.chart_height,
    )?;
    Ok(report)
}
