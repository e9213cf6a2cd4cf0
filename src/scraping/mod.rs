// src/scraping/mod.rs
//! Fetch search pages, extract listings and persist the unique ones

pub mod extractor;
pub mod fetcher;

pub use extractor::{ListingExtractor, PageExtraction};
pub use fetcher::{page_url, Delay, HttpPageSource, JobScraper, PageSource, TokioDelay};

use crate::config::ScrapeConfig;
use crate::dataset::write_dataset;
use crate::types::ScrapeSummary;
use anyhow::Result;
use tracing::info;

/// Scrape over HTTP with real sleeps, then write the dataset.
///
/// The dataset is written even when the loop stopped early; an empty result
/// is an error and leaves any previous file untouched.
pub async fn scrape_to_csv(config: &ScrapeConfig) -> Result<ScrapeSummary> {
    let source = HttpPageSource::new(config)?;
    let scraper = JobScraper::new(source, TokioDelay, config)?;

    let summary = scraper.run().await;
    info!(
        "Scrape finished in {}s: {} pages, {} listings collected",
        summary.elapsed_secs(),
        summary.pages_fetched,
        summary.listings.len()
    );

    write_dataset(&config.output_path, &summary.listings)?;
    Ok(summary)
}
