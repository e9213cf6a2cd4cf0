//! Scrape public job-search result pages into a CSV dataset and chart the
//! top hiring cities, companies and skills from it.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod scraping;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use types::JobListing;
