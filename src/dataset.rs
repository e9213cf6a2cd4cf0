// src/dataset.rs
//! The CSV dataset shared by the scrape and analyze runs

use crate::types::JobListing;
use crate::utils::ensure_parent_dir;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("no listings were scraped, nothing to write")]
    Empty,
    #[error("dataset not found: {}. Run the scraper first", .0.display())]
    Missing(PathBuf),
}

/// Keep the first listing seen for each apply link.
pub fn dedup_by_link(listings: &[JobListing]) -> Vec<JobListing> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for listing in listings {
        if seen.insert(listing.apply_link.as_str()) {
            unique.push(listing.clone());
        }
    }
    unique
}

/// Overwrite `path` with the unique listings. Returns how many rows were written.
pub fn write_dataset(path: &Path, listings: &[JobListing]) -> Result<usize> {
    if listings.is_empty() {
        return Err(DatasetError::Empty.into());
    }

    let unique = dedup_by_link(listings);
    ensure_parent_dir(path)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for listing in &unique {
        writer
            .serialize(listing)
            .with_context(|| format!("Failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    info!(
        "Wrote {} unique listings ({} duplicates dropped) to {}",
        unique.len(),
        listings.len() - unique.len(),
        path.display()
    );
    Ok(unique.len())
}

pub fn read_dataset(path: &Path) -> Result<Vec<JobListing>> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.to_path_buf()).into());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let listings = reader
        .deserialize()
        .collect::<std::result::Result<Vec<JobListing>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    info!("Loaded {} jobs from {}", listings.len(), path.display());
    Ok(listings)
}
