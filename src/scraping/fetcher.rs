// src/scraping/fetcher.rs
use super::extractor::ListingExtractor;
use crate::config::ScrapeConfig;
use crate::types::{PageOutcome, ScrapeSummary, StopReason};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Something that can return the body of search page `page`.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> PageOutcome;
}

/// Suspension used for the politeness delay and retry backoff.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self, duration: Duration);
}

pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Search URL for `page`, with `start` set to the page's first job offset.
pub fn page_url(config: &ScrapeConfig, page: u32) -> Result<Url> {
    let start = page.saturating_mul(config.jobs_per_page);
    Url::parse_with_params(
        &config.base_url,
        &[
            ("keywords", config.keywords.clone()),
            ("location", config.location.clone()),
            ("start", start.to_string()),
        ],
    )
    .with_context(|| format!("Invalid search URL: {}", config.base_url))
}

/// Longest pause the loop will take; larger or non-finite settings are clamped.
pub const MAX_PAUSE_SECS: f64 = 3600.0;

fn clamp_secs(secs: f64) -> f64 {
    if secs.is_nan() {
        0.0
    } else {
        secs.clamp(0.0, MAX_PAUSE_SECS)
    }
}

/// Config seconds as a `Duration`, never panicking on odd values.
pub fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(clamp_secs(secs)).unwrap_or(Duration::ZERO)
}

/// Uniform random delay between the configured bounds.
pub fn politeness_delay(min_secs: f64, max_secs: f64) -> Duration {
    let lo = clamp_secs(min_secs);
    let hi = clamp_secs(max_secs).max(lo);
    let secs = if hi > lo {
        rand::rng().random_range(lo..=hi)
    } else {
        lo
    };
    secs_to_duration(secs)
}

pub struct HttpPageSource {
    client: Client,
    config: ScrapeConfig,
}

impl HttpPageSource {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32) -> PageOutcome {
        let url = match page_url(&self.config, page) {
            Ok(url) => url,
            Err(e) => return PageOutcome::Stop(StopReason::Transport(e.to_string())),
        };
        debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return PageOutcome::Stop(StopReason::Transport(e.to_string())),
        };

        if response.status() != StatusCode::OK {
            return PageOutcome::Stop(StopReason::HttpStatus(response.status().as_u16()));
        }

        match response.text().await {
            Ok(body) => PageOutcome::Body(body),
            Err(e) => PageOutcome::Stop(StopReason::Transport(e.to_string())),
        }
    }
}

/// Sequential page loop: fetch, extract, pause, until a stop condition.
pub struct JobScraper<S, D> {
    source: S,
    delay: D,
    extractor: ListingExtractor,
    config: ScrapeConfig,
}

impl<S: PageSource, D: Delay> JobScraper<S, D> {
    pub fn new(source: S, delay: D, config: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            source,
            delay,
            extractor: ListingExtractor::new(&config.selectors)?,
            config: config.clone(),
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub async fn run(&self) -> ScrapeSummary {
        let started_at = Utc::now();
        let mut listings = Vec::new();
        let mut pages_fetched = 0;
        let mut stop_reason = None;

        info!(
            "Starting scrape for '{}' in {} (target ~{} jobs)",
            self.config.keywords,
            self.config.location,
            self.config.max_pages.saturating_mul(self.config.jobs_per_page)
        );

        for page in 0..self.config.max_pages {
            let start = page.saturating_mul(self.config.jobs_per_page);
            info!(
                "Scraping page {} (jobs {}-{})",
                page + 1,
                start,
                start.saturating_add(self.config.jobs_per_page)
            );

            let body = match self.fetch_with_retry(page).await {
                PageOutcome::Body(body) => body,
                PageOutcome::Stop(reason) => {
                    warn!("Stopping at page {}: {}", page + 1, reason);
                    stop_reason = Some(reason);
                    break;
                }
            };
            pages_fetched += 1;

            let extraction = self.extractor.extract(&body);
            if extraction.candidates == 0 {
                info!("No more jobs found");
                stop_reason = Some(StopReason::Empty);
                break;
            }

            info!(
                "Page {}: {} listings from {} cards",
                page + 1,
                extraction.listings.len(),
                extraction.candidates
            );
            listings.extend(extraction.listings);

            let pause = politeness_delay(self.config.delay_min_secs, self.config.delay_max_secs);
            debug!("Sleeping {:.1}s", pause.as_secs_f64());
            self.delay.pause(pause).await;
        }

        ScrapeSummary {
            started_at,
            finished_at: Utc::now(),
            pages_fetched,
            listings,
            stop_reason,
        }
    }

    async fn fetch_with_retry(&self, page: u32) -> PageOutcome {
        let mut attempt = 0;
        loop {
            let outcome = self.source.fetch_page(page).await;
            let retry = attempt < self.config.retry.max_retries
                && matches!(&outcome, PageOutcome::Stop(reason) if reason.is_retryable());
            if !retry {
                return outcome;
            }

            attempt += 1;
            if let PageOutcome::Stop(reason) = &outcome {
                warn!(
                    "Page {} failed ({}), retry {}/{}",
                    page + 1,
                    reason,
                    attempt,
                    self.config.retry.max_retries
                );
            }
            self.delay
                .pause(secs_to_duration(self.config.retry.backoff_secs))
                .await;
        }
    }
}
