// src/types/listing.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Posting date used when a listing carries no `<time>` element.
pub const RECENT_SENTINEL: &str = "Recent";

/// One scraped job posting, keyed by `apply_link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Date_Posted")]
    pub date_posted: String,
    #[serde(rename = "Apply_Link")]
    pub apply_link: String,
}

/// Why the scrape loop ended before `max_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    HttpStatus(u16),
    Empty,
    Transport(String),
}

impl StopReason {
    /// Transport failures, throttling and server errors may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            StopReason::HttpStatus(code) => *code == 429 || (500..600).contains(code),
            StopReason::Transport(_) => true,
            StopReason::Empty => false,
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::HttpStatus(code) => write!(f, "blocked or error (status {})", code),
            StopReason::Empty => write!(f, "no more jobs found"),
            StopReason::Transport(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

/// Result of fetching one search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Body(String),
    Stop(StopReason),
}

#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pages_fetched: u32,
    pub listings: Vec<JobListing>,
    pub stop_reason: Option<StopReason>,
}

impl ScrapeSummary {
    pub fn elapsed_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
