// src/config.rs
//! Configuration structures passed into each component.
//!
//! Every struct implements `Default` with the values the tool ships with and
//! is `#[serde(default)]`, so a config file only has to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scrape: ScrapeConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub keywords: String,
    pub location: String,
    pub max_pages: u32,
    pub jobs_per_page: u32,
    pub user_agent: String,
    /// Lower bound of the politeness delay between pages, in seconds.
    pub delay_min_secs: f64,
    /// Upper bound of the politeness delay between pages, in seconds.
    pub delay_max_secs: f64,
    pub request_timeout_secs: u64,
    pub retry: RetryPolicy,
    pub selectors: ListingSelectors,
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search"
                .to_string(),
            keywords: "Data Analyst".to_string(),
            location: "India".to_string(),
            max_pages: 30,
            jobs_per_page: 25,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            delay_min_secs: 2.0,
            delay_max_secs: 5.0,
            request_timeout_secs: 30,
            retry: RetryPolicy::default(),
            selectors: ListingSelectors::default(),
            output_path: PathBuf::from("linkedin_india_bulk.csv"),
        }
    }
}

/// How often a failed page request is attempted again before the run stops.
///
/// The default performs no retries: the first failure ends the scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_secs: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            backoff_secs: 5.0,
        }
    }
}

/// CSS selectors used to pull one listing out of a search results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    pub card: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub date: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            card: "li".to_string(),
            title: "h3.base-search-card__title".to_string(),
            company: "h4.base-search-card__subtitle".to_string(),
            location: "span.job-search-card__location".to_string(),
            link: "a.base-card__full-link".to_string(),
            date: "time.job-search-card__listdate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPanel {
    /// Count labels from the skill vocabulary.
    #[default]
    Skills,
    /// Count raw title words minus the ignore list.
    Keywords,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub top_cities: usize,
    pub top_companies: usize,
    pub top_keywords: usize,
    pub panel: KeywordPanel,
    pub chart_width: u32,
    pub chart_height: u32,
    pub locations: LocationRules,
    pub skills: Vec<SkillRule>,
    pub ignore_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("linkedin_india_bulk.csv"),
            output_path: PathBuf::from("india_market_analysis.png"),
            top_cities: 10,
            top_companies: 10,
            top_keywords: 10,
            panel: KeywordPanel::default(),
            chart_width: 1000,
            chart_height: 1500,
            locations: LocationRules::default(),
            skills: default_skill_rules(),
            ignore_words: default_ignore_words(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityAlias {
    pub label: String,
    pub aliases: Vec<String>,
}

impl CityAlias {
    pub fn new(label: &str, aliases: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Ordered alias table plus the labels that are too coarse to count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRules {
    pub cities: Vec<CityAlias>,
    pub excluded: Vec<String>,
}

impl Default for LocationRules {
    fn default() -> Self {
        // Gurugram and Noida come before Delhi/NCR so the specific hub wins.
        Self {
            cities: vec![
                CityAlias::new("Bengaluru", &["bengaluru", "bangalore"]),
                CityAlias::new("Mumbai", &["mumbai", "thane"]),
                CityAlias::new("Gurugram", &["gurugram", "gurgaon"]),
                CityAlias::new("Noida", &["noida"]),
                CityAlias::new("Delhi/NCR", &["new delhi", "delhi"]),
                CityAlias::new("Pune", &["pune"]),
                CityAlias::new("Hyderabad", &["hyderabad", "secunderabad"]),
                CityAlias::new("Chennai", &["chennai", "madras"]),
                CityAlias::new("Kolkata", &["kolkata", "calcutta"]),
                CityAlias::new("Ahmedabad", &["ahmedabad"]),
            ],
            excluded: ["India", "Remote", "", "nan", "n/a", "none", "null", "unknown"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Substring,
    WordBoundary,
}

/// One entry of the skill vocabulary: lowercase keyword to display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRule {
    pub keyword: String,
    pub label: String,
    #[serde(default = "default_match_mode")]
    pub mode: MatchMode,
}

fn default_match_mode() -> MatchMode {
    MatchMode::Substring
}

impl SkillRule {
    pub fn substring(keyword: &str, label: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            label: label.to_string(),
            mode: MatchMode::Substring,
        }
    }

    pub fn word(keyword: &str, label: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            label: label.to_string(),
            mode: MatchMode::WordBoundary,
        }
    }
}

pub fn default_skill_rules() -> Vec<SkillRule> {
    vec![
        SkillRule::substring("sql", "SQL"),
        SkillRule::substring("python", "Python"),
        SkillRule::substring("excel", "Excel"),
        SkillRule::substring("power bi", "Power BI"),
        SkillRule::substring("powerbi", "Power BI"),
        SkillRule::substring("tableau", "Tableau"),
        SkillRule::word("r", "R Language"),
        SkillRule::word("sas", "SAS"),
        SkillRule::substring("spark", "Spark"),
        SkillRule::substring("hadoop", "Hadoop"),
        SkillRule::word("aws", "AWS"),
        SkillRule::substring("azure", "Azure"),
        SkillRule::word("gcp", "GCP"),
        SkillRule::substring("machine learning", "Machine Learning"),
        SkillRule::word("ml", "Machine Learning"),
        SkillRule::substring("looker", "Looker"),
        SkillRule::substring("snowflake", "Snowflake"),
        SkillRule::word("etl", "ETL"),
        SkillRule::word("vba", "VBA"),
        SkillRule::substring("statistic", "Statistics"),
        SkillRule::substring("google analytics", "Google Analytics"),
    ]
}

pub fn default_ignore_words() -> Vec<String> {
    [
        "data", "analyst", "engineer", "business", "associate", "senior", "sr.", "jr.",
        "consultant", "manager", "assistant", "scientist", "developer", "for", "and", "of",
        "in", "the", "to", "with", "at", "&", "-", "||", "/", "online",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
