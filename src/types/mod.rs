pub mod listing;

pub use listing::{JobListing, PageOutcome, ScrapeSummary, StopReason, RECENT_SENTINEL};
