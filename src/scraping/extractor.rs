// src/scraping/extractor.rs
use crate::config::ListingSelectors;
use crate::types::{JobListing, RECENT_SENTINEL};
use crate::utils::clean_text;
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Listings pulled from one page, plus how many candidate cards were seen.
///
/// `candidates == 0` means the page had no results at all, which ends the run;
/// a page whose cards were all malformed still counts as non-empty.
#[derive(Debug, Default)]
pub struct PageExtraction {
    pub candidates: usize,
    pub listings: Vec<JobListing>,
}

pub struct ListingExtractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    date: Selector,
}

impl ListingExtractor {
    pub fn new(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            card: parse_selector(&selectors.card)?,
            title: parse_selector(&selectors.title)?,
            company: parse_selector(&selectors.company)?,
            location: parse_selector(&selectors.location)?,
            link: parse_selector(&selectors.link)?,
            date: parse_selector(&selectors.date)?,
        })
    }

    pub fn extract(&self, body: &str) -> PageExtraction {
        let document = Html::parse_document(body);
        let mut extraction = PageExtraction::default();

        for card in document.select(&self.card) {
            extraction.candidates += 1;
            match self.parse_card(&card) {
                Some(listing) => extraction.listings.push(listing),
                None => debug!("Skipping malformed listing card"),
            }
        }

        extraction
    }

    fn parse_card(&self, card: &ElementRef) -> Option<JobListing> {
        let role = first_text(card, &self.title)?;
        let company = first_text(card, &self.company)?;
        let location = first_text(card, &self.location)?;
        let apply_link = card
            .select(&self.link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|href| href.trim().to_string())?;
        let date_posted =
            first_text(card, &self.date).unwrap_or_else(|| RECENT_SENTINEL.to_string());

        Some(JobListing {
            role,
            company,
            location,
            date_posted,
            apply_link,
        })
    }
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| anyhow::anyhow!("Invalid selector '{}': {}", raw, e))
}

fn first_text(card: &ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, link: Option<&str>, date: Option<&str>) -> String {
        let link = link
            .map(|href| format!(r#"<a class="base-card__full-link" href="{}">view</a>"#, href))
            .unwrap_or_default();
        let date = date
            .map(|d| format!(r#"<time class="job-search-card__listdate">{}</time>"#, d))
            .unwrap_or_default();
        format!(
            r#"<li><div class="base-card">{link}
                <h3 class="base-search-card__title">
                    {title}
                </h3>
                <h4 class="base-search-card__subtitle"><a>Acme  Analytics</a></h4>
                <span class="job-search-card__location">Bengaluru, Karnataka, India</span>
                {date}
            </div></li>"#
        )
    }

    fn extractor() -> ListingExtractor {
        ListingExtractor::new(&ListingSelectors::default()).unwrap()
    }

    #[test]
    fn test_extracts_complete_card() {
        let body = format!(
            "<ul>{}</ul>",
            card("Data Analyst", Some(" https://example.com/jobs/1 "), Some("2 days ago"))
        );
        let page = extractor().extract(&body);

        assert_eq!(page.candidates, 1);
        assert_eq!(page.listings.len(), 1);
        let listing = &page.listings[0];
        assert_eq!(listing.role, "Data Analyst");
        assert_eq!(listing.company, "Acme Analytics");
        assert_eq!(listing.location, "Bengaluru, Karnataka, India");
        assert_eq!(listing.date_posted, "2 days ago");
        assert_eq!(listing.apply_link, "https://example.com/jobs/1");
    }

    #[test]
    fn test_missing_date_defaults_to_recent() {
        let body = card("Data Analyst", Some("https://example.com/jobs/2"), None);
        let page = extractor().extract(&body);

        assert_eq!(page.listings[0].date_posted, RECENT_SENTINEL);
    }

    #[test]
    fn test_card_without_link_is_skipped() {
        let body = format!(
            "<ul>{}{}</ul>",
            card("Broken", None, None),
            card("Data Analyst", Some("https://example.com/jobs/3"), None)
        );
        let page = extractor().extract(&body);

        assert_eq!(page.candidates, 2);
        assert_eq!(page.listings.len(), 1);
        assert_eq!(page.listings[0].role, "Data Analyst");
    }

    #[test]
    fn test_page_without_cards_is_empty() {
        let page = extractor().extract("<html><body><p>No results</p></body></html>");
        assert_eq!(page.candidates, 0);
        assert!(page.listings.is_empty());
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let selectors = ListingSelectors {
            title: "h3[".to_string(),
            ..ListingSelectors::default()
        };
        assert!(ListingExtractor::new(&selectors).is_err());
    }
}
