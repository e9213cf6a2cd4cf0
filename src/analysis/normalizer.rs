// src/analysis/normalizer.rs
use crate::config::LocationRules;
use crate::types::JobListing;

/// Maps free-text locations to canonical city labels.
pub struct Normalizer {
    cities: Vec<(String, Vec<String>)>,
    excluded: Vec<String>,
}

impl Normalizer {
    pub fn new(rules: &LocationRules) -> Self {
        let cities = rules
            .cities
            .iter()
            .map(|city| {
                let aliases = city
                    .aliases
                    .iter()
                    .map(|alias| alias.trim().to_lowercase())
                    .filter(|alias| !alias.is_empty())
                    .collect();
                (city.label.clone(), aliases)
            })
            .collect();
        let excluded = rules
            .excluded
            .iter()
            .map(|label| label.trim().to_lowercase())
            .collect();

        Self { cities, excluded }
    }

    /// First city (in rule order) with an alias contained in `raw`, else `raw` trimmed.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();

        self.cities
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| lowered.contains(alias.as_str())))
            .map(|(label, _)| label.clone())
            .unwrap_or_else(|| trimmed.to_string())
    }

    pub fn is_excluded(&self, label: &str) -> bool {
        let label = label.trim().to_lowercase();
        self.excluded.iter().any(|excluded| *excluded == label)
    }

    /// Canonical location of every listing that survives the exclusion set.
    pub fn city_labels<'a, I>(&self, listings: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a JobListing>,
    {
        listings
            .into_iter()
            .map(|listing| self.normalize(&listing.location))
            .filter(|label| !self.is_excluded(label))
            .collect()
    }

    /// Listings whose canonical location is not excluded.
    pub fn filter_listings<'a>(&self, listings: &'a [JobListing]) -> Vec<&'a JobListing> {
        listings
            .iter()
            .filter(|listing| !self.is_excluded(&self.normalize(&listing.location)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CityAlias;

    fn listing(location: &str) -> JobListing {
        JobListing {
            role: "Data Analyst".to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            date_posted: "Recent".to_string(),
            apply_link: format!("https://example.com/{}", location),
        }
    }

    #[test]
    fn test_aliases_map_to_canonical_label() {
        let normalizer = Normalizer::new(&LocationRules::default());

        assert_eq!(normalizer.normalize("Bengaluru, Karnataka, India"), "Bengaluru");
        assert_eq!(normalizer.normalize("Bangalore Urban"), "Bengaluru");
        assert_eq!(normalizer.normalize("Greater Bengaluru Area"), "Bengaluru");
        assert_eq!(normalizer.normalize("MUMBAI METROPOLITAN REGION"), "Mumbai");
        assert_eq!(normalizer.normalize("Gurgaon, Haryana, India"), "Gurugram");
        assert_eq!(normalizer.normalize("Greater Delhi Area"), "Delhi/NCR");
    }

    #[test]
    fn test_unmatched_is_trimmed_passthrough() {
        let normalizer = Normalizer::new(&LocationRules::default());

        assert_eq!(normalizer.normalize("  Coimbatore, Tamil Nadu  "), "Coimbatore, Tamil Nadu");
        assert_eq!(normalizer.normalize("India"), "India");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = LocationRules {
            cities: vec![
                CityAlias::new("Delhi/NCR", &["delhi"]),
                CityAlias::new("New Delhi", &["new delhi"]),
            ],
            excluded: vec![],
        };
        let normalizer = Normalizer::new(&rules);

        assert_eq!(normalizer.normalize("New Delhi, Delhi, India"), "Delhi/NCR");
    }

    #[test]
    fn test_excluded_locations_never_survive() {
        let normalizer = Normalizer::new(&LocationRules::default());
        let listings = vec![
            listing("India"),
            listing("Remote"),
            listing("  "),
            listing("Pune, Maharashtra, India"),
            listing("nan"),
        ];

        let kept = normalizer.filter_listings(&listings);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].location, "Pune, Maharashtra, India");

        let labels = normalizer.city_labels(&listings);
        assert_eq!(labels, vec!["Pune".to_string()]);
    }
}
