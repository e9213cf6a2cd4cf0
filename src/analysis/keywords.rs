// src/analysis/keywords.rs
use std::collections::HashSet;

/// Splits titles into words and drops filler words and numbers.
pub struct KeywordExtractor {
    ignore: HashSet<String>,
}

impl KeywordExtractor {
    pub fn new(ignore_words: &[String]) -> Self {
        Self {
            ignore: ignore_words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    pub fn words(&self, title: &str) -> Vec<String> {
        title
            .to_lowercase()
            .replace(['(', ')'], "")
            .split_whitespace()
            .filter(|word| !self.ignore.contains(*word))
            .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .collect()
    }

    pub fn words_all<'a, I>(&self, titles: I) -> Vec<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        titles
            .into_iter()
            .flatten()
            .flat_map(|title| self.words(title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_ignore_words;

    #[test]
    fn test_drops_ignored_and_numeric_words() {
        let extractor = KeywordExtractor::new(&default_ignore_words());

        assert_eq!(
            extractor.words("Senior Data Analyst (Risk) - 2 Openings"),
            vec!["risk".to_string(), "openings".to_string()]
        );
        assert_eq!(
            extractor.words("MIS Analyst for Supply Chain"),
            vec!["mis".to_string(), "supply".to_string(), "chain".to_string()]
        );
    }

    #[test]
    fn test_words_all_skips_missing_titles() {
        let extractor = KeywordExtractor::new(&["analyst".to_string()]);
        let words = extractor.words_all(vec![None, Some("Fraud Analyst")]);

        assert_eq!(words, vec!["fraud".to_string()]);
    }
}
