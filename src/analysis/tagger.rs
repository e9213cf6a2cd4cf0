// src/analysis/tagger.rs
use crate::config::{MatchMode, SkillRule};
use anyhow::{Context, Result};
use regex::Regex;

enum Matcher {
    Substring(String),
    WordBoundary(Regex),
}

impl Matcher {
    fn is_match(&self, lowered_title: &str) -> bool {
        match self {
            Matcher::Substring(keyword) => lowered_title.contains(keyword.as_str()),
            Matcher::WordBoundary(re) => re.is_match(lowered_title),
        }
    }
}

/// Detects skill keywords in job titles using a declarative rule set.
pub struct Tagger {
    rules: Vec<(Matcher, String)>,
}

impl Tagger {
    pub fn new(rules: &[SkillRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                let keyword = rule.keyword.trim().to_lowercase();
                let matcher = match rule.mode {
                    MatchMode::Substring => Matcher::Substring(keyword),
                    MatchMode::WordBoundary => {
                        // `&` counts as part of a word so "r&d" or "m&a" never match "r"/"m".
                        let pattern =
                            format!(r"(?:^|[^\w&]){}(?:$|[^\w&])", regex::escape(&keyword));
                        let re = Regex::new(&pattern).with_context(|| {
                            format!("Invalid word-boundary keyword '{}'", rule.keyword)
                        })?;
                        Matcher::WordBoundary(re)
                    }
                };
                Ok((matcher, rule.label.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Labels matched in `title`, in rule order. Several keywords sharing a
    /// label (e.g. "power bi" and "powerbi") produce that label once.
    pub fn tag(&self, title: &str) -> Vec<&str> {
        let lowered = title.trim().to_lowercase();
        let mut labels: Vec<&str> = Vec::new();
        if lowered.is_empty() {
            return labels;
        }

        for (matcher, label) in &self.rules {
            if !labels.contains(&label.as_str()) && matcher.is_match(&lowered) {
                labels.push(label.as_str());
            }
        }
        labels
    }

    /// Flattened tags over many titles; `None` titles contribute nothing.
    pub fn tag_all<'a, I>(&self, titles: I) -> Vec<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        titles
            .into_iter()
            .flatten()
            .flat_map(|title| self.tag(title))
            .map(str::to_string)
            .collect()
    }
}
