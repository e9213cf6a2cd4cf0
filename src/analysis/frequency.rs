// src/analysis/frequency.rs
use std::collections::HashMap;
use std::fmt;

/// Value counts in descending order, ties kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    rows: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn from_values<I, S>(values: I, top_n: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<(String, usize)> = Vec::new();

        for value in values {
            let value = value.as_ref();
            match index.get(value) {
                Some(&i) => rows[i].1 += 1,
                None => {
                    index.insert(value.to_string(), rows.len());
                    rows.push((value.to_string(), 1));
                }
            }
        }

        // sort_by is stable, so equal counts keep first-seen order
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows.truncate(top_n);
        Self { rows }
    }

    pub fn rows(&self) -> &[(String, usize)] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn max_count(&self) -> usize {
        self.rows.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    pub fn count_of(&self, value: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, count)| *count)
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (value, count) in &self.rows {
            writeln!(f, "{:<40} {:>5}", value, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_descending_and_truncated() {
        let values = ["Pune", "Mumbai", "Pune", "Chennai", "Mumbai", "Pune"];
        let table = FrequencyTable::from_values(values, 2);

        assert_eq!(
            table.rows(),
            &[("Pune".to_string(), 3), ("Mumbai".to_string(), 2)]
        );
        assert_eq!(table.max_count(), 3);
        assert_eq!(table.count_of("Chennai"), None);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table = FrequencyTable::from_values(vec!["b", "a", "c", "a", "b"], 10);
        let order: Vec<&str> = table.rows().iter().map(|(v, _)| v.as_str()).collect();

        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_values(Vec::<String>::new(), 10);
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
    }
}
