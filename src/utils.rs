// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

/// Collapse all runs of whitespace (including newlines) into single spaces.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Create the parent directory of `path` if it has one and it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Truncate a label for display, appending an ellipsis when shortened.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Data\n   Analyst \t"), "Data Analyst");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Pune", 10), "Pune");
        assert_eq!(truncate_label("Tata Consultancy Services", 10), "Tata Cons…");
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let root = std::env::temp_dir().join(uuid::Uuid::new_v4().to_string());
        let file = root.join("nested").join("out.csv");
        ensure_parent_dir(&file).unwrap();
        assert!(root.join("nested").is_dir());
        std::fs::remove_dir_all(&root).unwrap();
    }
}
