//! Template helpers for prompt content
//!
//! Neither helper gates prompt creation; callers opt in.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed length accepted by [`validate_content`]
pub const MIN_CONTENT_LEN: usize = 10;

/// Template variables of the form `{{name}}`
static VARIABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap_or_else(|_| unreachable!()));

/// Stricter content check: at least [`MIN_CONTENT_LEN`] characters after trimming
pub fn validate_content(content: &str) -> bool {
    content.trim().chars().count() >= MIN_CONTENT_LEN
}

/// Variable names in order of appearance, duplicates kept
pub fn extract_variables(content: &str) -> Vec<String> {
    VARIABLE_PATTERN
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_variables_in_order() {
        assert_eq!(
            extract_variables("Hello {{name}}, your {{item}} is ready"),
            vec!["name", "item"]
        );
    }

    #[test]
    fn test_extract_variables_keeps_duplicates() {
        assert_eq!(
            extract_variables("{{a}} and {{b}} and {{a}}"),
            vec!["a", "b", "a"]
        );
    }

    #[test]
    fn test_extract_variables_ignores_non_word_names() {
        assert!(extract_variables("{{ spaced }} {{dash-ed}} {{}} {single}").is_empty());
        assert_eq!(extract_variables("{{snake_case_1}}"), vec!["snake_case_1"]);
    }

    #[test]
    fn test_validate_content() {
        assert!(validate_content("This is a valid prompt content."));
        assert!(validate_content("  0123456789  "));
        assert!(!validate_content("short"));
        assert!(!validate_content("   "));
        assert!(!validate_content(""));
        assert!(!validate_content("  012345678  "));
    }
}
