//! Small helpers for form-style string inputs.

/// Trimmed value, or `None` when absent or blank.
///
/// Form fields arrive as empty strings when the user leaves them untouched;
/// those are stored as NULL.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Case-insensitive substring test used by dashboard search boxes.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some(" Pizza ".into())), Some("Pizza".into()));
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case("Jane Doe", "jane"));
        assert!(!contains_ignore_case("Jane Doe", "john"));
    }
}
