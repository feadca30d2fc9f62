use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("numbered item pattern is valid"));

/// Prefixes that open list items.
pub struct ListMarker;

impl ListMarker {
    /// Strips the first matching bullet marker, returning the item text.
    pub fn bullet<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
        markers
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }

    /// Strips a `1. ` style prefix, returning the item text.
    pub fn numbered(line: &str) -> Option<&str> {
        NUMBERED_RE.find(line).map(|m| &line[m.end()..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_with_dash() {
        assert_eq!(ListMarker::bullet("- item", &["- "]), Some("item"));
        assert_eq!(ListMarker::bullet("-item", &["- "]), None);
    }

    #[test]
    fn bullet_marker_set_is_configurable() {
        assert_eq!(ListMarker::bullet("• item", &["- "]), None);
        assert_eq!(ListMarker::bullet("• item", &["- ", "• "]), Some("item"));
    }

    #[test]
    fn numbered_items() {
        assert_eq!(ListMarker::numbered("1. first"), Some("first"));
        assert_eq!(ListMarker::numbered("12.\tdozen"), Some("dozen"));
        assert_eq!(ListMarker::numbered("1.first"), None);
        assert_eq!(ListMarker::numbered("a. letter"), None);
    }
}
