use std::sync::LazyLock;

use regex::Regex;

static OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[CALLOUT:(\w+)\]").expect("callout opener pattern is valid")
});

/// Opening and closing markers of a callout block.
pub struct CalloutMarker;

impl CalloutMarker {
    pub const CLOSE: &'static str = "[/CALLOUT]";

    /// Matches a `[CALLOUT:kind]` opener at the start of `line`.
    ///
    /// Returns the raw kind word and whatever follows the opener on the line.
    pub fn open(line: &str) -> Option<(&str, &str)> {
        let caps = OPEN_RE.captures(line)?;
        let kind = caps.get(1)?.as_str();
        let rest = &line[caps.get(0)?.end()..];
        Some((kind, rest))
    }

    /// Byte offset of the closing marker anywhere in `line`.
    pub fn find_close(line: &str) -> Option<usize> {
        line.find(Self::CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[CALLOUT:info]", "info", "")]
    #[case("[callout:Warning]", "Warning", "")]
    #[case("[CALLOUT:tip] trailing", "tip", " trailing")]
    #[case("[CALLOUT:danger]", "danger", "")]
    fn opener_matches(#[case] line: &str, #[case] kind: &str, #[case] rest: &str) {
        assert_eq!(CalloutMarker::open(line), Some((kind, rest)));
    }

    #[rstest]
    #[case("[CALLOUT:]")]
    #[case("[CALLOUT:two words]")]
    #[case("see [CALLOUT:info]")]
    #[case("[/CALLOUT]")]
    fn opener_rejects(#[case] line: &str) {
        assert_eq!(CalloutMarker::open(line), None);
    }

    #[test]
    fn close_marker_found_anywhere() {
        assert_eq!(CalloutMarker::find_close("[/CALLOUT]"), Some(0));
        assert_eq!(CalloutMarker::find_close("done [/CALLOUT] "), Some(5));
        assert_eq!(CalloutMarker::find_close("[/callout]"), None);
    }
}
