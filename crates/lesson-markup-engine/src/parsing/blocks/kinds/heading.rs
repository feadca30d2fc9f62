use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::dialect::HeadingMode;

// The `[^*]+` already forces at least one interior character, so any match
// is at least five bytes long; no separate length guard is needed.
static STRICT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^*]+\*\*$").expect("heading pattern is valid"));

/// A line written entirely in bold, used as a section heading.
pub struct BoldHeading;

impl BoldHeading {
    pub const DELIM: &'static str = "**";

    /// Returns the heading text if `line` is a heading under `mode`.
    pub fn parse(line: &str, mode: HeadingMode) -> Option<String> {
        match mode {
            HeadingMode::Strict => STRICT_RE
                .is_match(line)
                .then(|| line.replace(Self::DELIM, "")),
            HeadingMode::Loose => {
                if !(line.starts_with(Self::DELIM) && line.ends_with(Self::DELIM)) {
                    return None;
                }
                // `**` and `***` share delimiter bytes, leaving nothing between
                let inner = line
                    .get(Self::DELIM.len()..line.len() - Self::DELIM.len())
                    .unwrap_or_default();
                Some(inner.to_string())
            }
        }
    }
}
