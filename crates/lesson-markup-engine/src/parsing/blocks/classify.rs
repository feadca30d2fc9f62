use crate::parsing::dialect::Dialect;

use super::kinds::{BoldHeading, CalloutMarker, CodeFence, ListMarker};

/// Classification of a single line outside any open fence or callout.
///
/// Rules are tried in precedence order; the first match wins and anything
/// left over is a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'l> {
    FenceOpen { tag: &'l str },
    CalloutOpen { kind: &'l str, rest: &'l str },
    Heading { text: String },
    ListItem { ordered: bool, text: &'l str },
    Blank,
    Paragraph { text: &'l str },
}

/// Classifies lines according to the rules a dialect allows.
pub struct LineClassifier {
    dialect: Dialect,
}

impl LineClassifier {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Classifies `line` into a [`LineClass`].
    ///
    /// Fence detection ignores indentation; every other rule looks at the
    /// line with surrounding whitespace trimmed, so a bare `- ` or `1. `
    /// loses the space its marker needs and reads as a paragraph.
    pub fn classify<'l>(&self, line: &'l str) -> LineClass<'l> {
        if let Some(tag) = CodeFence::sig(line) {
            return LineClass::FenceOpen { tag };
        }

        let trimmed = line.trim();

        if self.dialect.allow_callouts
            && let Some((kind, rest)) = CalloutMarker::open(trimmed)
        {
            return LineClass::CalloutOpen { kind, rest };
        }

        if let Some(mode) = self.dialect.headings
            && let Some(text) = BoldHeading::parse(trimmed, mode)
        {
            return LineClass::Heading { text };
        }

        if let Some(text) = ListMarker::bullet(trimmed, self.dialect.bullet_markers) {
            return LineClass::ListItem {
                ordered: false,
                text,
            };
        }

        if self.dialect.allow_numbered_lists
            && let Some(text) = ListMarker::numbered(trimmed)
        {
            return LineClass::ListItem {
                ordered: true,
                text,
            };
        }

        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        LineClass::Paragraph { text: trimmed }
    }
}
