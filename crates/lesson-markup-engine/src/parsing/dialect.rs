//! # Dialect Table
//!
//! The three grammar variants accepted by [`parse_block`](super::parse_block),
//! expressed as one typed configuration rather than three parsers.
//!
//! | Rule | Top-level | Callout body | Deep dive |
//! |---|---|---|---|
//! | Code fence | yes | yes | yes |
//! | Callout | yes | no | yes (one level) |
//! | Bold heading | strict | no | loose |
//! | Bullet markers | `- ` | `- `, `• ` | `- ` |
//! | Numbered item | yes | no | yes |
//! | List grouping | yes | yes | yes |
//! | Trigger expansion | yes | no | no |

use std::{fmt, str::FromStr};

/// How a bold heading line is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingMode {
    /// The whole line matches `^\*\*[^*]+\*\*$`; every `**` is removed.
    Strict,
    /// The line starts and ends with `**`; only those two pairs are removed.
    Loose,
}

/// Names of the built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectKind {
    TopLevel,
    Callout,
    DeepDive,
}

impl DialectKind {
    pub const ALL: [DialectKind; 3] = [
        DialectKind::TopLevel,
        DialectKind::Callout,
        DialectKind::DeepDive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DialectKind::TopLevel => "top-level",
            DialectKind::Callout => "callout",
            DialectKind::DeepDive => "deep-dive",
        }
    }

    pub fn dialect(self) -> Dialect {
        match self {
            DialectKind::TopLevel => Dialect::TOP_LEVEL,
            DialectKind::Callout => Dialect::CALLOUT,
            DialectKind::DeepDive => Dialect::DEEP_DIVE,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect `{0}` (expected top-level, callout or deep-dive)")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DialectKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

/// The set of block and inline rules a parse is allowed to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub kind: DialectKind,
    /// `[CALLOUT:kind]` ... `[/CALLOUT]` opens a callout whose body is
    /// parsed with [`Dialect::nested`].
    pub allow_callouts: bool,
    /// Bold heading recognition, or `None` when headings are not a rule.
    pub headings: Option<HeadingMode>,
    /// Prefixes that open an unordered list item.
    pub bullet_markers: &'static [&'static str],
    pub allow_numbered_lists: bool,
    /// Fold consecutive same-orderedness list items into one `List`.
    pub group_list_items: bool,
    /// Paragraph lines go through the trigger resolver.
    pub apply_triggers: bool,
}

impl Dialect {
    pub const TOP_LEVEL: Dialect = Dialect {
        kind: DialectKind::TopLevel,
        allow_callouts: true,
        headings: Some(HeadingMode::Strict),
        bullet_markers: &["- "],
        allow_numbered_lists: true,
        group_list_items: true,
        apply_triggers: true,
    };

    pub const CALLOUT: Dialect = Dialect {
        kind: DialectKind::Callout,
        allow_callouts: false,
        headings: None,
        bullet_markers: &["- ", "• "],
        allow_numbered_lists: false,
        group_list_items: true,
        apply_triggers: false,
    };

    pub const DEEP_DIVE: Dialect = Dialect {
        kind: DialectKind::DeepDive,
        allow_callouts: true,
        headings: Some(HeadingMode::Loose),
        bullet_markers: &["- "],
        allow_numbered_lists: true,
        group_list_items: true,
        apply_triggers: false,
    };

    /// The dialect used for callout bodies opened from this dialect.
    ///
    /// Callout bodies never allow callouts, which bounds recursion to one level.
    pub const fn nested(&self) -> Dialect {
        Dialect::CALLOUT
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::TOP_LEVEL
    }
}
