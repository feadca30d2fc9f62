use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineSpan;

/// A single list entry with its formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub ordered: bool,
    pub spans: Vec<InlineSpan>,
}

/// A run of consecutive list items sharing the same orderedness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// The kind of a callout block.
///
/// Kinds are matched case-insensitively and stored lower-cased. Anything
/// outside the five known kinds is kept in `Other` so renderers can fall
/// back to a default style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalloutKind {
    Info,
    Warning,
    Tip,
    Definition,
    Algorithm,
    Other(String),
}

impl CalloutKind {
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "info" => Self::Info,
            "warning" => Self::Warning,
            "tip" => Self::Tip,
            "definition" => Self::Definition,
            "algorithm" => Self::Algorithm,
            _ => Self::Other(lowered),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Tip => "tip",
            Self::Definition => "definition",
            Self::Algorithm => "algorithm",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this kind has a dedicated presentation.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CalloutKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<CalloutKind> for String {
    fn from(kind: CalloutKind) -> Self {
        match kind {
            CalloutKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A block-level node of the render tree.
///
/// This is the whole contract with the external renderer: it decides how
/// each variant looks, the parser only decides which variant a line becomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    Heading {
        text: String,
    },
    Paragraph {
        spans: Vec<InlineSpan>,
    },
    /// An ungrouped list item. Only survives in the output of dialects that
    /// do not group list items.
    ListItem(ListItem),
    List(List),
    CodeBlock {
        language: String,
        content: String,
    },
    Callout {
        kind: CalloutKind,
        children: Vec<RenderNode>,
    },
    /// Marker for a blank input line.
    LineBreak,
}

impl RenderNode {
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        Self::Paragraph { spans }
    }

    pub fn list(ordered: bool, items: Vec<ListItem>) -> Self {
        Self::List(List { ordered, items })
    }
}
