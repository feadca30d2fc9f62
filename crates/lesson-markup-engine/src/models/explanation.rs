use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::parsing::RenderNode;

/// The lesson section a block of text (and its explanations) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Problem,
    Algorithm,
    Solution,
    Improvements,
}

impl Section {
    /// All sections in lesson order.
    pub const ALL: [Section; 4] = [
        Section::Problem,
        Section::Algorithm,
        Section::Solution,
        Section::Improvements,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Problem => "problem",
            Section::Algorithm => "algorithm",
            Section::Solution => "solution",
            Section::Improvements => "improvements",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}` (expected problem, algorithm, solution or improvements)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// The explanation attached to a trigger.
///
/// Only plain text takes part in trigger expansion. `Rich` content is an
/// already-built tree that the resolver never splices in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExplanationContent {
    Text(String),
    Rich(Vec<RenderNode>),
}

impl ExplanationContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExplanationContent::Text(text) => Some(text),
            ExplanationContent::Rich(_) => None,
        }
    }
}

impl From<&str> for ExplanationContent {
    fn from(text: &str) -> Self {
        ExplanationContent::Text(text.to_string())
    }
}

impl From<String> for ExplanationContent {
    fn from(text: String) -> Self {
        ExplanationContent::Text(text)
    }
}

/// A registered trigger for one section of a lesson.
///
/// Tables of entries are ordered: the first entry whose trigger occurs in a
/// line is the one that gets expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationEntry {
    pub trigger: String,
    pub section: Section,
    pub content: ExplanationContent,
}

impl ExplanationEntry {
    pub fn new(
        trigger: impl Into<String>,
        section: Section,
        content: impl Into<ExplanationContent>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            section,
            content: content.into(),
        }
    }
}
