use std::borrow::Cow;

use crate::models::{ExplanationEntry, Section};

/// Tunables shared by every dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Explanations strictly longer than this many characters become modal
    /// deep dives; shorter non-empty ones become tooltips.
    pub modal_threshold: usize,
    /// Language recorded on a code fence opened without a language tag.
    pub default_language: Cow<'static, str>,
}

impl ParseOptions {
    pub const DEFAULT_MODAL_THRESHOLD: usize = 500;
    pub const DEFAULT_LANGUAGE: &'static str = "go";

    pub const DEFAULT: ParseOptions = ParseOptions {
        modal_threshold: Self::DEFAULT_MODAL_THRESHOLD,
        default_language: Cow::Borrowed(Self::DEFAULT_LANGUAGE),
    };
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Read-only inputs for one parse call.
///
/// A context without a section never expands triggers, whatever the dialect.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub explanations: &'a [ExplanationEntry],
    pub section: Option<Section>,
    pub options: &'a ParseOptions,
}

impl<'a> ParseContext<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            explanations: &[],
            section: None,
            options,
        }
    }

    /// Scopes trigger expansion to `section` of `explanations`.
    pub fn with_section(mut self, explanations: &'a [ExplanationEntry], section: Section) -> Self {
        self.explanations = explanations;
        self.section = Some(section);
        self
    }
}

static DEFAULT_OPTIONS: ParseOptions = ParseOptions::DEFAULT;

impl Default for ParseContext<'static> {
    fn default() -> Self {
        ParseContext::new(&DEFAULT_OPTIONS)
    }
}
