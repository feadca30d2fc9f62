//! # Trigger Expansion
//!
//! Splices at most one tooltip or modal annotation into a paragraph line.
//!
//! Matching is a raw substring search: a trigger can match inside a longer
//! word or across what would otherwise have been a bold or code span.

use crate::models::{ExplanationEntry, Section};

use super::{
    context::ParseOptions,
    inline::{InlineSpan, format},
};

/// How a matched explanation is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Tooltip,
    Modal,
}

impl AnnotationKind {
    /// Classifies explanation text by its length in characters.
    ///
    /// Empty content is not an annotation at all.
    pub fn classify(content: &str, modal_threshold: usize) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        if content.chars().count() > modal_threshold {
            Some(AnnotationKind::Modal)
        } else {
            Some(AnnotationKind::Tooltip)
        }
    }

    fn span(self, trigger: &str, content: &str) -> InlineSpan {
        match self {
            AnnotationKind::Tooltip => InlineSpan::TooltipRef {
                trigger: trigger.to_string(),
                content: content.to_string(),
            },
            AnnotationKind::Modal => InlineSpan::ModalRef {
                trigger: trigger.to_string(),
                title: trigger.to_string(),
                content: content.to_string(),
            },
        }
    }
}

/// Formats `line`, expanding the first applicable trigger for `section`.
///
/// Entries are tried in table order. An entry applies when its trigger is a
/// non-empty substring of the line and its content is non-empty text; the
/// first applicable entry is split out at its first occurrence and no other
/// entry is tried. Text on either side still gets full inline formatting.
pub fn resolve(
    line: &str,
    explanations: &[ExplanationEntry],
    section: Section,
    options: &ParseOptions,
) -> Vec<InlineSpan> {
    let candidates = explanations
        .iter()
        .filter(|entry| entry.section == section && !entry.trigger.is_empty());

    for entry in candidates {
        let Some(at) = line.find(entry.trigger.as_str()) else {
            continue;
        };
        let Some(content) = entry.content.as_text() else {
            log::trace!("trigger {:?} has rich content, skipping", entry.trigger);
            continue;
        };
        let Some(kind) = AnnotationKind::classify(content, options.modal_threshold) else {
            log::trace!("trigger {:?} has empty content, skipping", entry.trigger);
            continue;
        };

        log::debug!("expanding trigger {:?} as {kind:?}", entry.trigger);
        let before = &line[..at];
        let after = &line[at + entry.trigger.len()..];

        let mut out = vec![];
        if !before.is_empty() {
            out.extend(format(before));
        }
        out.push(kind.span(&entry.trigger, content));
        if !after.is_empty() {
            out.extend(format(after));
        }
        return out;
    }

    format(line)
}
