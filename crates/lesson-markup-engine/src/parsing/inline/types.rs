use serde::{Deserialize, Serialize};

/// A run of inline content produced by the formatter or the trigger resolver.
///
/// Spans own their text: the render tree outlives the input it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineSpan {
    /// Plain text outside any delimiter pair.
    Text { value: String },
    /// Content between a closed `**` pair, delimiters removed.
    Bold { value: String },
    /// Content between a closed backtick pair, delimiters removed.
    InlineCode { value: String },
    /// A matched trigger whose explanation is short enough for a hover tooltip.
    TooltipRef { trigger: String, content: String },
    /// A matched trigger whose explanation is rendered as a deep-dive dialog.
    ModalRef {
        trigger: String,
        title: String,
        content: String,
    },
}

impl InlineSpan {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn bold(value: impl Into<String>) -> Self {
        Self::Bold {
            value: value.into(),
        }
    }

    pub fn code(value: impl Into<String>) -> Self {
        Self::InlineCode {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&InlineSpan::code("x")).unwrap();
        assert_eq!(json, r#"{"type":"inlineCode","value":"x"}"#);
    }

    #[test]
    fn modal_ref_serializes_all_fields() {
        let span = InlineSpan::ModalRef {
            trigger: "BFS".into(),
            title: "BFS".into(),
            content: "breadth-first search".into(),
        };
        assert_eq!(
            serde_json::to_value(&span).unwrap(),
            serde_json::json!({
                "type": "modalRef",
                "trigger": "BFS",
                "title": "BFS",
                "content": "breadth-first search"
            })
        );
    }
}
