use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{blocks::RenderNode, context::ParseContext, dialect::Dialect, parse_block};

/// Lesson content as supplied by an author: raw markup or a ready-made tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Raw(String),
    Prebuilt(Vec<RenderNode>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Raw(text.to_string())
    }
}

impl From<Vec<RenderNode>> for Content {
    fn from(nodes: Vec<RenderNode>) -> Self {
        Content::Prebuilt(nodes)
    }
}

/// Produces the render tree for `content`.
///
/// Prebuilt trees are returned as-is without copying; raw text is parsed.
pub fn render_content<'c>(
    content: &'c Content,
    dialect: &Dialect,
    ctx: &ParseContext<'_>,
) -> Cow<'c, [RenderNode]> {
    match content {
        Content::Prebuilt(nodes) => Cow::Borrowed(nodes),
        Content::Raw(text) => Cow::Owned(parse_block(text, dialect, ctx)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineSpan;

    #[test]
    fn prebuilt_content_passes_through_untouched() {
        // Text that would parse as a heading stays a paragraph
        let nodes = vec![RenderNode::paragraph(vec![InlineSpan::text("**x**")])];
        let content = Content::Prebuilt(nodes.clone());
        let rendered = render_content(&content, &Dialect::TOP_LEVEL, &ParseContext::default());
        assert!(matches!(rendered, Cow::Borrowed(_)));
        assert_eq!(rendered.as_ref(), nodes.as_slice());
    }

    #[test]
    fn raw_content_is_parsed() {
        let content = Content::from("**x**");
        let rendered = render_content(&content, &Dialect::TOP_LEVEL, &ParseContext::default());
        assert_eq!(rendered.as_ref(), &[RenderNode::Heading { text: "x".into() }]);
    }

    #[test]
    fn content_deserializes_untagged() {
        let raw: Content = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(raw, Content::Raw("hello".into()));
        let tree: Content = serde_json::from_str(r#"[{"type": "lineBreak"}]"#).unwrap();
        assert_eq!(tree, Content::Prebuilt(vec![RenderNode::LineBreak]));
    }
}
