use std::fmt;

use lesson_markup_engine::{InlineSpan, ParseOptions, RenderNode, parse_deep_dive};

/// An indented, human-readable dump of a render tree.
///
/// Modal deep dives are expanded in place using the deep-dive dialect.
pub struct Dump<'a> {
    nodes: &'a [RenderNode],
    options: &'a ParseOptions,
}

impl<'a> Dump<'a> {
    pub fn new(nodes: &'a [RenderNode], options: &'a ParseOptions) -> Self {
        Self { nodes, options }
    }

    fn write_nodes(
        &self,
        f: &mut fmt::Formatter<'_>,
        nodes: &[RenderNode],
        depth: usize,
    ) -> fmt::Result {
        for node in nodes {
            self.write_node(f, node, depth)?;
        }
        Ok(())
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &RenderNode,
        depth: usize,
    ) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match node {
            RenderNode::Heading { text } => writeln!(f, "{pad}heading {text:?}"),
            RenderNode::Paragraph { spans } => {
                writeln!(f, "{pad}paragraph")?;
                self.write_spans(f, spans, depth + 1)
            }
            RenderNode::ListItem(item) => {
                writeln!(f, "{pad}item ordered={}", item.ordered)?;
                self.write_spans(f, &item.spans, depth + 1)
            }
            RenderNode::List(list) => {
                writeln!(f, "{pad}list ordered={}", list.ordered)?;
                for item in &list.items {
                    writeln!(f, "{pad}  item")?;
                    self.write_spans(f, &item.spans, depth + 2)?;
                }
                Ok(())
            }
            RenderNode::CodeBlock { language, content } => {
                writeln!(f, "{pad}code {language}")?;
                for line in content.lines() {
                    writeln!(f, "{pad}  | {line}")?;
                }
                Ok(())
            }
            RenderNode::Callout { kind, children } => {
                let style = if kind.is_known() { "" } else { " (default style)" };
                writeln!(f, "{pad}callout {kind}{style}")?;
                self.write_nodes(f, children, depth + 1)
            }
            RenderNode::LineBreak => writeln!(f, "{pad}break"),
        }
    }

    fn write_spans(
        &self,
        f: &mut fmt::Formatter<'_>,
        spans: &[InlineSpan],
        depth: usize,
    ) -> fmt::Result {
        let pad = "  ".repeat(depth);
        for span in spans {
            match span {
                InlineSpan::Text { value } => writeln!(f, "{pad}text {value:?}")?,
                InlineSpan::Bold { value } => writeln!(f, "{pad}bold {value:?}")?,
                InlineSpan::InlineCode { value } => writeln!(f, "{pad}code {value:?}")?,
                InlineSpan::TooltipRef { trigger, content } => {
                    writeln!(f, "{pad}tooltip {trigger:?}: {content:?}")?
                }
                InlineSpan::ModalRef {
                    trigger,
                    title,
                    content,
                } => {
                    writeln!(f, "{pad}modal {trigger:?} titled {title:?}")?;
                    let expanded = parse_deep_dive(content, self.options);
                    self.write_nodes(f, &expanded, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nodes(f, self.nodes, 0)
    }
}
