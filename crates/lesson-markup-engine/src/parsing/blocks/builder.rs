use crate::parsing::{
    context::ParseContext,
    dialect::Dialect,
    inline::{InlineSpan, format},
    parse_block,
    trigger::resolve,
};

use super::{
    classify::{LineClass, LineClassifier},
    group::group_lists,
    kinds::{CalloutMarker, CodeFence},
    types::{CalloutKind, ListItem, RenderNode},
};

/// A multi-line block still collecting lines.
#[derive(Debug)]
enum OpenBlock<'t> {
    None,
    Fence {
        tag: &'t str,
        lines: Vec<&'t str>,
    },
    Callout {
        kind: CalloutKind,
        body: Vec<&'t str>,
    },
}

/// Line-at-a-time state machine producing [`RenderNode`]s for one parse call.
pub struct BlockBuilder<'c, 't> {
    dialect: Dialect,
    ctx: ParseContext<'c>,
    classifier: LineClassifier,
    open: OpenBlock<'t>,
    out: Vec<RenderNode>,
}

impl<'c, 't> BlockBuilder<'c, 't> {
    pub fn new(dialect: Dialect, ctx: ParseContext<'c>) -> Self {
        Self {
            dialect,
            ctx,
            classifier: LineClassifier::new(dialect),
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'t str) {
        if self.continue_open(line) {
            return;
        }

        match self.classifier.classify(line) {
            LineClass::FenceOpen { tag } => {
                self.open = OpenBlock::Fence { tag, lines: vec![] };
            }
            LineClass::CalloutOpen { kind, rest } => self.open_callout(kind, rest),
            LineClass::Heading { text } => self.out.push(RenderNode::Heading { text }),
            LineClass::ListItem { ordered, text } => {
                self.out.push(RenderNode::ListItem(ListItem {
                    ordered,
                    spans: format(text),
                }));
            }
            LineClass::Blank => self.out.push(RenderNode::LineBreak),
            LineClass::Paragraph { text } => {
                let spans = self.paragraph_spans(text);
                self.out.push(RenderNode::Paragraph { spans });
            }
        }
    }

    pub fn finish(mut self) -> Vec<RenderNode> {
        // EOF flush
        match &self.open {
            OpenBlock::None => {}
            OpenBlock::Fence { lines, .. } => {
                log::debug!("unterminated code fence, keeping {} line(s)", lines.len());
            }
            OpenBlock::Callout { kind, body } => {
                log::debug!(
                    "unterminated {kind} callout, keeping {} line(s)",
                    body.len()
                );
            }
        }
        self.close_open();

        if self.dialect.group_list_items {
            group_lists(self.out)
        } else {
            self.out
        }
    }

    /// Feeds `line` to an open fence or callout. Returns false when no block
    /// is open and the line still needs classifying.
    fn continue_open(&mut self, line: &'t str) -> bool {
        match &mut self.open {
            OpenBlock::None => return false,
            OpenBlock::Fence { lines, .. } => {
                if !CodeFence::closes(line) {
                    lines.push(line);
                    return true;
                }
            }
            OpenBlock::Callout { body, .. } => match CalloutMarker::find_close(line) {
                None => {
                    body.push(line);
                    return true;
                }
                Some(at) => push_body_line(body, &line[..at]),
            },
        }
        self.close_open();
        true
    }

    /// Opens a callout. Text after the opener is the first body line.
    ///
    /// A `[/CALLOUT]` on the opener line itself closes the callout right
    /// there, so `[CALLOUT:tip] a [/CALLOUT]` is a complete one-line callout.
    /// Only when the opener line has no close marker are the following lines
    /// scanned for one.
    fn open_callout(&mut self, raw_kind: &'t str, rest: &'t str) {
        let kind = CalloutKind::parse(raw_kind);
        if !kind.is_known() {
            log::debug!("unknown callout kind {raw_kind:?}, keeping as {kind}");
        }

        let mut body = vec![];
        match CalloutMarker::find_close(rest) {
            Some(at) => {
                push_body_line(&mut body, &rest[..at]);
                self.open = OpenBlock::Callout { kind, body };
                self.close_open();
            }
            None => {
                push_body_line(&mut body, rest);
                self.open = OpenBlock::Callout { kind, body };
            }
        }
    }

    fn close_open(&mut self) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::Fence { tag, lines } => {
                let language = CodeFence::language(tag, &self.ctx.options.default_language);
                self.out.push(RenderNode::CodeBlock {
                    language: language.to_string(),
                    content: lines.join("\n").trim().to_string(),
                });
            }
            OpenBlock::Callout { kind, body } => {
                let children = parse_block(&body.join("\n"), &self.dialect.nested(), &self.ctx);
                self.out.push(RenderNode::Callout { kind, children });
            }
        }
    }

    fn paragraph_spans(&self, text: &str) -> Vec<InlineSpan> {
        match self.ctx.section {
            Some(section) if self.dialect.apply_triggers => {
                resolve(text, self.ctx.explanations, section, self.ctx.options)
            }
            _ => format(text),
        }
    }
}

/// Keeps text sharing a line with a callout marker when it is not blank.
fn push_body_line<'t>(body: &mut Vec<&'t str>, text: &'t str) {
    if !text.trim().is_empty() {
        body.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(dialect: Dialect, lines: &[&'static str]) -> Vec<RenderNode> {
        let mut builder = BlockBuilder::new(dialect, ParseContext::default());
        for line in lines {
            builder.push(line);
        }
        builder.finish()
    }

    #[test]
    fn fence_swallows_block_syntax() {
        let nodes = build(
            Dialect::TOP_LEVEL,
            &["```python", "- not a list", "**not a heading**", "```"],
        );
        assert_eq!(
            nodes,
            vec![RenderNode::CodeBlock {
                language: "python".into(),
                content: "- not a list\n**not a heading**".into(),
            }]
        );
    }

    #[test]
    fn fence_content_is_trimmed_as_a_whole() {
        let nodes = build(Dialect::TOP_LEVEL, &["```", "", "    indented", "", "```"]);
        assert_eq!(
            nodes,
            vec![RenderNode::CodeBlock {
                language: "go".into(),
                content: "indented".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_keeps_accumulated_lines() {
        let nodes = build(Dialect::TOP_LEVEL, &["```rust", "let x = 1;", "let y = 2;"]);
        assert_eq!(
            nodes,
            vec![RenderNode::CodeBlock {
                language: "rust".into(),
                content: "let x = 1;\nlet y = 2;".into(),
            }]
        );
    }

    #[test]
    fn callout_close_marker_may_follow_text() {
        let nodes = build(
            Dialect::TOP_LEVEL,
            &["[CALLOUT:info]", "first", "last [/CALLOUT]", "after"],
        );
        assert_eq!(
            nodes,
            vec![
                RenderNode::Callout {
                    kind: CalloutKind::Info,
                    children: vec![
                        RenderNode::paragraph(vec![InlineSpan::text("first")]),
                        RenderNode::paragraph(vec![InlineSpan::text("last")]),
                    ],
                },
                RenderNode::paragraph(vec![InlineSpan::text("after")]),
            ]
        );
    }

    #[test]
    fn single_line_callout() {
        let nodes = build(Dialect::TOP_LEVEL, &["[CALLOUT:tip] Use a **set**. [/CALLOUT]"]);
        assert_eq!(
            nodes,
            vec![RenderNode::Callout {
                kind: CalloutKind::Tip,
                children: vec![RenderNode::paragraph(vec![
                    InlineSpan::text("Use a "),
                    InlineSpan::bold("set"),
                    InlineSpan::text("."),
                ])],
            }]
        );
    }

    #[test]
    fn close_on_opener_line_leaves_later_markers_as_text() {
        let nodes = build(
            Dialect::TOP_LEVEL,
            &["[CALLOUT:tip] a [/CALLOUT]", "b", "[/CALLOUT]"],
        );
        assert_eq!(
            nodes,
            vec![
                RenderNode::Callout {
                    kind: CalloutKind::Tip,
                    children: vec![RenderNode::paragraph(vec![InlineSpan::text("a")])],
                },
                RenderNode::paragraph(vec![InlineSpan::text("b")]),
                RenderNode::paragraph(vec![InlineSpan::text("[/CALLOUT]")]),
            ]
        );
    }

    #[test]
    fn unterminated_callout_runs_to_end_of_input() {
        let nodes = build(Dialect::TOP_LEVEL, &["[CALLOUT:warning]", "- careful"]);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(
            &nodes[0],
            RenderNode::Callout { kind: CalloutKind::Warning, children } if children.len() == 1
        ));
    }

    #[test]
    fn close_marker_inside_callout_fence_still_closes_callout() {
        // The callout scan looks for its marker before the body is parsed
        let nodes = build(
            Dialect::TOP_LEVEL,
            &["[CALLOUT:algorithm]", "```", "[/CALLOUT]", "```"],
        );
        assert_eq!(
            nodes[0],
            RenderNode::Callout {
                kind: CalloutKind::Algorithm,
                children: vec![RenderNode::CodeBlock {
                    language: "go".into(),
                    content: String::new(),
                }],
            }
        );
        // The trailing fence line opens a new, empty code block
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn ungrouped_dialect_keeps_list_items() {
        let dialect = Dialect {
            group_list_items: false,
            ..Dialect::TOP_LEVEL
        };
        let nodes = build(dialect, &["- a", "- b"]);
        assert!(nodes.iter().all(|n| matches!(n, RenderNode::ListItem(_))));
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn blank_lines_become_line_breaks() {
        let nodes = build(Dialect::TOP_LEVEL, &["a", "", "b"]);
        assert_eq!(nodes[1], RenderNode::LineBreak);
    }
}
