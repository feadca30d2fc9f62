use super::types::{List, RenderNode};

/// Folds runs of adjacent `ListItem`s with equal orderedness into `List`s.
///
/// Any other node, including a `LineBreak`, ends the current run. Nodes that
/// are not list items pass through unchanged and in order.
pub fn group_lists(nodes: Vec<RenderNode>) -> Vec<RenderNode> {
    let mut out: Vec<RenderNode> = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            RenderNode::ListItem(item) => match out.last_mut() {
                Some(RenderNode::List(list)) if list.ordered == item.ordered => {
                    list.items.push(item)
                }
                _ => out.push(RenderNode::List(List {
                    ordered: item.ordered,
                    items: vec![item],
                })),
            },
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::types::ListItem, inline::InlineSpan};
    use pretty_assertions::assert_eq;

    fn item(ordered: bool, text: &str) -> RenderNode {
        RenderNode::ListItem(ListItem {
            ordered,
            spans: vec![InlineSpan::text(text)],
        })
    }

    fn list_item(ordered: bool, text: &str) -> ListItem {
        ListItem {
            ordered,
            spans: vec![InlineSpan::text(text)],
        }
    }

    #[test]
    fn consecutive_items_are_grouped() {
        let grouped = group_lists(vec![item(false, "a"), item(false, "b")]);
        assert_eq!(
            grouped,
            vec![RenderNode::list(
                false,
                vec![list_item(false, "a"), list_item(false, "b")]
            )]
        );
    }

    #[test]
    fn orderedness_change_starts_new_list() {
        let grouped = group_lists(vec![item(false, "a"), item(true, "1"), item(true, "2")]);
        assert_eq!(
            grouped,
            vec![
                RenderNode::list(false, vec![list_item(false, "a")]),
                RenderNode::list(true, vec![list_item(true, "1"), list_item(true, "2")]),
            ]
        );
    }

    #[test]
    fn line_break_splits_runs() {
        let grouped = group_lists(vec![item(false, "a"), RenderNode::LineBreak, item(false, "b")]);
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[1], RenderNode::LineBreak);
    }

    #[test]
    fn non_list_nodes_pass_through() {
        let nodes = vec![
            RenderNode::Heading { text: "h".into() },
            RenderNode::paragraph(vec![InlineSpan::text("p")]),
        ];
        assert_eq!(group_lists(nodes.clone()), nodes);
    }
}
