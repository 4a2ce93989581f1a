//! ASCII diagram formatter for parse trees
//!
//! Renders a tree one line per node, filesystem-listing style: `|- ` marks
//! a node with following siblings, `'- ` the last of its group, and each
//! ancestor level contributes `|  ` while it still has unvisited siblings
//! (`   ` otherwise).
//!
//! The traversal is pre-order and iterative, over an explicit stack of
//! pending sibling lists, so depth is bounded by memory rather than by the
//! call stack.

use std::collections::VecDeque;

use crate::pattern::parser::tree::ParseTree;

/// Render a tree into its ASCII diagram
///
/// Pure function of the input tree: no state survives the call, and the
/// tree is only read.
pub fn render(root: &ParseTree) -> String {
    let mut out = String::new();

    // Stack of pending sibling lists; the root starts as the sole entry
    // of the top-level group
    let mut pending: Vec<VecDeque<&ParseTree>> = vec![VecDeque::from([root])];

    while let Some(siblings) = pending.last_mut() {
        let Some(node) = siblings.pop_front() else {
            // This sibling group is exhausted
            pending.pop();
            continue;
        };
        let is_last = siblings.is_empty();

        // One indent cell per ancestor level, bar while it still has
        // unvisited siblings
        let depth = pending.len();
        for level in &pending[..depth - 1] {
            out.push_str(if level.is_empty() { "   " } else { "|  " });
        }

        out.push_str(if is_last { "'- " } else { "|- " });
        out.push_str(node.label());
        out.push('\n');

        if !node.children().is_empty() {
            pending.push(node.children().iter().collect());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parser::tree::NodeKind;

    fn node(kind: NodeKind, children: Vec<ParseTree>) -> ParseTree {
        ParseTree::node(kind, children)
    }

    fn leaf(text: &str) -> ParseTree {
        ParseTree::leaf(text)
    }

    #[test]
    fn test_root_with_two_leaves() {
        let tree = node(NodeKind::Expr, vec![leaf("1"), leaf("+2")]);
        assert_eq!(render(&tree), "'- expr\n   |- 1\n   '- +2\n");
    }

    #[test]
    fn test_single_leaf_root() {
        assert_eq!(render(&leaf("x")), "'- x\n");
    }

    #[test]
    fn test_single_child_chain_indents_with_spaces() {
        let tree = node(
            NodeKind::Pattern,
            vec![node(NodeKind::Alternation, vec![leaf("x")])],
        );
        assert_eq!(render(&tree), "'- pattern\n   '- alternation\n      '- x\n");
    }

    #[test]
    fn test_open_level_keeps_vertical_bar() {
        // The bar continues through descendants of a non-last child
        let tree = node(
            NodeKind::Alternation,
            vec![node(NodeKind::Expr, vec![leaf("a"), leaf("b")]), leaf("c")],
        );
        let expected = "\
'- alternation
   |- expr
   |  |- a
   |  '- b
   '- c
";
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tree = node(
            NodeKind::Expr,
            vec![leaf("a"), node(NodeKind::Quantifier, vec![leaf("*")])],
        );
        assert_eq!(render(&tree), render(&tree));
    }

    #[test]
    fn test_one_line_per_node() {
        let tree = node(
            NodeKind::Pattern,
            vec![node(
                NodeKind::Alternation,
                vec![
                    node(NodeKind::Expr, vec![leaf("a")]),
                    leaf("|"),
                    node(NodeKind::Expr, vec![leaf("b")]),
                ],
            )],
        );
        assert_eq!(render(&tree).lines().count(), tree.node_count());
    }
}
