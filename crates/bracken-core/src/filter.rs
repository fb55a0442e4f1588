//! Space-stripping over parsed trees.
//!
//! The scanner keeps every non-structural character, spaces included, so
//! that the tree stays isomorphic to the input. Consumers that only care
//! about the shape of an expression run the tree through [`strip_spaces`]
//! before rendering.

use log::debug;

use crate::tree::Node;

/// Removes every `Leaf(' ')` from a tree, recursively.
///
/// Only the exact space character is removed; tabs and newlines are ordinary
/// leaves. Group structure is preserved: a group whose children are all
/// spaces becomes an empty group, it is not dropped.
///
/// The operation is pure and total, and idempotent: filtering an already
/// filtered tree returns it unchanged.
///
/// # Examples
///
/// ```
/// use bracken_core::{filter::strip_spaces, tree::Node};
///
/// let tree = vec![Node::leaf('a'), Node::leaf(' '), Node::leaf('+')];
/// let filtered = strip_spaces(&tree);
/// assert_eq!(filtered, vec![Node::leaf('a'), Node::leaf('+')]);
/// ```
pub fn strip_spaces(nodes: &[Node]) -> Vec<Node> {
    let filtered = strip_spaces_inner(nodes);

    let removed = count_nodes(nodes) - count_nodes(&filtered);
    debug!(removed; "Stripped space leaves");

    filtered
}

fn strip_spaces_inner(nodes: &[Node]) -> Vec<Node> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Leaf(' ') => None,
            Node::Leaf(c) => Some(Node::Leaf(*c)),
            Node::Group(children) => Some(Node::Group(strip_spaces_inner(children))),
        })
        .collect()
}

fn count_nodes(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Leaf(_) => 1,
            Node::Group(children) => 1 + count_nodes(children),
        })
        .sum()
}
