//! The bracket tree produced by the scanner.
//!
//! This module provides the [`Node`] sum type. A parsed document is a
//! `Vec<Node>` at nesting depth zero; it is never wrapped in an outer group.

use serde::{Deserialize, Serialize};

/// One element of a bracket tree.
///
/// A node is either a single non-structural character or the ordered
/// contents of one matched `(`...`)` span. The delimiting parentheses are
/// consumed during scanning and never stored, so a group's children contain
/// only what sits strictly between them.
///
/// Trees are immutable once built: the scanner constructs them in a single
/// pass and consumers only read them.
///
/// # Examples
///
/// ```
/// use bracken_core::tree::Node;
///
/// let tree = Node::group(vec![
///     Node::leaf('a'),
///     Node::leaf('+'),
///     Node::group(vec![Node::leaf('b')]),
/// ]);
///
/// assert!(tree.is_group());
/// assert_eq!(tree.max_depth(), 2);
/// assert_eq!(tree.leaf_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A single character that is not a structural parenthesis.
    Leaf(char),

    /// The ordered children of one matched parenthesis span.
    ///
    /// An empty vector is a valid group: `"()"` parses to `Group(vec![])`,
    /// not to nothing.
    Group(Vec<Node>),
}

impl Node {
    /// Creates a leaf node from a character.
    pub fn leaf(c: char) -> Self {
        Node::Leaf(c)
    }

    /// Creates a group node from its children.
    pub fn group(children: Vec<Node>) -> Self {
        Node::Group(children)
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns `true` if this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    /// Returns the leaf character, or `None` for a group.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Node::Leaf(c) => Some(*c),
            Node::Group(_) => None,
        }
    }

    /// Returns the children of a group, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Leaf(_) => None,
            Node::Group(children) => Some(children),
        }
    }

    /// Returns the maximum nesting depth below this node.
    ///
    /// A leaf has depth zero; a group is one deeper than its deepest child,
    /// so an empty group has depth one.
    pub fn max_depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Group(children) => {
                1 + children
                    .iter()
                    .map(Node::max_depth)
                    .max()
                    .unwrap_or_default()
            }
        }
    }

    /// Returns the number of leaves in the subtree rooted at this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Group(children) => children.iter().map(Node::leaf_count).sum(),
        }
    }
}
