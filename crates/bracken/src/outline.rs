//! Indented outline rendering of bracket trees.

use bracken_core::tree::Node;

use crate::config::RenderConfig;

/// Renders a tree as an indented outline.
///
/// Each leaf emits one line: its nesting depth in indentation units,
/// followed by the character. A group emits no line of its own; its
/// children render one level deeper.
pub(crate) fn render_outline(nodes: &[Node], config: &RenderConfig) -> String {
    let mut out = String::new();
    render_nodes(nodes, 0, config, &mut out);
    out
}

fn render_nodes(nodes: &[Node], depth: usize, config: &RenderConfig, out: &mut String) {
    for node in nodes {
        match node {
            Node::Leaf(c) => {
                let indent = depth * config.indent_width();
                for _ in 0..indent {
                    out.push(config.indent_style().unit());
                }
                out.push(*c);
                out.push('\n');
            }
            Node::Group(children) => render_nodes(children, depth + 1, config, out),
        }
    }
}
