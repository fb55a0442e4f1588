//! Unit tests for the bracket scanner.
//!
//! These cover the documented permissive behavior (unbalanced input never
//! fails) as well as the opt-in strict mode and its diagnostics.

use bracken_core::tree::Node;

use crate::{error::ErrorCode, scan, scan_strict};

/// Shorthand for a leaf node.
fn leaf(c: char) -> Node {
    Node::leaf(c)
}

/// Shorthand for a group node.
fn group(children: Vec<Node>) -> Node {
    Node::group(children)
}

mod shape_tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(""), Vec::<Node>::new());
    }

    #[test]
    fn test_flat_text_is_all_leaves() {
        assert_eq!(scan("ab"), vec![leaf('a'), leaf('b')]);
    }

    #[test]
    fn test_spaces_are_ordinary_leaves() {
        assert_eq!(scan("a b"), vec![leaf('a'), leaf(' '), leaf('b')]);
    }

    #[test]
    fn test_nested_expression() {
        assert_eq!(
            scan("(a+(b+c))"),
            vec![group(vec![
                leaf('a'),
                leaf('+'),
                group(vec![leaf('b'), leaf('+'), leaf('c')]),
            ])]
        );
    }

    #[test]
    fn test_nested_expression_with_spaces() {
        assert_eq!(
            scan("(a + (b + c))"),
            vec![group(vec![
                leaf('a'),
                leaf(' '),
                leaf('+'),
                leaf(' '),
                group(vec![leaf('b'), leaf(' '), leaf('+'), leaf(' '), leaf('c')]),
            ])]
        );
    }

    #[test]
    fn test_empty_group_is_kept() {
        assert_eq!(scan("a()b"), vec![leaf('a'), group(Vec::new()), leaf('b')]);
    }

    #[test]
    fn test_sibling_groups() {
        assert_eq!(
            scan("(a)(b)"),
            vec![group(vec![leaf('a')]), group(vec![leaf('b')])]
        );
    }

    #[test]
    fn test_group_depth_matches_paren_depth() {
        let tree = scan("(((x)))");
        assert_eq!(
            tree,
            vec![group(vec![group(vec![group(vec![leaf('x')])])])]
        );
        assert_eq!(tree[0].max_depth(), 3);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(
            scan("(α+β)"),
            vec![group(vec![leaf('α'), leaf('+'), leaf('β')])]
        );
    }
}

mod permissive_tests {
    use super::*;

    #[test]
    fn test_unclosed_group_runs_to_end_of_input() {
        assert_eq!(scan("(a"), vec![group(vec![leaf('a')])]);
    }

    #[test]
    fn test_nested_unclosed_groups() {
        assert_eq!(scan("((x"), vec![group(vec![group(vec![leaf('x')])])]);
    }

    #[test]
    fn test_stray_closing_paren_ends_the_scan() {
        // Everything after the depth-zero `)` is dropped, as documented.
        assert_eq!(scan("a)b"), vec![leaf('a')]);
    }

    #[test]
    fn test_lone_closing_paren() {
        assert_eq!(scan(")"), Vec::<Node>::new());
    }

    #[test]
    fn test_extra_closing_paren_after_balanced_group() {
        assert_eq!(scan("(a))b"), vec![group(vec![leaf('a')])]);
    }
}

mod strict_tests {
    use super::*;

    #[test]
    fn test_balanced_input_is_ok() {
        let tree = scan_strict("(a + (b + c))").expect("balanced input must pass strict scan");
        assert_eq!(tree, scan("(a + (b + c))"));
    }

    #[test]
    fn test_empty_input_is_ok() {
        assert!(scan_strict("").is_ok());
    }

    #[test]
    fn test_unclosed_group_is_reported() {
        let err = scan_strict("(a").expect_err("unclosed group must fail strict scan");
        let diags = err.diagnostics();

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code(), Some(ErrorCode::E101));

        let primary = &diags[0].labels()[0];
        assert!(primary.is_primary());
        assert_eq!(primary.span().start(), 0);
        assert_eq!(primary.span().end(), 1);
    }

    #[test]
    fn test_stray_closing_paren_is_reported() {
        let err = scan_strict("ab)").expect_err("stray `)` must fail strict scan");
        let diags = err.diagnostics();

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code(), Some(ErrorCode::E100));
        assert_eq!(diags[0].labels()[0].span().start(), 2);
    }

    #[test]
    fn test_every_unclosed_group_is_reported() {
        let err = scan_strict("((a").expect_err("two unclosed groups must fail strict scan");
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();

        assert_eq!(codes, vec![Some(ErrorCode::E101), Some(ErrorCode::E101)]);
    }

    #[test]
    fn test_strict_failure_still_matches_permissive_shape() {
        // Strict mode changes the error contract, not the tree the
        // permissive scan would have produced.
        assert_eq!(scan("(a"), vec![group(vec![leaf('a')])]);
        assert!(scan_strict("(a").is_err());
    }
}

mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// A leaf character: anything but a structural parenthesis.
    fn leaf_char_strategy() -> impl Strategy<Value = char> {
        any::<char>().prop_filter("non-structural character", |c| *c != '(' && *c != ')')
    }

    fn node_strategy() -> impl Strategy<Value = Node> {
        let leaf = leaf_char_strategy().prop_map(Node::Leaf);
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(Node::Group)
        })
    }

    fn tree_strategy() -> impl Strategy<Value = Vec<Node>> {
        prop::collection::vec(node_strategy(), 0..6)
    }

    /// Writes a tree back out as balanced source text.
    fn to_source(nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Leaf(c) => out.push(*c),
                Node::Group(children) => {
                    out.push('(');
                    out.push_str(&to_source(children));
                    out.push(')');
                }
            }
        }
        out
    }

    proptest! {
        #[test]
        fn scan_never_panics_and_never_overcounts(source in ".*") {
            let tree = scan(&source);
            let leaves: usize = tree.iter().map(Node::leaf_count).sum();
            prop_assert!(leaves <= source.chars().count());
        }

        #[test]
        fn balanced_source_round_trips(tree in tree_strategy()) {
            let source = to_source(&tree);
            prop_assert_eq!(scan(&source), tree.clone());
            prop_assert_eq!(scan_strict(&source).unwrap(), tree);
        }
    }
}
