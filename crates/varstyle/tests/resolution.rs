//! Integration tests for style resolution.
//!
//! These cover the observable laws of the resolver: literal passthrough,
//! shorthand expansion, last-listed-wins between sibling conditions, and one
//! extra fallback branch per nesting level.

use proptest::prelude::*;
use varstyle::{
    scaled, ComputedStyle, Diagnostic, StyleConfig, StyleNode, StyleValue, Styling,
};

fn styling() -> Styling {
    StyleConfig::new()
        .condition("hover", "&:hover")
        .condition("focus", "&:focus")
        .condition("print", "@media print")
        .property("p", scaled("padding", 4.0, "px"))
        .property("size", |v: &StyleValue| {
            ComputedStyle::new()
                .with("width", v.to_css())
                .with("height", v.to_css())
        })
        .build()
        .unwrap()
}

#[test]
fn test_end_to_end_padding() {
    let styling = styling();
    let style = styling.resolve(
        &StyleNode::new()
            .set("p", 2)
            .set("hover", StyleNode::new().set("p", 4)),
    );
    assert_eq!(style.len(), 1);
    assert_eq!(
        style.get("padding"),
        Some("var(--p1-1, 16px) var(--p1-0, 8px)")
    );
    assert!(styling
        .stylesheet_text()
        .contains("*:hover { --p1-0: ; --p1-1: initial; }"));
}

#[test]
fn test_last_listed_condition_is_outermost() {
    let style = styling().resolve(
        &StyleNode::new()
            .set("color", "base")
            .set("hover", StyleNode::new().set("color", "x"))
            .set("focus", StyleNode::new().set("color", "y")),
    );
    let color = style.get("color").unwrap();
    // With both active, the focus variable's fallback is taken and the
    // inactive branch holding the hover chain contributes nothing.
    assert!(color.starts_with("var(--p2-1, y) var(--p2-0, "));
    assert!(color.contains("var(--p1-1, x) var(--p1-0, base)"));
}

#[test]
fn test_two_level_nesting_has_three_branches() {
    let node = StyleNode::new().set("color", "base").set(
        "print",
        StyleNode::new()
            .set("color", "mid")
            .set("hover", StyleNode::new().set("color", "inner")),
    );
    let styling = styling();
    let style = styling.resolve(&node);
    let color = style.get("color").unwrap();

    assert_eq!(color.matches("var(").count(), 4);
    for branch in ["inner", "mid", "base"] {
        assert!(color.contains(branch), "missing {} in {}", branch, color);
    }
    assert_eq!(styling.resolve(&node), style);
}

#[test]
fn test_multi_property_shorthand_inside_condition() {
    let style = styling().resolve(
        &StyleNode::new()
            .set("size", "10px")
            .set("print", StyleNode::new().set("size", "1in")),
    );
    assert_eq!(
        style.to_inline_css(),
        "width: var(--p3-1, 1in) var(--p3-0, 10px); height: var(--p3-1, 1in) var(--p3-0, 10px)"
    );
}

#[test]
fn test_typo_condition_with_scalar_passes_through() {
    let resolution = styling().resolve_with_diagnostics(&StyleNode::new().set("hovr", "red"));
    assert_eq!(resolution.style.get("hovr"), Some("red"));
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_typo_condition_with_object_is_not_malformed() {
    let resolution = styling().resolve_with_diagnostics(
        &StyleNode::new().set("hovr", StyleNode::new().set("color", "red")),
    );
    assert!(resolution
        .diagnostics
        .iter()
        .all(|d| !matches!(d, Diagnostic::MalformedCondition { .. })));
}

#[test]
fn test_malformed_condition_does_not_block_other_keys() {
    let resolution = styling().resolve_with_diagnostics(
        &StyleNode::new()
            .set("hover", 3)
            .set("margin", "0")
            .set("focus", StyleNode::new().set("margin", "1px")),
    );
    assert_eq!(resolution.diagnostics.len(), 1);
    assert_eq!(resolution.diagnostics[0].key(), "hover");
    assert_eq!(
        resolution.style.get("margin"),
        Some("var(--p2-1, 1px) var(--p2-0, 0)")
    );
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let styling = std::sync::Arc::new(styling());
    let node = StyleNode::new().set("hover", StyleNode::new().set("p", 1));
    let expected = styling.resolve(&node);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let styling = styling.clone();
            let node = node.clone();
            std::thread::spawn(move || styling.resolve(&node))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn prop_unregistered_keys_pass_through(
        key in "[a-z][a-z-]{0,15}",
        value in "[a-z0-9 #%.()-]{0,20}",
    ) {
        prop_assume!(!["hover", "focus", "print", "p", "size"].contains(&key.as_str()));
        let style = styling().resolve(&StyleNode::new().set(key.as_str(), value.as_str()));
        prop_assert_eq!(style, ComputedStyle::new().with(key, value));
    }

    #[test]
    fn prop_shorthand_matches_expander(n in -1000i32..1000) {
        let styling = styling();
        let style = styling.resolve(&StyleNode::new().set("p", n));
        let expected = styling.resolver().expanders().expand("p", &StyleValue::from(n));
        prop_assert_eq!(style, expected);
    }
}
