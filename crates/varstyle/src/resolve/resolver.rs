//! Conversion of nested style nodes into flat fallback-chain maps.

use std::sync::Arc;

use super::diagnostic::Diagnostic;
use crate::computed::ComputedStyle;
use crate::condition::{Condition, ConditionRegistry, VariableId};
use crate::node::{StyleEntry, StyleNode};
use crate::property::PropertyExpanders;

/// Value used for the inactive branch when no base value exists.
pub const RESET_VALUE: &str = "unset";

/// Builds `var(<active>, <when_active>) var(<inactive>, <when_inactive>)`.
///
/// Exactly one of the two variables holds `initial` at any time, so exactly
/// one reference falls back to its value and the other contributes nothing.
pub fn fallback_chain(id: &VariableId, when_active: &str, when_inactive: &str) -> String {
    format!(
        "var({}, {}) var({}, {})",
        id.active_var(),
        when_active,
        id.inactive_var(),
        when_inactive
    )
}

/// Output of a resolution along with any diagnostics it produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub style: ComputedStyle,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves style nodes against a frozen set of conditions and shorthands.
///
/// Resolution is pure: the same node always produces the same map, and a
/// resolver can be shared between threads once built.
///
/// # Example
///
/// ```rust
/// use varstyle::{scaled, StyleConfig, StyleNode};
///
/// let styling = StyleConfig::new()
///     .condition("hover", "&:hover")
///     .property("p", scaled("padding", 4.0, "px"))
///     .build()
///     .unwrap();
///
/// let style = styling.resolve(&StyleNode::new().set("p", 2).set("hover", StyleNode::new().set("p", 4)));
/// assert_eq!(style.get("padding"), Some("var(--p1-1, 16px) var(--p1-0, 8px)"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Arc<ConditionRegistry>,
    expanders: PropertyExpanders,
}

impl Resolver {
    pub fn new(registry: ConditionRegistry, expanders: PropertyExpanders) -> Self {
        Self {
            registry: Arc::new(registry),
            expanders,
        }
    }

    pub fn registry(&self) -> &ConditionRegistry {
        &self.registry
    }

    pub fn expanders(&self) -> &PropertyExpanders {
        &self.expanders
    }

    /// Resolves `node`, logging any diagnostics as warnings.
    pub fn resolve(&self, node: &StyleNode) -> ComputedStyle {
        self.resolve_with_diagnostics(node).style
    }

    /// Resolves `node` and also returns the diagnostics it produced.
    pub fn resolve_with_diagnostics(&self, node: &StyleNode) -> Resolution {
        let mut diagnostics = Vec::new();
        let style = self.resolve_node(node, &mut diagnostics);
        Resolution { style, diagnostics }
    }

    fn resolve_node(&self, node: &StyleNode, diagnostics: &mut Vec<Diagnostic>) -> ComputedStyle {
        let mut style = ComputedStyle::new();
        let mut deferred: Vec<(&Condition, &StyleEntry)> = Vec::new();

        // Base values first, so every condition below sees them regardless
        // of where it appears relative to the properties.
        for (key, entry) in node.iter() {
            if let Some(condition) = self.registry.lookup(key) {
                deferred.push((condition, entry));
                continue;
            }
            match entry {
                StyleEntry::Value(value) => style.merge(self.expanders.expand(key, value)),
                StyleEntry::Nested(_) => {
                    report(diagnostics, Diagnostic::UnknownCondition { key: key.to_string() })
                }
            }
        }

        for (condition, entry) in deferred {
            let child = match entry {
                StyleEntry::Nested(child) => self.resolve_node(child, diagnostics),
                StyleEntry::Value(_) => {
                    report(
                        diagnostics,
                        Diagnostic::MalformedCondition {
                            key: condition.name().to_string(),
                            value: entry.to_string(),
                        },
                    );
                    continue;
                }
            };

            for (property, when_active) in child {
                let chain = {
                    let when_inactive = style.get(&property).unwrap_or(RESET_VALUE);
                    fallback_chain(condition.id(), &when_active, when_inactive)
                };
                style.insert(property, chain);
            }
        }

        style
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    diagnostic.emit();
    diagnostics.push(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{scaled, StyleValue};

    fn resolver(conditions: &[(&str, &str)]) -> Resolver {
        let mut registry = ConditionRegistry::new();
        for (name, raw) in conditions {
            registry.register(name, raw, "p").unwrap();
        }
        let expanders = PropertyExpanders::new().add("p", scaled("padding", 4.0, "px"));
        Resolver::new(registry, expanders)
    }

    #[test]
    fn test_plain_properties_pass_through() {
        let r = resolver(&[]);
        let style = r.resolve(&StyleNode::new().set("color", "red").set("opacity", 0.5));
        assert_eq!(style.to_inline_css(), "color: red; opacity: 0.5");
    }

    #[test]
    fn test_single_condition_two_branches() {
        let r = resolver(&[("hover", "&:hover")]);
        let style = r.resolve(
            &StyleNode::new()
                .set("p", 2)
                .set("hover", StyleNode::new().set("p", 4)),
        );
        assert_eq!(
            style.get("padding"),
            Some("var(--p1-1, 16px) var(--p1-0, 8px)")
        );
    }

    #[test]
    fn test_condition_before_base_still_sees_base() {
        let r = resolver(&[("hover", "&:hover")]);
        let style = r.resolve(
            &StyleNode::new()
                .set("hover", StyleNode::new().set("color", "blue"))
                .set("color", "black"),
        );
        assert_eq!(
            style.get("color"),
            Some("var(--p1-1, blue) var(--p1-0, black)")
        );
    }

    #[test]
    fn test_missing_base_uses_reset() {
        let r = resolver(&[("hover", "&:hover")]);
        let style = r.resolve(&StyleNode::new().set("hover", StyleNode::new().set("color", "blue")));
        assert_eq!(
            style.get("color"),
            Some("var(--p1-1, blue) var(--p1-0, unset)")
        );
    }

    #[test]
    fn test_later_sibling_wraps_earlier() {
        let r = resolver(&[("a", "&:hover"), ("b", "&:focus")]);
        let style = r.resolve(
            &StyleNode::new()
                .set("color", "base")
                .set("a", StyleNode::new().set("color", "x"))
                .set("b", StyleNode::new().set("color", "y")),
        );
        assert_eq!(
            style.get("color"),
            Some("var(--p2-1, y) var(--p2-0, var(--p1-1, x) var(--p1-0, base))")
        );
    }

    #[test]
    fn test_key_order_not_registration_order_decides() {
        let r = resolver(&[("a", "&:hover"), ("b", "&:focus")]);
        let style = r.resolve(
            &StyleNode::new()
                .set("color", "base")
                .set("b", StyleNode::new().set("color", "y"))
                .set("a", StyleNode::new().set("color", "x")),
        );
        assert_eq!(
            style.get("color"),
            Some("var(--p1-1, x) var(--p1-0, var(--p2-1, y) var(--p2-0, base))")
        );
    }

    #[test]
    fn test_nested_conditions_three_branches() {
        let r = resolver(&[("dark", ".dark &"), ("hover", "&:hover")]);
        let node = StyleNode::new().set("color", "base").set(
            "dark",
            StyleNode::new()
                .set("color", "mid")
                .set("hover", StyleNode::new().set("color", "inner")),
        );
        let style = r.resolve(&node);
        assert_eq!(
            style.get("color"),
            Some("var(--p1-1, var(--p2-1, inner) var(--p2-0, mid)) var(--p1-0, base)")
        );
        assert_eq!(r.resolve(&node), style);
    }

    #[test]
    fn test_malformed_condition_is_skipped() {
        let r = resolver(&[("hover", "&:hover")]);
        let resolution = r.resolve_with_diagnostics(
            &StyleNode::new().set("color", "red").set("hover", "blue"),
        );
        assert_eq!(resolution.style.to_inline_css(), "color: red");
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::MalformedCondition {
                key: "hover".into(),
                value: "\"blue\"".into(),
            }]
        );
    }

    #[test]
    fn test_unknown_nested_key_is_skipped() {
        let r = resolver(&[("hover", "&:hover")]);
        let resolution = r.resolve_with_diagnostics(
            &StyleNode::new()
                .set("hovr", StyleNode::new().set("color", "blue"))
                .set("margin", 0),
        );
        assert_eq!(resolution.style.to_inline_css(), "margin: 0");
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::UnknownCondition { key: "hovr".into() }]
        );
    }

    #[test]
    fn test_condition_name_wins_over_shorthand() {
        let mut registry = ConditionRegistry::new();
        registry.register("p", "&:hover", "p").unwrap();
        let expanders = PropertyExpanders::new().add("p", scaled("padding", 4.0, "px"));
        let r = Resolver::new(registry, expanders);

        let resolution = r.resolve_with_diagnostics(&StyleNode::new().set("p", 2));
        assert!(resolution.style.is_empty());
        assert!(matches!(
            resolution.diagnostics[0],
            Diagnostic::MalformedCondition { .. }
        ));
    }

    #[test]
    fn test_expansion_inside_condition() {
        let r = resolver(&[("hover", "&:hover")]);
        let style = r.resolve(&StyleNode::new().set("hover", StyleNode::new().set("p", StyleValue::from("auto"))));
        assert_eq!(
            style.get("padding"),
            Some("var(--p1-1, auto) var(--p1-0, unset)")
        );
    }

    #[test]
    fn test_fallback_chain_format() {
        let mut registry = ConditionRegistry::new();
        let id = registry.register("x", "&:active", "q").unwrap().id().clone();
        assert_eq!(fallback_chain(&id, "a", "b"), "var(--q1-1, a) var(--q1-0, b)");
    }
}
