//! Configuration builder and its output.

use tracing::debug;

use crate::computed::ComputedStyle;
use crate::condition::{lock_shared_registry, Condition, ConditionRegistry, ConditionSet};
use crate::error::ConfigError;
use crate::node::StyleNode;
use crate::property::{PropertyExpanders, StyleValue};
use crate::resolve::{Resolution, Resolver};
use crate::stylesheet::Stylesheet;

/// Prefix used for generated variable ids when none is configured.
pub const DEFAULT_PREFIX: &str = "p";

/// Builder for a styling setup: conditions, shorthands and variable prefix.
///
/// Conditions receive ids in the order they are added. By default every
/// configuration gets its own registry, so ids start at 1 for each build.
/// Call [`shared_registry`](Self::shared_registry) to draw ids from the
/// process-wide registry instead.
///
/// # Example
///
/// ```rust
/// use varstyle::{scaled, StyleConfig, StyleNode};
///
/// let styling = StyleConfig::new()
///     .condition("hover", "&:hover")
///     .condition("wide", "@media (min-width: 60em)")
///     .property("p", scaled("padding", 4.0, "px"))
///     .build()
///     .unwrap();
///
/// assert!(styling.stylesheet_text().contains("*:hover"));
/// let style = styling.resolve(&StyleNode::new().set("p", 1));
/// assert_eq!(style.get("padding"), Some("4px"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleConfig {
    conditions: ConditionSet,
    expanders: PropertyExpanders,
    prefix: String,
    shared: bool,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self {
            conditions: ConditionSet::new(),
            expanders: PropertyExpanders::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            shared: false,
        }
    }

    /// Adds a condition. Text starting with `@` is an at-rule, anything else a
    /// selector using `&` for the styled element. Empty text is ignored.
    pub fn condition(mut self, name: &str, raw: &str) -> Self {
        self.conditions.push(name, raw);
        self
    }

    /// Adds every condition of `set`, in order.
    pub fn conditions(mut self, set: ConditionSet) -> Self {
        for (name, raw) in set.iter() {
            self.conditions.push(name, raw);
        }
        self
    }

    /// Adds a shorthand property.
    pub fn property<F>(mut self, name: &str, expander: F) -> Self
    where
        F: Fn(&StyleValue) -> ComputedStyle + Send + Sync + 'static,
    {
        self.expanders.insert(name, expander);
        self
    }

    /// Adds every shorthand of `expanders`.
    pub fn properties(mut self, expanders: PropertyExpanders) -> Self {
        self.expanders.extend(expanders);
        self
    }

    /// Sets the prefix of generated variable ids.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Registers conditions in the process-wide registry.
    ///
    /// All configurations built this way share one id sequence, and their
    /// resolvers recognise conditions registered by earlier ones.
    pub fn shared_registry(mut self) -> Self {
        self.shared = true;
        self
    }

    /// Registers the conditions and generates the stylesheet.
    pub fn build(self) -> Result<Styling, ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }

        let (own, registry) = if self.shared {
            let mut registry = lock_shared_registry();
            // Registration goes into a copy so a conflict halfway through
            // leaves the shared registry untouched.
            let mut staged = ConditionRegistry::clone(&registry);
            let own = self.register_into(&mut staged)?;
            *registry = staged.clone();
            (own, staged)
        } else {
            let mut registry = ConditionRegistry::new();
            let own = self.register_into(&mut registry)?;
            (own, registry)
        };

        let stylesheet = Stylesheet::generate(&own);
        Ok(Styling {
            stylesheet,
            resolver: Resolver::new(registry, self.expanders),
            conditions: own,
        })
    }

    fn register_into(&self, registry: &mut ConditionRegistry) -> Result<Vec<Condition>, ConfigError> {
        let mut own: Vec<Condition> = Vec::new();
        for (name, raw) in self.conditions.iter() {
            if raw.is_empty() {
                debug!(condition = name, "skipping condition with empty definition");
                continue;
            }
            let condition = registry.register(name, raw, &self.prefix)?;
            if own.iter().all(|c| c.name() != name) {
                own.push(condition.clone());
            }
        }
        Ok(own)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A built configuration: the stylesheet to insert once, and the resolver.
#[derive(Debug, Clone)]
pub struct Styling {
    stylesheet: Stylesheet,
    resolver: Resolver,
    conditions: Vec<Condition>,
}

impl Styling {
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// The CSS text defining this configuration's toggle variables.
    pub fn stylesheet_text(&self) -> &str {
        self.stylesheet.text()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Conditions registered by this configuration, in registration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn condition(&self, name: &str) -> Option<&Condition> {
        self.resolver.registry().lookup(name)
    }

    /// Resolves `node` into inline style values.
    pub fn resolve(&self, node: &StyleNode) -> ComputedStyle {
        self.resolver.resolve(node)
    }

    /// Resolves `node` and returns the diagnostics alongside the style.
    pub fn resolve_with_diagnostics(&self, node: &StyleNode) -> Resolution {
        self.resolver.resolve_with_diagnostics(node)
    }
}
