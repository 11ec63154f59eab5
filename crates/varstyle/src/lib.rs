//! # Varstyle - conditional inline styles without per-element stylesheets
//!
//! Varstyle turns nested style descriptions with named conditions ("on
//! hover", "inside a media query", "under `.dark`") into flat maps of inline
//! style values. Conditional behavior lives entirely in the values: each one
//! is a chain of `var()` references whose fallbacks the browser picks at
//! paint time, driven by a small global stylesheet generated once.
//!
//! ## Quick start
//!
//! ```rust
//! use varstyle::{scaled, StyleConfig, StyleNode};
//!
//! let styling = StyleConfig::new()
//!     .condition("hover", "&:hover")
//!     .property("p", scaled("padding", 4.0, "px"))
//!     .build()
//!     .unwrap();
//!
//! // Insert once into the document.
//! let css = styling.stylesheet_text();
//! assert!(css.contains("*:hover"));
//!
//! // Resolve as often as needed.
//! let style = styling.resolve(
//!     &StyleNode::new()
//!         .set("p", 2)
//!         .set("hover", StyleNode::new().set("p", 4)),
//! );
//! assert_eq!(style.get("padding"), Some("var(--p1-1, 16px) var(--p1-0, 8px)"));
//! ```
//!
//! ## Conditions
//!
//! A condition is a selector using `&` for the styled element (`&:hover`,
//! `.dark &`) or an at-rule prelude (`@media (min-width: 60em)`). Each gets a
//! pair of toggle variables, `--<id>-0` and `--<id>-1`, exactly one of which
//! holds `initial` at any time. See [`Stylesheet`] for the generated rules.
//!
//! ## Precedence
//!
//! Within one level of a [`StyleNode`], properties are applied first and
//! conditions afterwards in key order. When several conditions at the same
//! level set a property and are active together, the one listed last wins.
//! Nested conditions produce one extra branch per level.
//!
//! ## Diagnostics
//!
//! A registered condition given a plain value, or a nested node under a key
//! that is not a registered condition, is skipped. The problem is logged with
//! `tracing` and returned by [`Styling::resolve_with_diagnostics`].

pub mod condition;
mod computed;
mod config;
mod error;
mod node;
pub mod property;
pub mod resolve;
mod stylesheet;

pub use computed::ComputedStyle;
pub use condition::{
    reset_shared_registry, shared_registry_snapshot, Condition, ConditionKind, ConditionRegistry,
    ConditionSet, VariableId,
};
pub use config::{StyleConfig, Styling, DEFAULT_PREFIX};
pub use error::ConfigError;
pub use node::{StyleEntry, StyleNode};
pub use property::{multi, scaled, ExpanderFn, PropertyExpanders, StyleValue};
pub use resolve::{fallback_chain, Diagnostic, Resolution, Resolver, RESET_VALUE};
pub use stylesheet::{condition_rules, Stylesheet};
