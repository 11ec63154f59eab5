//! Global stylesheet defining the toggle variables of each condition.
//!
//! Every condition contributes two rules. The first applies to every
//! element and marks the condition inactive:
//!
//! ```css
//! * { --p1-0: initial; --p1-1: ; }
//! ```
//!
//! The second flips the pair wherever the condition holds. For selectors the
//! `&` placeholder is replaced by the universal selector (`&:hover` becomes
//! `*:hover`); at-rules wrap a universal rule instead:
//!
//! ```css
//! *:hover { --p1-0: ; --p1-1: initial; }
//! @media print { * { --p2-0: ; --p2-1: initial; } }
//! ```
//!
//! Every `&` in a selector is replaced, so `& + &` becomes `* + *`. Only the
//! replaced selector is emitted; no separate rule is written for the literal
//! selector, since elements it matches already match the replaced one.
//!
//! A variable holding `initial` makes `var()` use its fallback, while an
//! empty one substitutes nothing, which is how resolved values pick a branch.

use std::fmt;

use tracing::debug;

use crate::condition::{Condition, ConditionKind};

const SELF_TOKEN: char = '&';
const UNIVERSAL: &str = "*";

/// Generated stylesheet text, to be inserted once into the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    text: String,
}

impl Stylesheet {
    /// Builds the stylesheet for `conditions`, one fragment each, in order.
    pub fn generate<'a, I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = &'a Condition>,
    {
        let fragments: Vec<String> = conditions.into_iter().map(condition_rules).collect();
        debug!(conditions = fragments.len(), "generated stylesheet");
        Self {
            text: fragments.join("\n"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Wraps the text in a `<style>` element.
    pub fn to_style_tag(&self) -> String {
        format!("<style>{}</style>", self.text)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Emits the default and override rules for one condition.
pub fn condition_rules(condition: &Condition) -> String {
    let id = condition.id();
    let inactive = id.inactive_var();
    let active = id.active_var();

    let default_rule = format!("{UNIVERSAL} {{ {inactive}: initial; {active}: ; }}");
    let flipped = format!("{{ {inactive}: ; {active}: initial; }}");
    let override_rule = match condition.kind() {
        ConditionKind::Selector => {
            let selector = condition.raw().replace(SELF_TOKEN, UNIVERSAL);
            format!("{selector} {flipped}")
        }
        ConditionKind::Block => format!("{} {{ {UNIVERSAL} {flipped} }}", condition.raw()),
    };

    format!("{default_rule}\n{override_rule}")
}
