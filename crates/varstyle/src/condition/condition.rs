//! Condition definitions and their generated toggle variables.

use std::fmt;

/// Whether a condition is a selector or an at-rule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// A CSS selector where `&` stands for the styled element (`&:hover`, `.dark &`).
    Selector,
    /// An at-rule such as `@media` or `@supports` wrapping the override rule.
    Block,
}

impl ConditionKind {
    /// Classifies raw condition text: anything starting with `@` is a block.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with('@') {
            ConditionKind::Block
        } else {
            ConditionKind::Selector
        }
    }
}

/// Identifier of a condition's toggle variable pair, `<prefix><sequence>`.
///
/// The pair is `--<id>-0` (set to `initial` while the condition is inactive)
/// and `--<id>-1` (set to `initial` while it is active).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableId {
    prefix: String,
    sequence: u32,
}

impl VariableId {
    pub(crate) fn new(prefix: &str, sequence: u32) -> Self {
        Self {
            prefix: prefix.to_string(),
            sequence,
        }
    }

    /// Position of the condition in registration order, starting at 1.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Prefix the identifier was generated with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Custom property holding `initial` while the condition is inactive.
    pub fn inactive_var(&self) -> String {
        self.custom_property(0)
    }

    /// Custom property holding `initial` while the condition is active.
    pub fn active_var(&self) -> String {
        self.custom_property(1)
    }

    fn custom_property(&self, flag: u8) -> String {
        CustomProperty { id: self, flag }.to_string()
    }
}

/// `--<id>-<flag>`, escaped so any prefix yields a valid property name.
struct CustomProperty<'a> {
    id: &'a VariableId,
    flag: u8,
}

impl fmt::Display for CustomProperty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("--")?;
        cssparser::serialize_name(&format!("{}-{}", self.id, self.flag), f)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.sequence)
    }
}

/// A named condition bound to its toggle variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    name: String,
    raw: String,
    kind: ConditionKind,
    id: VariableId,
}

impl Condition {
    pub(crate) fn new(name: &str, raw: &str, id: VariableId) -> Self {
        Self {
            name: name.to_string(),
            raw: raw.to_string(),
            kind: ConditionKind::classify(raw),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The selector or at-rule prelude exactly as configured.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn id(&self) -> &VariableId {
        &self.id
    }
}
