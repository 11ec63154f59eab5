//! Named conditions and the registry that assigns their toggle variables.
//!
//! - [`Condition`]: a selector or at-rule bound to a [`VariableId`]
//! - [`ConditionRegistry`]: name-to-condition table with sequential ids
//! - [`ConditionSet`]: ordered definitions, loadable from YAML or JSON

#[allow(clippy::module_inception)]
mod condition;
mod registry;
mod set;
mod shared;

pub use condition::{Condition, ConditionKind, VariableId};
pub use registry::ConditionRegistry;
pub use set::ConditionSet;
pub(crate) use shared::lock_shared_registry;
pub use shared::{reset_shared_registry, shared_registry_snapshot};
