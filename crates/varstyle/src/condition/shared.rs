//! Process-wide condition registry.
//!
//! Configurations built with [`StyleConfig::shared_registry`](crate::StyleConfig::shared_registry)
//! register their conditions here instead of in a private registry, so every
//! such configuration in the process draws ids from one sequence and can see
//! conditions registered by the others.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::registry::ConditionRegistry;

static SHARED_REGISTRY: Lazy<Mutex<ConditionRegistry>> =
    Lazy::new(|| Mutex::new(ConditionRegistry::new()));

/// Locks the shared registry for the duration of a configuration call.
pub(crate) fn lock_shared_registry() -> MutexGuard<'static, ConditionRegistry> {
    // The registry is only mutated through `register`, which leaves it
    // consistent even if a panic happened while the lock was held.
    SHARED_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Returns a copy of the shared registry as it is now.
pub fn shared_registry_snapshot() -> ConditionRegistry {
    lock_shared_registry().clone()
}

/// Clears the shared registry and restarts its id sequence.
///
/// Stylesheets generated before the reset no longer match style maps
/// resolved afterwards. Meant for tests.
pub fn reset_shared_registry() {
    *lock_shared_registry() = ConditionRegistry::new();
}
