//! Style resolution.
//!
//! A [`Resolver`] walks a [`StyleNode`](crate::StyleNode), expands shorthand
//! properties, and folds every condition block into fallback chains on the
//! properties it touches. Problems are reported as [`Diagnostic`]s and the
//! affected keys are skipped; resolution itself never fails.

mod diagnostic;
mod resolver;

pub use diagnostic::Diagnostic;
pub use resolver::{fallback_chain, Resolution, Resolver, RESET_VALUE};
