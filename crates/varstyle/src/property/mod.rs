//! Property values and shorthand expansion.

mod builtin;
mod expander;
mod value;

pub use builtin::{multi, scaled};
pub use expander::{ExpanderFn, PropertyExpanders};
pub use value::StyleValue;
