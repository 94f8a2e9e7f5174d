//! Settings tree model shared by the confmate crates.
//!
//! A [`Table`] is a nested string-keyed mapping of dynamically typed
//! [`Value`]s. The embedding application populates it (typically from a
//! document it parsed elsewhere) and the provider crate reads it; nothing
//! in this crate merges sources, watches files, or validates schemas.

mod json;
mod value;

/// Nested mapping node of a settings tree.
pub use value::Table;
/// Dynamically typed settings value.
pub use value::Value;
/// The "no timeout" duration sentinel.
pub use value::infinite_duration;
