//! Path-addressed typed access over a settings tree.
//!
//! This crate adapts the read-only tree model from `confmate-tree` to
//! the fixed capability surface that logging-configuration consumers
//! expect: dotted, quote-aware path lookup with best-effort type
//! coercion and default-value fallback. All operations are synchronous
//! pure reads; absence and type mismatch are silent fallbacks, never
//! errors.

mod api;
mod error;
mod path;
mod provider;

/// Capability interface consumed downstream.
pub use api::Configuration;
/// Error type for construction and unsupported operations.
pub use error::ConfigError;
/// Path-expression splitting.
pub use path::split_path;
/// Tree-backed capability implementation.
pub use provider::TreeConfig;
