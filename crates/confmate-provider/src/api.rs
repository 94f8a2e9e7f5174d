//! Capability interface expected by logging-configuration consumers.

use crate::ConfigError;
use chrono::TimeDelta;
use std::fmt;

/// Typed, path-addressed read surface over a settings source.
///
/// Getters never fail: a missing path and a value of the wrong dynamic
/// type are treated identically and fall back to the supplied default,
/// or to the type's zero value when no default is given. The optional
/// default is a single value; there is no fallback chain. `Display`
/// renders the full settings snapshot for diagnostics.
pub trait Configuration: fmt::Display {
    /// Boolean at `path`, or the default / `false`.
    fn get_boolean(&self, path: &str, default: Option<bool>) -> bool;

    /// 32-bit integer at `path` (narrowed from storage width), or the
    /// default / `0`.
    fn get_int32(&self, path: &str, default: Option<i32>) -> i32;

    /// 64-bit integer at `path`, or the default / `0`.
    fn get_int64(&self, path: &str, default: Option<i64>) -> i64;

    /// 32-bit float at `path` (narrowed from storage width), or the
    /// default / `0.0`.
    fn get_float32(&self, path: &str, default: Option<f32>) -> f32;

    /// 64-bit float at `path`, or the default / `0.0`.
    fn get_float64(&self, path: &str, default: Option<f64>) -> f64;

    /// String at `path`, or the default / `""`.
    fn get_string(&self, path: &str, default: Option<&str>) -> String;

    /// Duration at `path`, or the default / zero duration.
    fn get_time_duration(&self, path: &str, default: Option<TimeDelta>) -> TimeDelta;

    /// Like [`Configuration::get_time_duration`], but panics when the
    /// result equals the infinite ("no timeout") sentinel. Infinite
    /// durations are categorically disallowed wherever this variant is
    /// used.
    fn get_time_duration_infinite_not_allowed(
        &self,
        path: &str,
        default: Option<TimeDelta>,
    ) -> TimeDelta;

    /// Integer at `path` read as a byte count, widened for headroom;
    /// zero for any non-integer value or absence.
    fn get_byte_size(&self, path: &str) -> i128;

    /// String list at `path`; empty for any other type or absence.
    fn get_string_list(&self, path: &str) -> Vec<String>;

    /// Always empty; the tree abstraction has no typed lists beyond
    /// strings.
    fn get_boolean_list(&self, path: &str) -> Vec<bool>;

    /// Always empty; see [`Configuration::get_boolean_list`].
    fn get_float32_list(&self, path: &str) -> Vec<f32>;

    /// Always empty; see [`Configuration::get_boolean_list`].
    fn get_float64_list(&self, path: &str) -> Vec<f64>;

    /// Always empty; see [`Configuration::get_boolean_list`].
    fn get_int32_list(&self, path: &str) -> Vec<i32>;

    /// Always empty; see [`Configuration::get_boolean_list`].
    fn get_int64_list(&self, path: &str) -> Vec<i64>;

    /// Always empty; see [`Configuration::get_boolean_list`].
    fn get_byte_list(&self, path: &str) -> Vec<u8>;

    /// Whether the final segment of `path` is explicitly set. A path
    /// with zero segments reports `false`.
    fn has_path(&self, path: &str) -> bool;

    /// Top-level key names of the bound node, in unspecified order.
    /// Nested keys never appear here.
    fn keys(&self) -> Vec<String>;

    /// Whether the bound tree holds no keys at all, recursively.
    fn is_empty(&self) -> bool;

    /// View over the node reached by `path`, or `None` if any segment
    /// fails to resolve to a subtree.
    fn get_subtree(&self, path: &str) -> Option<Self>
    where
        Self: Sized;

    /// Fallback-chain merging is unsupported; always returns
    /// [`ConfigError::Unsupported`].
    fn with_fallback(&self, fallback: &Self) -> Result<Self, ConfigError>
    where
        Self: Sized;

    /// No-op confirmation step for consumers that insist on an explicit
    /// parse call; ignores the payload and returns the
    /// already-initialized instance unchanged.
    fn parse_string(&self, raw: &str) -> &Self;

    /// Loading from a named source is unsupported; tree population
    /// happens upstream, before construction. Always returns
    /// [`ConfigError::Unsupported`].
    fn load_config(&self, source: &str) -> Result<Self, ConfigError>
    where
        Self: Sized;
}
