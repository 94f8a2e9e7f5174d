//! Public surface for confmate.
//!
//! Re-exports the settings tree model and the tree-backed provider, and
//! offers a small logging bootstrap to keep consumer setup consistent.
//!
//! ```
//! use confmate::{Configuration, Table, TreeConfig};
//!
//! let mut tree = Table::new();
//! tree.insert("level", "debug");
//!
//! let config = TreeConfig::new(Some(&tree)).expect("tree supplied");
//! assert_eq!(config.get_string("level", None), "debug");
//! assert_eq!(config.get_string("missing", Some("info")), "info");
//! ```

/// Re-export for convenience.
pub use confmate_provider as provider;
/// Re-export for convenience.
pub use confmate_tree as tree;

pub use confmate_provider::{ConfigError, Configuration, TreeConfig};
pub use confmate_tree::{Table, Value, infinite_duration};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still
/// expected to call this early in startup to ensure log output is wired
/// up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
