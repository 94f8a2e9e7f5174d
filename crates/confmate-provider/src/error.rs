//! Error type for the tree-backed configuration provider.

use thiserror::Error;

/// Errors surfaced by provider construction and by the capability
/// operations a tree-backed provider cannot implement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No settings tree was supplied at construction.
    #[error("no settings tree was supplied")]
    MissingTree,
    /// The capability interface declares an operation the tree
    /// abstraction cannot back. Receiving this signals a caller bug,
    /// not a runtime condition to branch on.
    #[error("{0} is not supported by a tree-backed provider")]
    Unsupported(&'static str),
}
