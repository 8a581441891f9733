//! Error types for grant lookups

use thiserror::Error;

/// Errors that can occur while checking an owner's grants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrantError {
    /// The grant back-end could not answer
    #[error("Grant store unavailable: {0}")]
    Unavailable(String),

    /// Granting a permission nobody registered
    #[error("Permission '{0}' is not registered")]
    UnknownPermission(String),
}
