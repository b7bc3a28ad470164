//! Error types raised by save repository implementations.

use thiserror::Error;

/// Errors surfaced by save repository implementations.
///
/// These never cross the facade boundary: the store catches them at the
/// save/load call site, logs, and carries on.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
