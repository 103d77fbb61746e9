//! Error types for alias storage, resolution and expansion.

use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the persistence layer: connection lifecycle, SQL and filesystem.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An operation was attempted while the connection was not open.
    #[error("alias database is not open")]
    NotOpen,

    /// The identity can't be used as a namespace.
    #[error("invalid namespace: {0:?}")]
    InvalidNamespace(String),

    /// Error reported by the SQLite driver.
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    /// IO error while preparing the data directory or database file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the alias operations.
#[derive(Debug, Error)]
pub enum AliasError {
    /// The alias is already mapped; `existing` is the stored template.
    #[error("alias `{alias}` is already set to `{existing}`")]
    AlreadyExists { alias: String, existing: String },

    /// Tried to remove an alias that isn't set.
    #[error("alias `{alias}` isn't set to anything")]
    NotFound { alias: String },

    /// A `{N}` placeholder referenced an argument the input did not supply.
    #[error("placeholder {{{index}}} is out of range, only {available} argument(s) supplied")]
    IndexOutOfRange { index: usize, available: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AliasError {
    /// Short name of the failure kind, used in user-facing notices.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => "AlreadyExists",
            Self::NotFound { .. } => "NotFound",
            Self::IndexOutOfRange { .. } => "IndexOutOfRange",
            Self::Store(StoreError::NotOpen) => "StoreNotOpen",
            Self::Store(StoreError::InvalidNamespace(_)) => "InvalidNamespace",
            Self::Store(StoreError::Database(_)) => "DatabaseError",
            Self::Store(StoreError::Io(_)) => "IOError",
        }
    }
}

impl From<DbErr> for AliasError {
    fn from(err: DbErr) -> Self {
        AliasError::Store(StoreError::Database(err))
    }
}

/// Result type for alias operations.
pub type Result<T> = std::result::Result<T, AliasError>;
