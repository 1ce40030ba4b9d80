//! Error taxonomy for the URL store.
//!
//! Every store operation returns a typed [`StoreError`]; no failure aborts the
//! process. Callers distinguish the recoverable kinds ([`StoreError::AliasExists`],
//! [`StoreError::NotFound`]) from unexpected backend failures
//! ([`StoreError::Storage`]) when mapping errors to their own surface.

use thiserror::Error;

/// Failure kinds surfaced by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this alias already exists.
    ///
    /// Recoverable: the caller may choose a different alias and retry. The
    /// store itself never retries, including when the colliding alias was
    /// randomly generated.
    #[error("alias '{alias}' already exists")]
    AliasExists { alias: String },

    /// No record has this alias.
    ///
    /// Recoverable and not a system fault; the transport maps it to its own
    /// not-found response.
    #[error("alias '{alias}' not found")]
    NotFound { alias: String },

    /// The persistence backend failed.
    ///
    /// Unexpected: I/O errors, constraint violations unrelated to the alias,
    /// schema errors. Surfaced to the caller as an internal failure and not
    /// retried by the store.
    #[error("storage failure")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    /// Builds an [`StoreError::AliasExists`] for the given alias.
    pub fn alias_exists(alias: impl Into<String>) -> Self {
        Self::AliasExists {
            alias: alias.into(),
        }
    }

    /// Builds a [`StoreError::NotFound`] for the given alias.
    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }
}
