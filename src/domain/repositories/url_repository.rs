//! Repository trait for alias→URL data access.

use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for persisting and resolving alias→URL mappings.
///
/// The store exposes exactly these two operations to its caller. Both are
/// safe to invoke from concurrent tasks; alias uniqueness is enforced
/// atomically by the backend, never by check-then-insert in the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record mapping `alias` to `url` and returns the assigned id.
    ///
    /// Insertion is all-or-nothing: when a record with `alias` already exists
    /// nothing is written and the existing record is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] if the alias is already taken.
    /// Returns [`StoreError::Storage`] on any other persistence failure.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StoreError>;

    /// Resolves `alias` to its stored URL.
    ///
    /// Matching is case-sensitive and byte-exact; no normalization of any
    /// kind is applied.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    /// Returns [`StoreError::Storage`] on any other lookup failure.
    async fn get_url(&self, alias: &str) -> Result<String, StoreError>;
}
