//! Alias allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;
use crate::utils::alias_generator::generate_alias;

/// Service for saving and resolving alias→URL mappings.
///
/// Combines the alias generator with a [`UrlRepository`] backend. The URL is
/// assumed already validated by the caller; this service performs no
/// normalization of URLs or aliases.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new service on top of a repository backend.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Saves a mapping from an alias to `url` and returns the created record.
    ///
    /// When `alias` is `None` a random 10-character alias is generated. A
    /// generated alias that happens to collide with an existing record
    /// surfaces [`StoreError::AliasExists`] to the caller just like a
    /// caller-supplied one; there is no automatic regeneration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] if the alias is already taken.
    /// Returns [`StoreError::Storage`] on any other persistence failure.
    pub async fn save_url(
        &self,
        url: &str,
        alias: Option<String>,
    ) -> Result<UrlRecord, StoreError> {
        let alias = alias.unwrap_or_else(generate_alias);

        let id = self.repository.save_url(url, &alias).await?;

        Ok(UrlRecord::new(id, alias, url.to_owned()))
    }

    /// Resolves an alias to its stored URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    /// Returns [`StoreError::Storage`] on any other lookup failure.
    pub async fn get_url(&self, alias: &str) -> Result<String, StoreError> {
        self.repository.get_url(alias).await
    }
}
