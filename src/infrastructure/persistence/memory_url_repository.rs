//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: HashMap<String, UrlRecord>,
}

/// Process-local repository backed by a mutex-guarded map.
///
/// The uniqueness check and the insert happen under the same lock, so two
/// concurrent saves of the same alias resolve to exactly one success, matching
/// the database-backed repository. Ids are assigned monotonically starting
/// from 1 and never reused.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    inner: Mutex<Inner>,
}

impl MemoryUrlRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("repository lock poisoned").records.len()
    }

    /// Returns `true` if no record has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock().expect("repository lock poisoned");

        if inner.records.contains_key(alias) {
            return Err(StoreError::alias_exists(alias));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.records.insert(
            alias.to_owned(),
            UrlRecord::new(id, alias.to_owned(), url.to_owned()),
        );

        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, StoreError> {
        let inner = self.inner.lock().expect("repository lock poisoned");

        inner
            .records
            .get(alias)
            .map(|record| record.url.clone())
            .ok_or_else(|| StoreError::not_found(alias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_get() {
        let repo = MemoryUrlRepository::new();

        let id = repo.save_url("https://example.com", "abc123").await.unwrap();
        assert_eq!(id, 1);

        let url = repo.get_url("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = MemoryUrlRepository::new();

        let err = repo.get_url("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn save_conflict_keeps_original() {
        let repo = MemoryUrlRepository::new();

        repo.save_url("https://example.com", "abc123").await.unwrap();

        let err = repo
            .save_url("https://other.com", "abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AliasExists { .. }));

        let url = repo.get_url("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn ids_are_monotonic() {
        let repo = MemoryUrlRepository::new();

        let first = repo.save_url("https://a.com", "a").await.unwrap();
        let second = repo.save_url("https://b.com", "b").await.unwrap();
        let third = repo.save_url("https://c.com", "c").await.unwrap();

        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let repo = MemoryUrlRepository::new();

        repo.save_url("https://example.com", "Alias").await.unwrap();

        let err = repo.get_url("alias").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn same_url_under_two_aliases() {
        let repo = MemoryUrlRepository::new();

        repo.save_url("https://example.com", "one").await.unwrap();
        repo.save_url("https://example.com", "two").await.unwrap();

        assert_eq!(repo.get_url("one").await.unwrap(), "https://example.com");
        assert_eq!(repo.get_url("two").await.unwrap(), "https://example.com");
        assert_eq!(repo.len(), 2);
    }
}
