//! Repository trait definitions for the domain layer.
//!
//! [`UrlRepository`] is the narrow seam between the store and its callers:
//! handlers depend on these two operations, never on a concrete persistence
//! type, so backends stay swappable and mockable.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
//! - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory
//! - Mock implementations auto-generated via `mockall` for unit tests

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
