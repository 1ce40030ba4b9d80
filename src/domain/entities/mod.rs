//! Core domain entities.
//!
//! A single entity exists in this crate: [`UrlRecord`], the persisted
//! alias→URL mapping. Entities are plain data structures without business
//! logic.

pub mod url_record;

pub use url_record::UrlRecord;
