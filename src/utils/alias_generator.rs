//! Random alias generation.
//!
//! Aliases are short fixed-length strings over `[A-Za-z0-9]`. The generator
//! is stateless and does not guarantee uniqueness: the persistence layer's
//! constraint is the enforcement point, and a collision surfaces as
//! [`crate::error::StoreError::AliasExists`] from the save path.

use rand::distr::{Alphanumeric, SampleString};

/// Length of every generated alias.
pub const ALIAS_LENGTH: usize = 10;

/// Generates a random alias of [`ALIAS_LENGTH`] characters.
///
/// Each character is drawn uniformly from the 62-symbol alphanumeric
/// alphabet using the thread-local RNG. The randomness does not need to be
/// cryptographically secure; it only has to make accidental collisions
/// unlikely across calls.
///
/// # Examples
///
/// ```
/// use url_store::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 10);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), ALIAS_LENGTH)
}
