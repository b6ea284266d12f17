//! Pseudonymous user identity derivation

use sha1::{Digest, Sha1};

/// Number of hex characters kept from the digest
const SHORT_ID_LEN: usize = 10;

/// Derive a stable pseudonymous user id from a native player identifier.
///
/// The same identifier always yields the same id, so the raw identifier
/// never needs to cross the platform boundary. Truncating the digest
/// leaves a negligible, nonzero collision risk.
pub fn short_user_id(native_id: &str) -> String {
    let digest = Sha1::digest(native_id.as_bytes());
    hex::encode(digest)[..SHORT_ID_LEN].to_string()
}
