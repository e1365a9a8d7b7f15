//! Random string generation for non-secret identifiers.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Generate a random string of `len` characters drawn uniformly from
/// `[a-zA-Z0-9]`.
///
/// Meant for request markers and file name suffixes. Not suitable for
/// secrets or tokens.
pub fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
