// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Digest helper for the access gate.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a UTF-8 string and return its lowercase hex digest.
///
/// # Examples
///
/// ```rust,ignore
/// let digest = folio::utils::hash_str("open sesame");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_str(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
