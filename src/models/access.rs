// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Access-code digest used to gate one tab.
//!
//! The digest and the hashing scheme are both visible to anyone running the
//! app, so this is UX gating only and never an authentication boundary.

use anyhow::{Context, Result, ensure};

use crate::utils::hash_str;

/// Length of a SHA-256 digest rendered as hex.
pub const DIGEST_HEX_LEN: usize = 64;

/// Expected access-code digest in lowercase hex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessDigest(String);

impl AccessDigest {
    /// Accept a configured digest.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is exactly 64 lowercase hex characters.
    /// Uppercase input is rejected because comparison is case-sensitive and
    /// would never match.
    pub fn from_hex(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        ensure!(
            raw.len() == DIGEST_HEX_LEN,
            "access digest must be {DIGEST_HEX_LEN} hex characters, got {}",
            raw.len()
        );
        ensure!(
            !raw.chars().any(|c| c.is_ascii_uppercase()),
            "access digest must be lowercase hex"
        );
        hex::decode(raw).context("access digest is not valid hex")?;
        Ok(Self(raw.to_string()))
    }

    /// Wrap a digest constant that is known to be well-formed.
    pub(crate) fn from_trusted(hex: &'static str) -> Self {
        Self(hex.to_string())
    }

    /// Derive the digest for a known code (used for defaults and tests).
    pub fn for_code(code: &str) -> Self {
        Self(hash_str(code))
    }

    /// Case-sensitive comparison against a computed hex digest.
    pub fn matches(&self, computed: &str) -> bool {
        self.0 == computed
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
