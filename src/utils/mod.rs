// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod hash;
pub mod markdown;

/// Compute the SHA-256 hex digest of a string.
pub use hash::hash_str;
/// Flatten Markdown into renderable blocks.
pub use markdown::{Block, to_blocks};
