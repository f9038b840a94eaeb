// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Key/value stores standing in for the browser's local and session storage.
//!
//! Durable preferences (the theme flag) live in a [`FileStore`]; per-session
//! flags (the access-gate unlock) live in a [`MemoryStore`] that disappears
//! with the process.

pub mod file;
pub mod memory;

use anyhow::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Durable key holding the theme flag (`light` or `dark`).
pub const THEME_KEY: &str = "theme";
/// Session key set to `true` once the gated tab is unlocked.
pub const UNLOCK_KEY: &str = "detailed_unlocked";
/// Value stored under [`UNLOCK_KEY`] when unlocked.
pub const UNLOCKED_VALUE: &str = "true";

/// Minimal string store shared between the UI thread and command workers.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value if present.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Whether the session store carries the unlock flag.
pub fn is_unlocked(session: &dyn KeyValueStore) -> bool {
    session.get(UNLOCK_KEY).as_deref() == Some(UNLOCKED_VALUE)
}
