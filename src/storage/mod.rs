//! Durable key-value slots for the persisted theme.
//!
//! This module provides:
//!
//! - [`ThemeStorage`]: String key-value access used by the controller
//! - [`MemoryStorage`]: Shareable in-memory map, optionally read-only
//! - [`FileStorage`]: A JSON object file on disk, for native hosts
//! - [`StorageError`]: Faults surfaced from reads and writes
//!
//! Browser `localStorage` lives in the `web` module and is only compiled for
//! `wasm32` targets.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// The default key under which the theme tag is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Client-local storage surviving across sessions.
pub trait ThemeStorage {
    /// Reads `key`. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: ThemeStorage + ?Sized> ThemeStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
