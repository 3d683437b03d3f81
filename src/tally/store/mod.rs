//! # Storage Layer
//!
//! Durable storage for the record list. Two pieces:
//!
//! - [`backend::SlotBackend`]: raw key-value I/O. A slot is a named string
//!   value; an absent slot reads as `None`.
//! - [`slot_store::SlotStore`]: the persistence adapter. It mirrors the
//!   record list as a JSON array under one slot and knows nothing about
//!   selection or the in-memory store.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per slot, `<root>/<key>.json`,
//!   written atomically (temp file + rename).
//! - [`mem_backend::MemBackend`]: in-memory map for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── items.json      # [{"id":0,"name":"Eggs","quantity":100}, ...]
//! └── config.json     # TallyConfig
//! ```
//!
//! Every adapter write is a full read-modify-write of the slot. With a
//! single writer that is enough; two writers could lose updates.

use crate::error::{Result, TallyError};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot_store;

pub use backend::SlotBackend;
pub use slot_store::SlotStore;

pub const DEFAULT_SLOT_KEY: &str = "items";

/// Slot files share the data directory with `config.json`.
const RESERVED_KEYS: &[&str] = &["config"];

/// Slot keys become file names, so they are limited to a safe alphabet and
/// may not shadow the config file (compared without case, for filesystems
/// that ignore it).
pub fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !RESERVED_KEYS.iter().any(|r| key.eq_ignore_ascii_case(r));
    if ok {
        Ok(())
    } else {
        Err(TallyError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_keys() {
        for key in ["items", "meal-log", "day_2"] {
            assert!(validate_key(key).is_ok());
        }
    }

    #[test]
    fn rejects_path_like_keys() {
        for key in ["", "../items", "a/b", "items.json", "with space"] {
            assert!(matches!(validate_key(key), Err(TallyError::InvalidKey(_))));
        }
    }

    #[test]
    fn rejects_the_config_file_name() {
        for key in ["config", "CONFIG", "Config"] {
            assert!(matches!(validate_key(key), Err(TallyError::InvalidKey(_))));
        }
        assert!(validate_key("configs").is_ok());
    }
}
