use super::backend::SlotBackend;
use super::validate_key;
use crate::error::{Result, TallyError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory slot backend for testing.
///
/// Uses `RefCell` for interior mutability since tally is single-threaded,
/// which lets the `SlotBackend` trait use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant a raw value, bypassing any format checks.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl SlotBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if *self.simulate_write_error.borrow() {
            return Err(TallyError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        if *self.simulate_write_error.borrow() {
            return Err(TallyError::Store("Simulated write error".to_string()));
        }
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read_slot("items").unwrap(), None);
    }

    #[test]
    fn write_read_remove() {
        let backend = MemBackend::new();
        backend.write_slot("items", "[]").unwrap();
        assert_eq!(backend.read_slot("items").unwrap().as_deref(), Some("[]"));
        backend.remove_slot("items").unwrap();
        backend.remove_slot("items").unwrap();
        assert!(!backend.contains("items"));
    }

    #[test]
    fn simulated_error_blocks_writes() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(matches!(
            backend.write_slot("items", "[]"),
            Err(TallyError::Store(_))
        ));
        assert!(!backend.contains("items"));
    }
}
