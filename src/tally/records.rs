//! # Record Store
//!
//! The canonical in-memory state: the ordered list of records, the current
//! selection, and the cached total.
//!
//! The store never touches persistence or rendering. Keeping those in step is
//! the controller's job (see [`crate::app`]).
//!
//! ## Invariants
//!
//! - Ids are unique within the list. A new id is `max(existing) + 1`, or `0`
//!   for an empty list.
//! - After every public operation returns, the cached total equals the sum
//!   of all quantities. It is recomputed from scratch, never adjusted.
//! - The selection, when set, names a record that is in the list.

use crate::error::{Result, TallyError};
use crate::model::{parse_quantity, Record, RecordId};
use tracing::debug;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    selected: Option<RecordId>,
    total: i64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new record and returns a copy of it.
    ///
    /// The quantity and the id are settled before anything changes, so a bad
    /// quantity or an exhausted id range leaves the store untouched.
    pub fn add(&mut self, name: &str, quantity_raw: &str) -> Result<Record> {
        let quantity = parse_quantity(quantity_raw)?;
        let record = Record::new(self.next_id()?, name, quantity);
        debug!(id = %record.id, name = %record.name, quantity, "record added");
        self.records.push(record.clone());
        self.recompute();
        Ok(record)
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_id(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Sets or clears the selection. Selecting an id that is not in the
    /// list clears it instead.
    pub fn select(&mut self, id: Option<RecordId>) {
        self.selected = id.filter(|id| self.by_id(*id).is_some());
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.and_then(|id| self.by_id(id))
    }

    /// Overwrites the selected record's name and quantity in place.
    pub fn update_selected(&mut self, name: &str, quantity_raw: &str) -> Result<Record> {
        let id = self.selected.ok_or(TallyError::NoSelection)?;
        let quantity = parse_quantity(quantity_raw)?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(TallyError::NoSelection)?;
        record.name = name.to_string();
        record.quantity = quantity;
        let updated = record.clone();
        debug!(id = %updated.id, name = %updated.name, quantity, "record updated");
        self.recompute();
        Ok(updated)
    }

    /// Removes the selected record and clears the selection.
    pub fn delete_selected(&mut self) -> Result<Record> {
        let id = self.selected.take().ok_or(TallyError::NoSelection)?;
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(TallyError::NoSelection)?;
        let removed = self.records.remove(pos);
        debug!(id = %removed.id, "record deleted");
        self.recompute();
        Ok(removed)
    }

    /// Recomputes, caches, and returns the sum of all quantities.
    pub fn total(&mut self) -> i64 {
        self.recompute();
        self.total
    }

    /// The cached total as of the last mutation.
    pub fn cached_total(&self) -> i64 {
        self.total
    }

    pub fn reset(&mut self) {
        self.records.clear();
        self.selected = None;
        self.total = 0;
    }

    /// Replaces the whole list, as done once at startup with the persisted
    /// records.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
        self.selected = self.selected.filter(|id| self.by_id(*id).is_some());
        self.recompute();
    }

    fn next_id(&self) -> Result<RecordId> {
        match self.records.iter().map(|r| r.id).max() {
            None => Ok(RecordId(0)),
            Some(max) => max
                .next()
                .ok_or_else(|| TallyError::Store(format!("id space exhausted after {}", max))),
        }
    }

    fn recompute(&mut self) {
        self.total = self
            .records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.quantity));
    }
}
