use crate::error::Result;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while SlotStore handles the "what" (the record array format).
pub trait SlotBackend {
    /// Read the raw value of a slot.
    /// Returns Ok(None) if the slot does not exist.
    /// Returns Err(CorruptSlot) if the stored value is not valid text, and
    /// Err(Io) on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn remove_slot(&self, key: &str) -> Result<()>;
}
