use super::backend::SlotBackend;
use super::{validate_key, DEFAULT_SLOT_KEY};
use crate::error::{Result, TallyError};
use crate::model::Record;
use tracing::{debug, info, warn};

/// Persistence adapter: keeps a JSON array of records under one slot.
///
/// Each write operation is a complete load, change, store cycle against the
/// backend. Nothing is cached between calls.
pub struct SlotStore<B: SlotBackend> {
    backend: B,
    key: String,
}

impl<B: SlotBackend> SlotStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_SLOT_KEY.to_string(),
        }
    }

    pub fn with_key(backend: B, key: &str) -> Result<Self> {
        validate_key(key)?;
        Ok(Self {
            backend,
            key: key.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the persisted records.
    ///
    /// A missing slot is an empty list. A slot whose contents are not text or
    /// do not parse is also treated as empty; the bad value stays on disk
    /// until the next write replaces it.
    pub fn load(&self) -> Result<Vec<Record>> {
        let raw = match self.backend.read_slot(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e @ TallyError::CorruptSlot(_)) => {
                warn!(slot = %self.key, error = %e, "stored records are unreadable, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(slot = %self.key, error = %e, "stored records are unreadable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn append(&self, record: &Record) -> Result<()> {
        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)?;
        info!(slot = %self.key, id = %record.id, "record stored");
        Ok(())
    }

    /// Overwrites name and quantity of the persisted entry with the same id.
    /// Entries with other ids are left as they are.
    pub fn replace(&self, record: &Record) -> Result<()> {
        let records: Vec<Record> = self
            .load()?
            .into_iter()
            .map(|mut stored| {
                if stored.id == record.id {
                    stored.name = record.name.clone();
                    stored.quantity = record.quantity;
                }
                stored
            })
            .collect();
        self.save(&records)?;
        info!(slot = %self.key, id = %record.id, "record replaced");
        Ok(())
    }

    pub fn remove(&self, record: &Record) -> Result<()> {
        let records: Vec<Record> = self
            .load()?
            .into_iter()
            .filter(|stored| stored.id != record.id)
            .collect();
        self.save(&records)?;
        info!(slot = %self.key, id = %record.id, "record removed");
        Ok(())
    }

    /// Deletes the slot entirely.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove_slot(&self.key)?;
        info!(slot = %self.key, "slot cleared");
        Ok(())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string(records)?;
        debug!(slot = %self.key, count = records.len(), "writing slot");
        self.backend.write_slot(&self.key, &content)
    }
}
