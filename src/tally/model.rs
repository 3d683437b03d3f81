use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record within a list.
///
/// Serialized as a bare integer so the persisted array reads
/// `{"id": 0, "name": "...", "quantity": 100}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// The id after this one, or `None` at the end of the id space.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(RecordId)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
}

impl Record {
    pub fn new(id: RecordId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// Raw form contents as typed by the user. Neither field is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub quantity: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// True when both fields hold something. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.quantity.is_empty()
    }
}

/// Parses a raw quantity. Surrounding whitespace is ignored, everything else
/// must be a whole number.
pub fn parse_quantity(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TallyError::InvalidQuantity(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_quantity("100").unwrap(), 100);
        assert_eq!(parse_quantity(" 42\n").unwrap(), 42);
        assert_eq!(parse_quantity("-5").unwrap(), -5);
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        for raw in ["", "abc", "12abc", "1.5", "   "] {
            assert!(
                matches!(parse_quantity(raw), Err(TallyError::InvalidQuantity(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn next_id_stops_at_the_end_of_the_range() {
        assert_eq!(RecordId(4).next(), Some(RecordId(5)));
        assert_eq!(RecordId(u64::MAX).next(), None);
    }

    #[test]
    fn record_serializes_with_flat_id() {
        let record = Record::new(RecordId(3), "Eggs", 100);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Eggs","quantity":100}"#);
    }

    #[test]
    fn form_completeness_does_not_trim() {
        assert!(FormInput::new(" ", "1").is_complete());
        assert!(!FormInput::new("Eggs", "").is_complete());
        assert!(!FormInput::default().is_complete());
    }
}
