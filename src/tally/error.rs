use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("No record is selected")]
    NoSelection,

    #[error("Invalid quantity: {0:?} is not a whole number")]
    InvalidQuantity(String),

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    #[error("Slot {0:?} does not hold text")]
    CorruptSlot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
