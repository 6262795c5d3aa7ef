use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Database not connected")]
    NotConnected,

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid data, {0}")]
    InvalidData(String),

    #[error("Invalid input: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StockError {
    /// Errors the menu recovers from by routing to the invalid-entry screen.
    /// Anything else belongs to the terminal channel or the process setup.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StockError::NotConnected
                | StockError::NotFound(_)
                | StockError::InvalidData(_)
                | StockError::Parse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
