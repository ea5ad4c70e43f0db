use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid item key: {0}")]
    InvalidItemKey(String),

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
