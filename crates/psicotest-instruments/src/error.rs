use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown scale '{scale_id}' for instrument '{instrument_id}'")]
    UnknownScale {
        instrument_id: String,
        scale_id: String,
    },
}
