use thiserror::Error;

use crate::dentition::ToothId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tooth id {0} is not in the dentition catalog")]
    UnknownTooth(ToothId),

    #[error("hygiene row index {0} out of range (table has 6 rows)")]
    HygieneRowOutOfRange(usize),
}
