use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised at the data-model construction boundary.
///
/// The engine itself never errors on well-formed inputs: unknown metric
/// keys, zero denominators, and short trend windows all produce defined
/// fallback values instead (see `analysis`).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Game date {date} is in the future")]
    FutureDate { date: NaiveDate },

    #[error("Goal target must be positive, got {value}")]
    InvalidTarget { value: f64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
