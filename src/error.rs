use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RapportError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{field} must be a number (got '{value}')")]
    InvalidNumber { field: String, value: String },

    #[error("{field} must be a date in YYYY-MM-DD format (got '{value}')")]
    InvalidDate { field: String, value: String },

    #[error("Invalid choice for {field}: '{value}'")]
    InvalidChoice { field: String, value: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Contact file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Contact file {} has an invalid record {id}: {reason}", path.display())]
    InvalidRecord {
        path: PathBuf,
        id: String,
        reason: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not replace file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type RapportResult<T> = Result<T, RapportError>;
