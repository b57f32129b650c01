use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a tabular JSON document: {0}")]
    NotTabular(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
