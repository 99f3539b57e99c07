use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColBreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Invalid Key: {0}")]
    InvalidKey(String),
}

pub type CbResult<T> = Result<T, ColBreakError>;
