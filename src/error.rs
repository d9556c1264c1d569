use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrokeForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing to score, or too many attempts for one session.
    #[error("Input Error: {0}")]
    Input(String),

    #[error("Capture Error: {0}")]
    Capture(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type SfResult<T> = Result<T, StrokeForgeError>;
