use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Duplicate report id: {0}")]
    DuplicateId(u32),

    #[error("Invalid report id: {0} (ids must be positive)")]
    InvalidId(u32),

    #[error("Unknown report id: {0}")]
    UnknownReport(u32),

    #[error("Please select reports to download.")]
    NothingSelected,

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
