use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data source {path} is unreachable: {source}")]
    SourceUnreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data source {path} is malformed: {reason}")]
    MalformedSource { path: PathBuf, reason: String },

    #[error("Data source {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid row at {path}:{line}: {reason}")]
    InvalidRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
