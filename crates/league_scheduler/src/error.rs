use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No feasible schedule: solver reported {status}")]
    InfeasibleModel { status: String },

    #[error("Solver unavailable: {0}")]
    OracleUnavailable(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV Header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected at least 3 columns, got {got}")]
    CsvRow { row: usize, got: usize },

    #[error("Invalid {field} at row {row}: {value}")]
    FieldParse {
        row: usize,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
