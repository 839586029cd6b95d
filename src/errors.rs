//! Unified application error type.
//! Validation problems found in a report are *not* errors: they are values
//! carried by the summary. AppError only covers operational failures
//! (files, config, malformed commands).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Unsupported report file: {0} (expected .yml, .yaml or .json)")]
    UnsupportedFile(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("No row with id {id} in {group}")]
    UnknownRow { group: String, id: String },

    #[error("Duplicate row id {id} in {group}")]
    DuplicateRow { group: String, id: String },

    #[error("Report cannot be submitted: {0}")]
    SubmissionBlocked(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
