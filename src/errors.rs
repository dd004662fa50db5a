//! Unified application error type.
//! All modules (db, core, import, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::import::ImportError;
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Error parsing CSV: {0}")]
    Import(#[from] ImportError),

    #[error("Import aborted after {created} lead(s): {reason}")]
    ImportAborted { created: usize, reason: String },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Lead not found: {0}")]
    LeadNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid page size: {0} (allowed range 1..={1})")]
    InvalidPageSize(usize, usize),

    #[error("Field '{0}' is not editable")]
    NotEditable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
