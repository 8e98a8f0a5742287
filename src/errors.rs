//! Unified application error type.
//! Every stage of the sync job (fetch, parse, compose, write) returns AppError,
//! so a failed run surfaces one message and a non-zero exit code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Fetch
    // ---------------------------
    #[error("Fetch error: {0}")]
    Fetch(String),

    // ---------------------------
    // CSV parsing
    // ---------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    // ---------------------------
    // README composition / persistence
    // ---------------------------
    #[error("Template error: {0}")]
    Template(String),

    #[error("Write error: {0}")]
    Write(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Fetch(e.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
