use std::env;
use std::io;

use thiserror::Error;

pub const EXIT_VALIDATION: i32 = 1;
pub const EXIT_EXTRACTION: i32 = 2;
pub const EXIT_SYNTHESIS: i32 = 3;
pub const EXIT_UNEXPECTED: i32 = 4;

/// Batch-level failures of the pipeline. Per-record and per-track problems never
/// reach this type; they are logged and the item is dropped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid url: {0}")]
    Validation(String),

    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("received non-success status code {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("chapter synthesis failed: {0}")]
    Synthesis(String),

    #[error("metadata serialization failed: {0}")]
    Serialization(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) => EXIT_VALIDATION,
            Error::Extraction(_) | Error::Request(_) | Error::HttpStatus { .. } => EXIT_EXTRACTION,
            Error::Synthesis(_) | Error::Serialization(_) => EXIT_SYNTHESIS,
            Error::Io(_) => EXIT_UNEXPECTED,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returns the value of the environment variable `key`.
/// If the variable is not set, returns the provided fallback value or an empty string if no fallback is provided.
pub fn get_env(key: &str, fallback: Option<&str>) -> String {
    env::var(key).unwrap_or_else(|_| fallback.unwrap_or("").to_string())
}
