//! Error types for vocalize

use std::io;
use thiserror::Error;

/// Main error type for vocalize
///
/// Speaking itself never fails; these only surface while setting up
/// a speech engine or loading configuration.
#[derive(Error, Debug)]
pub enum VocalizeError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for vocalize operations
pub type Result<T> = std::result::Result<T, VocalizeError>;
