//! Error types for the literalize system.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for literalize operations.
#[derive(Error, Debug)]
pub enum LiteralizeError {
    #[error("cannot open input file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for literalize operations.
pub type Result<T> = std::result::Result<T, LiteralizeError>;
