//! Error types for the chandas engine.
//!
//! Every fallible operation returns [`Result`], whose error is the
//! [`ChandasError`] enum. Meter matching itself never fails; only input
//! acquisition, pattern parsing, configuration and report I/O can.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChandasError {
    /// The input was empty, whitespace-only, or held no Devanagari
    /// syllables. This is a user-input failure, not a system error.
    #[error("no analyzable text: please check if it contains valid Sanskrit characters")]
    NoAnalyzableText,

    /// A weight pattern string held something other than L/G symbols.
    #[error("invalid weight pattern: {0}")]
    InvalidPattern(String),

    #[error("unknown sample '{0}'")]
    UnknownSample(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, ChandasError>;
