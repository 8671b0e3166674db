//! All error types for the stringslint crate.
//!
//! These are returned from all fallible operations (parsing, scanning,
//! saving, etc.). Library code never terminates the process; translating a
//! failure into an exit code is the caller's job.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no managed .strings file at `{}`", .0.display())]
    FileNotFound(PathBuf),

    #[error("key `{0}` not found")]
    KeyNotFound(String),
}

impl Error {
    /// Creates a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}
