//! Error types for routegen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for routegen operations
pub type GenResult<T> = Result<T, GenError>;

/// Main error type for generation and watch operations
#[derive(Error, Debug)]
pub enum GenError {
    /// A template referenced by configuration does not exist
    #[error("{kind} template doesn't exist: {path}")]
    TemplateNotFound { kind: &'static str, path: PathBuf },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A route source produced an unusable entry
    #[error("invalid route for {component}: {message}")]
    InvalidRoute { component: PathBuf, message: String },

    /// A generator plugin hook failed
    #[error("plugin '{plugin}' failed in {hook}: {message}")]
    Plugin {
        plugin: String,
        hook: &'static str,
        message: String,
    },

    /// Writing a generated artifact failed
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// File watcher setup failed
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
