//! Error types and definitions for gosyms
//!
//! Every failure that can abort a scan is a variant of [`ScanError`].
//! Recoverable conditions (package-name conflicts, relative-path fallbacks)
//! are logged where they occur and never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scan operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Standard IO errors without a more specific home
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: io::Error,
    },

    /// Reading a source file or directory failed
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Go parser rejected a source file
    #[error("parser failure in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Declaration extraction failed on a parsed file
    #[error("scan failed for {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Directory traversal errors surfaced by walkdir
    #[error("directory traversal error: {source}")]
    Traversal {
        #[source]
        source: walkdir::Error,
    },

    /// The tree-sitter Go grammar could not be loaded
    #[error("failed to load Go grammar: {source}")]
    Grammar {
        #[source]
        source: tree_sitter::LanguageError,
    },

    /// `go env GOROOT` discovery failed
    #[error("GOROOT discovery failed: {message}")]
    GoEnv { message: String },

    /// The cancellation flag was observed mid-walk
    #[error("scan interrupted")]
    Interrupted,

    /// Writing to the output stream failed
    #[error("error writing output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Create a file read error with path context
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a declaration-scan error with path context
    pub fn scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::Scan {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an environment-discovery error
    pub fn go_env(message: impl Into<String>) -> Self {
        ScanError::GoEnv {
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output(source: io::Error) -> Self {
        ScanError::Output { source }
    }
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::Io { source: err }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        ScanError::Traversal { source: err }
    }
}

impl From<tree_sitter::LanguageError> for ScanError {
    fn from(err: tree_sitter::LanguageError) -> Self {
        ScanError::Grammar { source: err }
    }
}

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
