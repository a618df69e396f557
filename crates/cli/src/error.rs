// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Hookline error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file malformed or structurally invalid
    #[error("{}", display_parse(.message, .path.as_ref()))]
    Parse {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Git repository error
    #[error("git error: {0}")]
    Git(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

fn display_parse(message: &str, path: Option<&PathBuf>) -> String {
    match path {
        Some(path) => format!("config error: {}: {}", path.display(), message),
        None => format!("config error: {}", message),
    }
}

impl Error {
    /// Build a parse error attributed to a config file.
    pub fn parse(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::Parse {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Build an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Error::Git(err.message().to_string())
    }
}

/// Result type using hookline Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All hooks passed (or were skipped)
    Success = 0,
    /// One or more hooks failed
    HookFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Parse { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::Git(_) | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
