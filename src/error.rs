//! Error types for appdeploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appdeploy operations
pub type AppDeployResult<T> = Result<T, AppDeployError>;

/// Main error type for appdeploy operations
#[derive(Error, Debug)]
pub enum AppDeployError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Application name rejected by the platform naming rules
    #[error("invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    /// `auth describe` output had no `User:` line
    #[error("could not resolve the current user from '{command}'{}", detail_suffix(.detail))]
    IdentityNotFound { command: String, detail: String },

    /// The external CLI could not be found on PATH
    #[error("'{program}' is not installed or not on PATH - install the Databricks CLI or pass --cli")]
    CliUnavailable { program: String },

    /// The external CLI was found but could not be started
    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// Walking the source directory failed
    #[error("failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },
}

fn detail_suffix(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {}", detail)
    }
}
