use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - chart rendered (and no orphans when `--fail-on-orphans` is set)
    Success = 0,
    /// Chart rendered, but members without a team were found and `--fail-on-orphans` was set
    OrphansDetected = 1,
    /// Invalid command-line arguments (clap parsing errors, missing org or token)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OrphansDetected => write!(f, "Orphans Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for org chart generation.
///
/// Every variant is fatal: the run stops at the first error and no
/// partial chart is written.
#[derive(Debug, Error)]
pub enum OrgChartError {
    #[error("Access denied to organization '{org}' (status {status})\n\n💡 Hint: Check that the token is valid and has the read:org scope")]
    Access { org: String, status: u16 },

    #[error("Organization not found: {org}\n\n💡 Hint: Check the organization name for typos")]
    NotFound { org: String },

    #[error("Failed to fetch {what}")]
    Fetch {
        what: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Directory data that violates a domain rule
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl OrgChartError {
    /// Wraps a page-level failure with a description of what was being listed.
    pub fn fetch(what: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        OrgChartError::Fetch {
            what: what.into(),
            source: source.into(),
        }
    }
}
