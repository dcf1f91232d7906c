use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a rejected batch from other
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every batch was either published or discarded as stale
    Success = 0,
    /// A batch was rejected by a filter fault or an invalid change
    BatchRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, scenario parse error, etc.)
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
            ExitCode::BatchRejected => write!(f, "Batch Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Reasons a batch is rejected without publishing.
///
/// Whenever one of these is returned the scope's previously published
/// snapshot is still the current one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Filter '{filter}' failed while processing {dependency}\nDetails: {details}")]
    FilterFault {
        filter: String,
        dependency: String,
        details: String,
    },

    #[error("No dependency provider is registered for type '{provider_type}'\n\n💡 Hint: Register a SubtreeProvider for this type before sending its changes")]
    UnknownProvider { provider_type: String },

    #[error("Invalid dependency change: {details}")]
    InvalidDependency { details: String },
}

/// Errors raised by the CLI while loading scenarios or writing output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Scenario file not found: {path}\n\n💡 Hint: {suggestion}")]
    ScenarioNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse scenario file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the scenario is valid YAML with a top-level 'scopes' list")]
    ScenarioParseError { path: PathBuf, details: String },

    #[error("Invalid scenario: {reason}")]
    InvalidScenario { reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
