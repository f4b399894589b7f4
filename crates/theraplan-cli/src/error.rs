//! Error handling for the Theraplan CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use theraplan_adapters::SnapshotError;
use theraplan_core::error::TheraplanError;

// Re-export so callers only need `use crate::error::*`.
pub use theraplan_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// Configuration or snapshot could not be read, parsed, or applied.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `theraplan-core`.
    #[error("{0}")]
    Core(#[from] TheraplanError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structured output could not be serialised.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<SnapshotError> for CliError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Rejected(core) => CliError::Core(core),
            other => CliError::ConfigError {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Check the snapshot file passed with --snapshot or set as data.snapshot".into(),
                "Inspect the active configuration: theraplan config list".into(),
                "Environment overrides use THERAPLAN_<SECTION>__<KEY>".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the output is not a closed pipe".into(),
            ],

            Self::Render(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render the error, its causes (when `verbose`) and suggestions.
    ///
    /// ANSI styling is applied only when `colored` is set.
    pub fn render(&self, colored: bool, verbose: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_owned() }
        };

        let mut out = if colored {
            format!(
                "\n{} {}\n  {}\n",
                "✗".red().bold(),
                "Error:".red().bold(),
                self.to_string().red()
            )
        } else {
            format!("\nError: {self}\n")
        };

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                out.push_str(&format!("  {}\n", paint(&line, |t| t.dimmed().to_string())));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            let hint = "Use -v / --verbose for more details.";
            out.push_str(&format!("\n{}\n", paint(hint, |t| t.dimmed().to_string())));
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
