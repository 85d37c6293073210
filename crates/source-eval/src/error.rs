//! Custom error types for the source evaluation.
//!
//! Every failure is terminal for a run: errors are propagated with `?` up to
//! the entry point, which logs them and exits non-zero.
//!
//! Errors are serializable as `{ code, message }` so the `--json` CLI mode
//! and library callers can report them uniformly.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed underlying cause of a load or write failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the source evaluation.
#[derive(Error, Debug)]
pub enum EvaluationError {
    /// The source dataset is missing, unreadable or malformed.
    #[error("Failed to load dataset from '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A report (or the output directory) could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EvaluationError>,
    },
}

impl EvaluationError {
    /// Build a load error for `path`.
    pub fn load(path: impl AsRef<Path>, source: impl Into<BoxError>) -> Self {
        Self::Load {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Build a write error for `path`.
    pub fn write(path: impl AsRef<Path>, source: impl Into<BoxError>) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EvaluationError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, preserved through context wrapping.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LOAD_ERROR",
            Self::Write { .. } => "WRITE_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this is a load failure, looking through context wrappers.
    pub fn is_load_error(&self) -> bool {
        match self {
            Self::Load { .. } => true,
            Self::WithContext { source, .. } => source.is_load_error(),
            _ => false,
        }
    }

    /// Check if this is a write failure, looking through context wrappers.
    pub fn is_write_error(&self) -> bool {
        match self {
            Self::Write { .. } => true,
            Self::WithContext { source, .. } => source.is_write_error(),
            _ => false,
        }
    }
}

impl From<crate::config::ConfigValidationError> for EvaluationError {
    fn from(err: crate::config::ConfigValidationError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl Serialize for EvaluationError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("EvaluationError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EvaluationError::Polars(e).with_context(context))
    }
}
