//! Configuration for the source evaluation.
//!
//! Defaults reproduce the fixed-path behaviour of the tool: read
//! `data/movies.csv` and write reports to `results/source_evaluation`.
//! Use [`EvaluatorConfig::builder()`] to override individual settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default source dataset, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/movies.csv";

/// Default report directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "results/source_evaluation";

/// Input path that reads the CSV from standard input.
pub const STDIN_INPUT: &str = "-";

/// Cell contents treated as missing when reading the source.
pub const DEFAULT_NULL_MARKERS: [&str; 14] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#NA",
];

/// Configuration for a source evaluation run.
///
/// # Example
///
/// ```rust,ignore
/// use source_eval::EvaluatorConfig;
///
/// let config = EvaluatorConfig::builder()
///     .input_path("data/movies.csv")
///     .output_dir("results/source_evaluation")
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Path of the CSV file to evaluate.
    /// Default: "data/movies.csv"
    pub input_path: PathBuf,

    /// Directory the three reports are written to. Created if absent.
    /// Default: "results/source_evaluation"
    pub output_dir: PathBuf,

    /// Field separator of the source file.
    /// Default: b','
    pub separator: u8,

    /// Number of rows used to infer column types. `None` scans the whole file,
    /// so a late float or text value widens the column instead of failing.
    /// Default: None
    pub infer_schema_length: Option<usize>,

    /// Whether to parse date/datetime looking strings into temporal columns.
    /// Default: true
    pub try_parse_dates: bool,

    /// Cell values read as missing.
    pub null_markers: Vec<String>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            separator: b',',
            infer_schema_length: None,
            try_parse_dates: true,
            null_markers: default_null_markers(),
        }
    }
}

fn default_null_markers() -> Vec<String> {
    DEFAULT_NULL_MARKERS.iter().map(|m| m.to_string()).collect()
}

impl EvaluatorConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EvaluatorConfigBuilder {
        EvaluatorConfigBuilder::default()
    }

    /// Whether the source is standard input rather than a file.
    pub fn reads_stdin(&self) -> bool {
        self.input_path.as_os_str() == STDIN_INPUT
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyInputPath);
        }

        if !self.separator.is_ascii() || matches!(self.separator, b'"' | b'\n' | b'\r') {
            return Err(ConfigValidationError::InvalidSeparator(self.separator));
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidInferSchemaLength);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Input path must not be empty")]
    EmptyInputPath,

    #[error("Invalid separator byte {0:#04x} (must be ASCII and not a quote or line break)")]
    InvalidSeparator(u8),

    #[error("Invalid infer_schema_length: 0 (use None to scan the whole file)")]
    InvalidInferSchemaLength,
}

/// Builder for [`EvaluatorConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EvaluatorConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    separator: Option<u8>,
    infer_schema_length: Option<Option<usize>>,
    try_parse_dates: Option<bool>,
    null_markers: Option<Vec<String>>,
}

impl EvaluatorConfigBuilder {
    /// Set the CSV file to evaluate.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the directory the reports are written to.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the field separator.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set how many rows are scanned for schema inference (`None` = all).
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Enable or disable date parsing.
    pub fn try_parse_dates(mut self, enable: bool) -> Self {
        self.try_parse_dates = Some(enable);
        self
    }

    /// Replace the list of missing-value markers.
    pub fn null_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_markers = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `EvaluatorConfig` or an error if validation fails.
    pub fn build(self) -> Result<EvaluatorConfig, ConfigValidationError> {
        let config = EvaluatorConfig {
            input_path: self
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            separator: self.separator.unwrap_or(b','),
            infer_schema_length: self.infer_schema_length.flatten(),
            try_parse_dates: self.try_parse_dates.unwrap_or(true),
            null_markers: self.null_markers.unwrap_or_else(default_null_markers),
        };

        config.validate()?;
        Ok(config)
    }
}
