//! Data Source Evaluation Library
//!
//! Loads a tabular dataset (a CSV of movie records by default) with Polars
//! and produces three descriptive reports:
//!
//! - **Basic information**: row and column counts, the type of every column
//!   and the in-memory footprint
//! - **Data quality**: per-column missing ratio, unique count and unique ratio
//! - **Completeness**: how many rows have no missing cell at all
//!
//! Each report is written as its own CSV table.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use source_eval::{EvaluatorConfig, SourceEvaluator};
//!
//! let config = EvaluatorConfig::builder()
//!     .input_path("data/movies.csv")
//!     .output_dir("results/source_evaluation")
//!     .build()?;
//!
//! let result = SourceEvaluator::new(config).run()?;
//! println!("Records: {}", result.report.basic_info.row_count);
//! println!(
//!     "Complete rows: {}",
//!     result.report.completeness.complete_row_pct_display()
//! );
//! ```
//!
//! # Working on an existing frame
//!
//! ```rust,ignore
//! use source_eval::{Dataset, SourceEvaluator};
//!
//! let dataset = Dataset::from_frame(df, "in-memory");
//! let report = SourceEvaluator::evaluate(&dataset)?;
//! ```
//!
//! # Missing values and cardinality
//!
//! A cell is missing when it is empty or equals one of the configured null
//! markers (`NA`, `N/A`, `null`, `NaN`, ...). Unique counts never include
//! missing cells.

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use config::{ConfigValidationError, EvaluatorConfig, EvaluatorConfigBuilder};
pub use dataset::{ColumnKind, ColumnSchema, Dataset, SchemaDescriptor};
pub use error::{EvaluationError, Result as EvaluationResult, ResultExt};
pub use evaluator::SourceEvaluator;
pub use profiler::{DatasetProfiler, format_megabytes, format_percentage};
pub use quality::{CompletenessChecker, DataQualityAnalyzer};
pub use reporting::ReportWriter;
pub use types::{
    BasicInfoReport, ColumnQuality, CompletenessReport, EvaluationReport, EvaluationOutcome,
    QualityReport,
};
