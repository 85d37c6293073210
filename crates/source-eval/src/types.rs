use crate::dataset::SchemaDescriptor;
use crate::profiler::{format_megabytes, format_percentage};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shape, column types and memory footprint of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfoReport {
    pub row_count: usize,
    pub column_count: usize,
    pub column_types: SchemaDescriptor,
    /// Sum of the per-column estimated sizes, in bytes.
    pub memory_bytes: usize,
}

impl BasicInfoReport {
    /// Memory footprint as shown in reports, e.g. `"1.25 MB"`.
    pub fn memory_usage(&self) -> String {
        format_megabytes(self.memory_bytes)
    }
}

/// Missingness and cardinality of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnQuality {
    pub column: String,
    pub missing_count: usize,
    /// Percentage of missing cells, rounded to 2 decimals.
    pub missing_ratio_pct: f64,
    /// Distinct non-missing values.
    pub unique_count: usize,
    /// `unique_count` relative to the row count, rounded to 2 decimals.
    pub unique_ratio_pct: f64,
}

/// Per-column quality metrics, in source column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityReport {
    pub columns: Vec<ColumnQuality>,
}

impl QualityReport {
    pub fn get(&self, column: &str) -> Option<&ColumnQuality> {
        self.columns.iter().find(|c| c.column == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Row-level completeness counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub complete_row_count: usize,
    pub complete_row_pct: f64,
    pub partial_row_count: usize,
    pub partial_row_pct: f64,
}

impl CompletenessReport {
    /// e.g. `"87.50%"`
    pub fn complete_row_pct_display(&self) -> String {
        format_percentage(self.complete_row_pct)
    }

    pub fn partial_row_pct_display(&self) -> String {
        format_percentage(self.partial_row_pct)
    }

    pub fn row_count(&self) -> usize {
        self.complete_row_count + self.partial_row_count
    }
}

/// All three reports for one source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub source: PathBuf,
    pub basic_info: BasicInfoReport,
    pub quality: QualityReport,
    pub completeness: CompletenessReport,
}

/// Outcome of a full run: the reports and the files they were written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub report: EvaluationReport,
    pub output_dir: PathBuf,
    pub output_files: Vec<PathBuf>,
}
