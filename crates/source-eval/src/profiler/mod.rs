//! Dataset-level profiling: shape, declared column types and memory footprint.

mod statistics;

pub use statistics::{format_megabytes, format_percentage};
pub(crate) use statistics::{column_memory_bytes, distinct_non_missing, percentage, round2};

use crate::dataset::Dataset;
use crate::types::BasicInfoReport;
use tracing::debug;

/// Computes the basic information report.
pub struct DatasetProfiler;

impl DatasetProfiler {
    /// Row and column counts, the type of every column and the total memory
    /// footprint. An empty dataset is valid and yields zeros.
    pub fn basic_info(dataset: &Dataset) -> BasicInfoReport {
        let memory_bytes = dataset
            .frame()
            .get_columns()
            .iter()
            .map(|col| {
                let bytes = column_memory_bytes(col);
                debug!("Column '{}' uses ~{} bytes", col.name(), bytes);
                bytes
            })
            .sum();

        BasicInfoReport {
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            column_types: dataset.schema().clone(),
            memory_bytes,
        }
    }
}
