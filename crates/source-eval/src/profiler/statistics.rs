//! Shared counting, ratio and formatting helpers for the reports.

use crate::error::Result;
use polars::prelude::*;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// `100 * part / total`, or 0 when `total` is 0.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Round half away from zero to 2 decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a percentage as `"87.50%"`.
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Render a byte count as `"1.25 MB"`.
pub fn format_megabytes(bytes: usize) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MEGABYTE)
}

/// Number of distinct non-missing values in a series.
///
/// polars counts null as its own group in `n_unique`; it is removed here so
/// missing cells never contribute to cardinality.
pub(crate) fn distinct_non_missing(series: &Series) -> Result<usize> {
    let n_unique = series.n_unique()?;
    let has_missing = series.null_count() > 0;
    Ok(n_unique.saturating_sub(usize::from(has_missing)))
}

/// Estimated in-memory size of a column, in bytes.
pub(crate) fn column_memory_bytes(column: &Column) -> usize {
    column.as_materialized_series().estimated_size()
}
