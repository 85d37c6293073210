use crate::dataset::Dataset;
use crate::error::{Result, ResultExt};
use crate::profiler::percentage;
use crate::types::CompletenessReport;
use polars::prelude::*;

/// Counts complete rows (no missing cell in any column) and partial rows.
pub struct CompletenessChecker;

impl CompletenessChecker {
    pub fn check(dataset: &Dataset) -> Result<CompletenessReport> {
        let total_rows = dataset.row_count();
        let complete_row_count = Self::complete_row_count(dataset.frame())?;
        let partial_row_count = total_rows - complete_row_count;

        Ok(CompletenessReport {
            complete_row_count,
            complete_row_pct: percentage(complete_row_count, total_rows),
            partial_row_count,
            partial_row_pct: percentage(partial_row_count, total_rows),
        })
    }

    fn complete_row_count(df: &DataFrame) -> Result<usize> {
        let complete = df
            .drop_nulls::<String>(None)
            .context("Dropping rows with missing values")?;
        Ok(complete.height())
    }
}
