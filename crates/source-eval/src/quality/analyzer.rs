use crate::dataset::Dataset;
use crate::error::{Result, ResultExt};
use crate::profiler::{distinct_non_missing, percentage, round2};
use crate::types::{ColumnQuality, QualityReport};
use polars::prelude::*;
use tracing::debug;

pub struct DataQualityAnalyzer;

impl DataQualityAnalyzer {
    /// Missing ratio, unique count and unique ratio for every column, in
    /// source column order.
    pub fn evaluate(dataset: &Dataset) -> Result<QualityReport> {
        let total_rows = dataset.row_count();

        let columns = dataset
            .frame()
            .get_columns()
            .iter()
            .map(|col| Self::column_quality(col, total_rows))
            .collect::<Result<Vec<_>>>()?;

        Ok(QualityReport { columns })
    }

    fn column_quality(col: &Column, total_rows: usize) -> Result<ColumnQuality> {
        let series = col.as_materialized_series();
        let missing_count = series.null_count();
        let unique_count = distinct_non_missing(series)
            .context(format!("Counting distinct values of '{}'", col.name()))?;

        let quality = ColumnQuality {
            column: col.name().to_string(),
            missing_count,
            missing_ratio_pct: round2(percentage(missing_count, total_rows)),
            unique_count,
            unique_ratio_pct: round2(percentage(unique_count, total_rows)),
        };

        debug!(
            "Column '{}': {:.2}% missing, {} unique ({:.2}%)",
            quality.column, quality.missing_ratio_pct, quality.unique_count, quality.unique_ratio_pct
        );

        Ok(quality)
    }
}
