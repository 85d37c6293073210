use crate::error::{EvaluationError, Result};
use crate::types::{BasicInfoReport, CompletenessReport, EvaluationReport, QualityReport};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

pub const BASIC_INFO_FILE: &str = "basic_info.csv";
pub const QUALITY_FILE: &str = "data_quality.csv";
pub const COMPLETENESS_FILE: &str = "completeness.csv";

/// Writes the reports as BOM-prefixed UTF-8 CSV files into one directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory and any missing parents. Succeeds if it
    /// already exists.
    pub fn ensure_output_dir(&self) -> Result<()> {
        if !self.output_dir.is_dir() {
            fs::create_dir_all(&self.output_dir)
                .map_err(|e| EvaluationError::write(&self.output_dir, e))?;
            info!("Created output directory: {}", self.output_dir.display());
        }
        Ok(())
    }

    /// Write the three reports; returns the written paths in order
    /// basic info, quality, completeness.
    pub fn write_all(&self, report: &EvaluationReport) -> Result<Vec<PathBuf>> {
        Ok(vec![
            self.write_basic_info(&report.basic_info)?,
            self.write_quality(&report.quality)?,
            self.write_completeness(&report.completeness)?,
        ])
    }

    pub fn write_basic_info(&self, report: &BasicInfoReport) -> Result<PathBuf> {
        let mut frame = basic_info_frame(report)?;
        self.write_frame(BASIC_INFO_FILE, &mut frame)
    }

    pub fn write_quality(&self, report: &QualityReport) -> Result<PathBuf> {
        let mut frame = quality_frame(report)?;
        self.write_frame(QUALITY_FILE, &mut frame)
    }

    pub fn write_completeness(&self, report: &CompletenessReport) -> Result<PathBuf> {
        let mut frame = completeness_frame(report)?;
        self.write_frame(COMPLETENESS_FILE, &mut frame)
    }

    fn write_frame(&self, file_name: &str, frame: &mut DataFrame) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let mut file = File::create(&path).map_err(|e| EvaluationError::write(&path, e))?;

        CsvWriter::new(&mut file)
            .include_bom(true)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(frame)
            .map_err(|e| EvaluationError::write(&path, e))?;

        info!("Report saved: {}", path.display());
        Ok(path)
    }
}

/// Single-row table: `row_count,column_count,column_types,memory_usage`.
pub fn basic_info_frame(report: &BasicInfoReport) -> PolarsResult<DataFrame> {
    df!(
        "row_count" => [report.row_count as u64],
        "column_count" => [report.column_count as u64],
        "column_types" => [report.column_types.to_string()],
        "memory_usage" => [report.memory_usage()]
    )
}

/// One row per source column, keyed by the leading `column` field.
pub fn quality_frame(report: &QualityReport) -> PolarsResult<DataFrame> {
    let columns: Vec<&str> = report.columns.iter().map(|c| c.column.as_str()).collect();
    let missing: Vec<f64> = report.columns.iter().map(|c| c.missing_ratio_pct).collect();
    let unique: Vec<u64> = report.columns.iter().map(|c| c.unique_count as u64).collect();
    let unique_ratio: Vec<f64> = report.columns.iter().map(|c| c.unique_ratio_pct).collect();

    df!(
        "column" => columns,
        "missing_ratio_pct" => missing,
        "unique_count" => unique,
        "unique_ratio_pct" => unique_ratio
    )
}

/// Single-row table with percentages rendered as `"75.00%"`.
pub fn completeness_frame(report: &CompletenessReport) -> PolarsResult<DataFrame> {
    df!(
        "complete_row_count" => [report.complete_row_count as u64],
        "complete_row_pct" => [report.complete_row_pct_display()],
        "partial_row_count" => [report.partial_row_count as u64],
        "partial_row_pct" => [report.partial_row_pct_display()]
    )
}
