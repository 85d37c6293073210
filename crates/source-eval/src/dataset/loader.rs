//! CSV loading for the source dataset.

use crate::config::EvaluatorConfig;
use crate::error::{EvaluationError, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the configured CSV file into a frame.
///
/// Any failure (missing file, unreadable file, malformed content) is reported
/// as [`EvaluationError::Load`] carrying the path and the underlying cause.
pub(crate) fn read_csv(config: &EvaluatorConfig) -> Result<DataFrame> {
    if config.reads_stdin() {
        return read_csv_stdin(config);
    }

    let path = config.input_path.as_path();
    let file = File::open(path).map_err(|e| EvaluationError::load(path, e))?;

    debug!(
        "Reading CSV {} (separator {:?}, infer_schema_length {:?})",
        path.display(),
        config.separator as char,
        config.infer_schema_length
    );

    csv_options(config)
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| EvaluationError::load(path, e))
}

fn read_csv_stdin(config: &EvaluatorConfig) -> Result<DataFrame> {
    let path = config.input_path.as_path();
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|e| EvaluationError::load(path, e))?;

    debug!("Read {} bytes from standard input", bytes.len());
    read_csv_bytes(bytes, config, path)
}

/// Parse CSV content already held in memory.
fn read_csv_bytes(
    bytes: Vec<u8>,
    config: &EvaluatorConfig,
    origin: &Path,
) -> Result<DataFrame> {
    csv_options(config)
        .into_reader_with_file_handle(std::io::Cursor::new(bytes))
        .finish()
        .map_err(|e| EvaluationError::load(origin, e))
}

fn csv_options(config: &EvaluatorConfig) -> CsvReadOptions {
    let null_values = NullValues::AllColumns(
        config
            .null_markers
            .iter()
            .map(|m| PlSmallStr::from(m.as_str()))
            .collect(),
    );

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(config.infer_schema_length)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(config.separator)
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(null_values))
                .with_try_parse_dates(config.try_parse_dates),
        )
}
