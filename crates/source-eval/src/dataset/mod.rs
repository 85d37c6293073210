//! The loaded dataset and its schema.
//!
//! A [`Dataset`] is created once per run, is read-only afterwards, and is
//! passed by reference to every report computation.

mod loader;
mod schema;

pub use schema::{ColumnKind, ColumnSchema, SchemaDescriptor};

use crate::config::EvaluatorConfig;
use crate::error::Result;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Immutable in-memory dataset with its schema descriptor.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    schema: SchemaDescriptor,
    source: PathBuf,
}

impl Dataset {
    /// Load the dataset named by `config.input_path` (`-` reads standard input).
    pub fn load(config: &EvaluatorConfig) -> Result<Self> {
        info!("Loading dataset from: {}", config.input_path.display());
        let frame = loader::read_csv(config)?;
        let dataset = Self::from_frame(frame, &config.input_path);
        info!(
            "Dataset loaded successfully: {} records, {} columns",
            dataset.row_count(),
            dataset.column_count()
        );
        Ok(dataset)
    }

    /// Wrap an existing frame.
    pub fn from_frame(frame: DataFrame, source: impl AsRef<Path>) -> Self {
        let schema = SchemaDescriptor::from_frame(&frame);
        Self {
            frame,
            schema,
            source: source.as_ref().to_path_buf(),
        }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    /// Where the data came from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    pub fn column_count(&self) -> usize {
        self.frame.width()
    }
}
