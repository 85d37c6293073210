//! End-to-end evaluation of one data source.

use crate::config::EvaluatorConfig;
use crate::dataset::Dataset;
use crate::error::{Result, ResultExt};
use crate::profiler::DatasetProfiler;
use crate::quality::{CompletenessChecker, DataQualityAnalyzer};
use crate::reporting::ReportWriter;
use crate::types::{EvaluationReport, EvaluationOutcome};
use tracing::info;

/// Loads the configured source, computes the three reports and writes them.
pub struct SourceEvaluator {
    config: EvaluatorConfig,
}

impl SourceEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Run the whole evaluation.
    ///
    /// The dataset is read before the output directory is touched, so a load
    /// failure leaves no trace on disk. Files written before a later failure
    /// are left in place but the run as a whole is an error.
    pub fn run(&self) -> Result<EvaluationOutcome> {
        let dataset = Dataset::load(&self.config)?;

        let writer = ReportWriter::new(&self.config.output_dir);
        writer.ensure_output_dir()?;

        let report = Self::evaluate(&dataset)?;

        info!("Writing reports to: {}", writer.output_dir().display());
        let output_files = writer.write_all(&report)?;
        info!("Evaluation report generation complete");

        Ok(EvaluationOutcome {
            report,
            output_dir: self.config.output_dir.clone(),
            output_files,
        })
    }

    /// Compute the three reports for an already loaded dataset.
    pub fn evaluate(dataset: &Dataset) -> Result<EvaluationReport> {
        info!("Analyzing basic information");
        let basic_info = DatasetProfiler::basic_info(dataset);

        info!("Evaluating data quality");
        let quality = DataQualityAnalyzer::evaluate(dataset).context("Data quality evaluation")?;

        info!("Checking data completeness");
        let completeness =
            CompletenessChecker::check(dataset).context("Completeness check")?;

        Ok(EvaluationReport {
            source: dataset.source().to_path_buf(),
            basic_info,
            quality,
            completeness,
        })
    }
}
