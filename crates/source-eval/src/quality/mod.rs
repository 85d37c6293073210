//! Data quality analysis module.
//!
//! Per-column missingness and cardinality, and row-level completeness.

mod analyzer;
mod completeness;

pub use analyzer::DataQualityAnalyzer;
pub use completeness::CompletenessChecker;
