//! Report output.
//!
//! Each report becomes its own CSV table in the output directory:
//!
//! - `basic_info.csv`: shape, column types and memory footprint (one row)
//! - `data_quality.csv`: missing and unique ratios, one row per source column
//! - `completeness.csv`: complete vs. partial row counts (one row)
//!
//! Files start with a UTF-8 byte-order mark so spreadsheet tools detect the
//! encoding.
//!
//! # Example
//!
//! ```rust,ignore
//! use source_eval::reporting::ReportWriter;
//!
//! let writer = ReportWriter::new("results/source_evaluation");
//! writer.ensure_output_dir()?;
//! let written = writer.write_all(&report)?;
//! ```

mod writer;

pub use writer::{
    BASIC_INFO_FILE, COMPLETENESS_FILE, QUALITY_FILE, ReportWriter, basic_info_frame,
    completeness_frame, quality_frame,
};
