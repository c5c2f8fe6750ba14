//! # vitalis-reports
//!
//! Upload-and-analyze flow for medical reports: push the file to
//! storage, produce the analysis, persist it, and notify the user of
//! the outcome either way.

mod analyzer;

pub use analyzer::ReportAnalyzer;
