//! Data layer for tank-report.
//!
//! Responsible for discovering and reading raw heating files, parsing their
//! fixed-column lines into records, grouping the records by month and
//! writing the monthly report files.

pub mod aggregator;
pub mod parser;
pub mod reader;
pub mod writer;

pub use report_core as core;
