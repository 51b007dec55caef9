//! Runtime layer for tank-report.
//!
//! Ties the data layer together into a single report run that any
//! front-end (command line or otherwise) can drive.

pub mod orchestrator;

pub use report_core as core;
pub use report_data as data;
