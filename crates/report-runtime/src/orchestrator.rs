//! One-shot report run shared by every front-end.
//!
//! [`ReportRun`] scans a folder of raw heating files and writes one report
//! per month into an output folder, returning a [`RunSummary`] the caller can
//! print, serialize or show however it likes.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use report_core::error::Result;
use report_core::models::{HeatCycleRecord, SkippedFile};
use report_data::aggregator::{MonthStats, MonthlyReport};
use report_data::reader::scan_dir;
use report_data::writer::{report_file_name, write_report};
use serde::Serialize;
use tracing::{info, warn};

// ── Public types ──────────────────────────────────────────────────────────────

/// Result of writing one monthly report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    /// Month the report covers (`YYYY-MM`).
    pub month_key: String,
    /// Destination file.
    pub path: PathBuf,
    /// Number of heating cycles in the month.
    pub records: u32,
    pub total_minutes: i64,
    pub valve_minutes: i64,
    /// Cycles still missing an end time.
    pub open_cycles: u32,
    /// Why the report could not be written, if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything a run did, in month order.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub generated_at: NaiveDateTime,
    /// Files that produced a record.
    pub files_parsed: usize,
    pub skipped: Vec<SkippedFile>,
    pub reports: Vec<ReportOutcome>,
}

impl RunSummary {
    /// `true` when no input file produced a record.
    pub fn is_empty(&self) -> bool {
        self.files_parsed == 0
    }

    pub fn failed_reports(&self) -> impl Iterator<Item = &ReportOutcome> {
        self.reports.iter().filter(|r| !r.is_success())
    }

    /// Pretty-printed JSON form of the summary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ── ReportRun ─────────────────────────────────────────────────────────────────

/// A single batch transform from a folder of raw files to monthly reports.
pub struct ReportRun {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl ReportRun {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Scan the input folder and write every monthly report.
    ///
    /// Fails only when the input folder cannot be listed. A month whose
    /// report cannot be written is recorded in its [`ReportOutcome`] and the
    /// remaining months are still written.
    pub fn execute(&self) -> Result<RunSummary> {
        info!("Processing {}", self.input_dir.display());
        let scan = scan_dir(&self.input_dir)?;

        let reports = self.write_reports(&scan.records_by_month);

        Ok(RunSummary {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            generated_at: Local::now().naive_local(),
            files_parsed: scan.files_parsed,
            skipped: scan.skipped,
            reports,
        })
    }

    /// Write one report per month key, in ascending month order.
    pub fn write_reports(&self, records_by_month: &MonthlyReport) -> Vec<ReportOutcome> {
        records_by_month
            .iter()
            .map(|(month_key, records)| self.write_month(month_key, records))
            .collect()
    }

    fn write_month(&self, month_key: &str, records: &[HeatCycleRecord]) -> ReportOutcome {
        let path = self.output_dir.join(report_file_name(month_key));
        let stats = MonthStats::from_records(records);

        let error = match write_report(&path, records) {
            Ok(()) => {
                info!(
                    "Generated {}: {} records ({})",
                    path.display(),
                    stats.count,
                    month_key
                );
                None
            }
            Err(e) => {
                warn!("Report for {} not written: {}", month_key, e);
                Some(e.to_string())
            }
        };

        ReportOutcome {
            month_key: month_key.to_string(),
            path,
            records: stats.count,
            total_minutes: stats.total_minutes,
            valve_minutes: stats.valve_minutes,
            open_cycles: stats.open_cycles,
            error,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
