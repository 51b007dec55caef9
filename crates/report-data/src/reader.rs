//! Raw heating file discovery and loading.
//!
//! Lists the `.csv` files directly inside a folder, decodes each one as
//! `;`-delimited text and hands its first line to the [`parser`](crate::parser).
//! A file that cannot be read or parsed is logged and skipped; only a folder
//! that cannot be listed stops the scan.

use std::fs::File;
use std::path::{Path, PathBuf};

use report_core::error::{ReportError, Result};
use report_core::models::{HeatCycleRecord, SkippedFile};
use tracing::{debug, info, warn};

use crate::aggregator::{MonthAggregator, MonthlyReport};
use crate::parser::parse_line;

/// Field delimiter used by the heating equipment.
pub const FIELD_DELIMITER: u8 = b';';

/// Extension of the raw heating files.
pub const INPUT_EXTENSION: &str = "csv";

// ── ScanResult ────────────────────────────────────────────────────────────────

/// Outcome of scanning one folder of raw heating files.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Parsed records grouped by `YYYY-MM` and sorted within each month.
    pub records_by_month: MonthlyReport,
    /// Number of files that produced a record.
    pub files_parsed: usize,
    /// Files left out, with the reason.
    pub skipped: Vec<SkippedFile>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a folder of raw heating files and return the records grouped by
/// month.
///
/// Per-file failures are logged and skipped; the error case is reserved for
/// a folder that cannot be listed.
pub fn process_dir(dir: &Path) -> Result<MonthlyReport> {
    scan_dir(dir).map(|scan| scan.records_by_month)
}

/// Like [`process_dir`], but also reports which files were skipped.
pub fn scan_dir(dir: &Path) -> Result<ScanResult> {
    let files = find_csv_files(dir)?;

    let mut records: Vec<HeatCycleRecord> = Vec::with_capacity(files.len());
    let mut skipped: Vec<SkippedFile> = Vec::new();

    for file_path in &files {
        match process_file(file_path) {
            Ok(record) => {
                debug!(
                    "Parsed {}: record {} started {}",
                    file_path.display(),
                    record.id,
                    record.started_at
                );
                records.push(record);
            }
            Err(e) => {
                warn!("Skipping {}: {}", file_path.display(), e);
                skipped.push(SkippedFile {
                    path: file_path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let files_parsed = records.len();
    info!(
        "Scanned {}: {} files, {} parsed, {} skipped",
        dir.display(),
        files.len(),
        files_parsed,
        skipped.len()
    );

    Ok(ScanResult {
        records_by_month: MonthAggregator::group_by_month(records),
        files_parsed,
        skipped,
    })
}

/// List the regular `.csv` files directly inside `dir`, sorted by name.
///
/// Sub-folders are not descended into.
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(dir).map_err(|source| ReportError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ReportError::NotADirectory(dir.to_path_buf()));
    }

    let files = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Cannot inspect entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == INPUT_EXTENSION)
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    Ok(files)
}

/// Read and parse a single raw heating file.
pub fn process_file(file_path: &Path) -> Result<HeatCycleRecord> {
    let fields = read_first_line(file_path)?;
    parse_line(&fields)
}

/// Decode a whole `;`-delimited file and return the fields of its first line.
///
/// The file must decode completely, including a consistent field count on
/// every line; lines after the first are otherwise ignored. Field bytes are
/// decoded as UTF-8 lossily. A quote inside an unquoted field is kept as a
/// literal character.
pub fn read_first_line(file_path: &Path) -> Result<Vec<String>> {
    let file = File::open(file_path).map_err(|source| ReportError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .from_reader(file);

    let mut first: Option<csv::ByteRecord> = None;
    for result in reader.byte_records() {
        let record = result.map_err(|source| ReportError::CsvRead {
            path: file_path.to_path_buf(),
            source,
        })?;
        if first.is_none() {
            first = Some(record);
        }
    }

    let record = first.ok_or_else(|| ReportError::EmptyFile(file_path.to_path_buf()))?;
    Ok(record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
