use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while turning raw heating files into monthly reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A raw line has fewer fields than the fixed layout requires.
    #[error("Line too short: {fields} fields")]
    Structural { fields: usize },

    /// The start date/time pair did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("Invalid start timestamp: {0}")]
    TimestampParse(String),

    /// An input file could not be opened.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be decoded as `;`-delimited text.
    #[error("Failed to decode file {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// An input file decoded fine but holds no data line.
    #[error("No data line in {0}")]
    EmptyFile(PathBuf),

    /// The input directory could not be listed.
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A monthly report could not be created or written.
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
