use clap::Parser;
use std::path::{Path, PathBuf};

/// Folder the desktop tool looked in when no directory was given.
pub const DEFAULT_INPUT_FOLDER: &str = "Riscaldi";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Build monthly tank heating reports from raw equipment files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tank-report",
    about = "Build monthly tank heating reports from raw equipment files",
    version
)]
pub struct Settings {
    /// Folder holding the raw `.csv` heating files (defaults to `Riscaldi` next to the executable)
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Folder the monthly `tank_report_<YYYY-MM>.csv` files are written to
    #[arg(long, env = "TANK_REPORT_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Logging level (overridden by `RUST_LOG`)
    #[arg(long, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Print the run summary as JSON instead of status lines
    #[arg(long)]
    pub json: bool,
}

impl Settings {
    /// The input folder to scan: the explicit argument when given, otherwise
    /// [`DEFAULT_INPUT_FOLDER`] beside the running executable.
    pub fn resolve_input_dir(&self) -> PathBuf {
        if let Some(dir) = &self.input_dir {
            return dir.clone();
        }
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        default_input_dir_in(&exe_dir)
    }
}

/// Default input folder rooted at `base_dir`.
pub fn default_input_dir_in(base_dir: &Path) -> PathBuf {
    base_dir.join(DEFAULT_INPUT_FOLDER)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
