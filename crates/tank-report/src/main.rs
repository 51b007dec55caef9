mod bootstrap;

use anyhow::{Context, Result};
use clap::Parser;
use report_core::settings::Settings;
use report_runtime::orchestrator::{ReportRun, RunSummary};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;
    tracing::info!("tank-report v{} starting", env!("CARGO_PKG_VERSION"));

    let input_dir = settings.resolve_input_dir();
    bootstrap::ensure_output_dir(&settings.output_dir).with_context(|| {
        format!(
            "Cannot create output folder {}",
            settings.output_dir.display()
        )
    })?;

    let summary = ReportRun::new(&input_dir, &settings.output_dir)
        .execute()
        .with_context(|| format!("Cannot process folder {}", input_dir.display()))?;

    if settings.json {
        println!("{}", summary.to_json()?);
    } else {
        print_status(&summary);
    }

    Ok(())
}

/// One status line per monthly report, as the operators are used to.
fn print_status(summary: &RunSummary) {
    if summary.is_empty() {
        tracing::warn!("No records found in the CSV files");
        println!("No records found in {}", summary.input_dir.display());
        return;
    }

    for report in &summary.reports {
        match &report.error {
            None => println!(
                "✅ Generated {}: {} records ({})",
                report.path.display(),
                report.records,
                report.month_key
            ),
            Some(err) => println!("❌ Failed to create {}: {}", report.path.display(), err),
        }
    }

    if !summary.skipped.is_empty() {
        println!("⚠️  {} file(s) skipped", summary.skipped.len());
    }
}
