//! Serialization of one month of heating cycles to a `;`-delimited report.
//!
//! Layout: header, one row per cycle in the given order, an all-empty
//! separator row, then a summary row carrying the month's total time.

use std::io::Write;
use std::path::Path;

use report_core::error::{ReportError, Result};
use report_core::formatting::{format_clock, format_hours_minutes, format_temperature};
use report_core::models::HeatCycleRecord;
use report_core::time_utils::format_display_date;
use tracing::debug;

use crate::aggregator::MonthAggregator;
use crate::reader::FIELD_DELIMITER;

/// Column labels of the monthly report.
pub const REPORT_HEADER: [&str; 8] = [
    "Numero Tank",
    "Temperatura iniziale (°C)",
    "Data Inizio Riscaldo",
    "Ora Inizio Riscaldo",
    "Temperatura finale (°C)",
    "Data fine riscaldo",
    "Ora fine riscaldo",
    "Totale ore",
];

/// Label written in the seventh column of the summary row.
pub const TOTAL_LABEL: &str = "Totale ore";

/// File name of the report for `month_key` (`YYYY-MM`).
pub fn report_file_name(month_key: &str) -> String {
    format!("tank_report_{}.csv", month_key)
}

/// Write the report for one month to `path`, replacing any existing file.
///
/// Any create or write failure is returned as [`ReportError::ReportWrite`]
/// naming `path`. A partially written file is left in place.
pub fn write_report(path: &Path, records: &[HeatCycleRecord]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| ReportError::ReportWrite {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;

    write_report_to(file, records).map_err(|source| ReportError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Write the report for one month to any [`Write`] sink.
pub fn write_report_to<W: Write>(sink: W, records: &[HeatCycleRecord]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(REPORT_HEADER)?;
    for record in records {
        writer.write_record(report_row(record))?;
    }

    writer.write_record([""; 8])?;
    writer.write_record(summary_row(MonthAggregator::total_minutes(records)))?;

    writer.flush()?;
    Ok(())
}

/// Display cells for a single heating cycle.
pub fn report_row(record: &HeatCycleRecord) -> [String; 8] {
    let end_time = if record.is_completed() {
        format_clock(&record.end_time)
    } else {
        String::new()
    };

    [
        record.tank_number.clone(),
        format_temperature(record.start_temperature),
        format_display_date(record.start_date()),
        format_clock(&record.start_time),
        format_temperature(record.end_temperature),
        format_display_date(record.end_date()),
        end_time,
        format_hours_minutes(record.total_minutes),
    ]
}

/// Summary row: six empty cells, the total label, then the month's time.
pub fn summary_row(total_minutes: i64) -> [String; 8] {
    let mut row: [String; 8] = Default::default();
    row[6] = TOTAL_LABEL.to_string();
    row[7] = format_hours_minutes(total_minutes);
    row
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_record(tank: &str, started: &str, ended: Option<&str>, total_minutes: i64) -> HeatCycleRecord {
        let started_at = at(started);
        let (ended_at, end_time) = match ended {
            Some(e) => (at(e), e[11..].to_string()),
            None => (started_at, String::new()),
        };
        HeatCycleRecord {
            id: tank.to_string(),
            client: "ACME".to_string(),
            operator: "Rossi".to_string(),
            tank_number: tank.to_string(),
            trailer_plate: "AB123CD".to_string(),
            lane_number: 1,
            target_temperature: 65.0,
            started_at,
            start_time: started[11..].to_string(),
            start_temperature: 12.6,
            ended_at,
            end_time,
            end_temperature: 64.4,
            total_minutes,
            valve_minutes: 0,
        }
    }

    fn render(records: &[HeatCycleRecord]) -> String {
        let mut buf = Vec::new();
        write_report_to(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn read_rows(content: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_reader(content.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    fn parse_hours_minutes(value: &str) -> i64 {
        let (h, m) = value.split_once(':').unwrap();
        h.parse::<i64>().unwrap() * 60 + m.parse::<i64>().unwrap()
    }

    // ── report_row ────────────────────────────────────────────────────────────

    #[test]
    fn test_report_row_completed_cycle() {
        let record = make_record("TK-1", "2024-01-05 08:15:30", Some("2024-01-06 01:02:03"), 1_006);
        assert_eq!(
            report_row(&record),
            [
                "TK-1".to_string(),
                "13".to_string(),
                "05/01/2024".to_string(),
                "08:15".to_string(),
                "64".to_string(),
                "06/01/2024".to_string(),
                "01:02".to_string(),
                "16:46".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_row_open_cycle() {
        let record = make_record("TK-2", "2024-01-05 08:15:30", None, 0);
        let row = report_row(&record);
        assert_eq!(row[5], "05/01/2024");
        assert_eq!(row[6], "");
        assert_eq!(row[7], "00:00");
    }

    #[test]
    fn test_report_row_short_end_time_kept_verbatim() {
        let mut record = make_record("TK-3", "2024-01-05 08:15:30", None, 10);
        record.end_time = "9:05".to_string();
        assert_eq!(report_row(&record)[6], "9:05");
    }

    #[test]
    fn test_summary_row_layout() {
        let row = summary_row(3_061);
        assert!(row[..6].iter().all(String::is_empty));
        assert_eq!(row[6], "Totale ore");
        assert_eq!(row[7], "51:01");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("2024-01"), "tank_report_2024-01.csv");
    }

    // ── write_report_to ───────────────────────────────────────────────────────

    #[test]
    fn test_report_structure() {
        let records = vec![
            make_record("TK-1", "2024-01-05 08:00:00", Some("2024-01-05 10:30:00"), 150),
            make_record("TK-2", "2024-01-20 09:00:00", Some("2024-01-20 09:45:00"), 45),
        ];
        let rows = read_rows(&render(&records));

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], REPORT_HEADER.map(str::to_string).to_vec());
        assert_eq!(rows[1][0], "TK-1");
        assert_eq!(rows[2][0], "TK-2");
        assert!(rows[3].iter().all(String::is_empty));
        assert_eq!(rows[4][6], TOTAL_LABEL);
        assert_eq!(rows[4][7], "03:15");
    }

    #[test]
    fn test_report_uses_semicolons_and_plain_blank_row() {
        let content = render(&[make_record("TK-1", "2024-01-05 08:00:00", None, 5)]);
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("Numero Tank;Temperatura iniziale (°C);"));
        assert_eq!(lines[2], ";;;;;;;");
        assert_eq!(lines[3], ";;;;;;Totale ore;00:05");
    }

    #[test]
    fn test_report_total_matches_row_sum() {
        let records = vec![
            make_record("A", "2024-03-01 08:00:00", None, 59),
            make_record("B", "2024-03-02 08:00:00", None, 61),
            make_record("C", "2024-03-03 08:00:00", None, 1_500),
            make_record("D", "2024-03-04 08:00:00", None, 7),
        ];
        let rows = read_rows(&render(&records));

        let row_sum: i64 = rows[1..=4].iter().map(|r| parse_hours_minutes(&r[7])).sum();
        let summary = parse_hours_minutes(&rows[6][7]);
        assert_eq!(row_sum, summary);
        assert_eq!(summary, MonthAggregator::total_minutes(&records));
        assert_eq!(rows[6][7], "27:07");
    }

    #[test]
    fn test_report_huge_minutes_still_written() {
        let records = vec![
            make_record("A", "2024-03-01 08:00:00", None, i64::MAX),
            make_record("B", "2024-03-02 08:00:00", None, i64::MAX),
        ];
        let rows = read_rows(&render(&records));
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4][7], format_hours_minutes(i64::MAX));
    }

    #[test]
    fn test_report_empty_month() {
        let rows = read_rows(&render(&[]));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][7], "00:00");
    }

    // ── write_report ──────────────────────────────────────────────────────────

    #[test]
    fn test_write_report_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(report_file_name("2024-01"));
        let records = vec![make_record("TK-1", "2024-01-05 08:00:00", None, 90)];

        write_report(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_rows(&content).len(), 4);
    }

    #[test]
    fn test_write_report_missing_parent_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("tank_report_2024-01.csv");

        match write_report(&path, &[]) {
            Err(ReportError::ReportWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
