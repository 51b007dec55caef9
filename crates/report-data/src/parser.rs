//! Record parser for raw heating lines.
//!
//! The equipment writes a fixed column layout, but pads a variable number of
//! empty or intermediate readings before the end-of-cycle data. Fixed fields
//! are read by index; the end temperature and end timestamp are recovered by
//! the two scanning helpers below.

use chrono::NaiveDateTime;
use report_core::error::{ReportError, Result};
use report_core::models::HeatCycleRecord;
use report_core::time_utils::{parse_start_timestamp, parse_timestamp};

/// Minimum number of fields a line needs to be parseable.
pub const MIN_FIELDS: usize = 19;

// ── Column layout ─────────────────────────────────────────────────────────────

const COL_ID: usize = 0;
const COL_CLIENT: usize = 2;
const COL_OPERATOR: usize = 3;
const COL_TANK: usize = 4;
const COL_TRAILER: usize = 5;
const COL_LANE: usize = 6;
const COL_TARGET_TEMP: usize = 7;
const COL_START_DATE: usize = 8;
const COL_START_TIME: usize = 9;
const COL_START_TEMP: usize = 10;
const COL_END_STAMP_SCAN: usize = 11;
const COL_END_TEMP_SCAN: usize = 13;
const COL_TOTAL_MINUTES: usize = 17;
const COL_VALVE_MINUTES: usize = 18;

/// Prefix that marks a field as a 2000s date stamp.
const END_DATE_PREFIX: &str = "20";

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one raw line into a [`HeatCycleRecord`].
///
/// Fails with [`ReportError::Structural`] when the line has fewer than
/// [`MIN_FIELDS`] fields and with [`ReportError::TimestampParse`] when the
/// start date/time pair is malformed. Every other field degrades to zero,
/// empty or the start date.
pub fn parse_line<S: AsRef<str>>(fields: &[S]) -> Result<HeatCycleRecord> {
    if fields.len() < MIN_FIELDS {
        return Err(ReportError::Structural {
            fields: fields.len(),
        });
    }

    let field = |i: usize| fields[i].as_ref();

    let started_at = parse_start_timestamp(field(COL_START_DATE), field(COL_START_TIME))?;

    let (ended_at, end_time) = match find_end_timestamp(fields) {
        Some((ts, time)) => (ts, time),
        None => (started_at, String::new()),
    };

    Ok(HeatCycleRecord {
        id: field(COL_ID).to_string(),
        client: field(COL_CLIENT).to_string(),
        operator: field(COL_OPERATOR).to_string(),
        tank_number: field(COL_TANK).to_string(),
        trailer_plate: field(COL_TRAILER).to_string(),
        lane_number: parse_int_or_zero(field(COL_LANE)),
        target_temperature: parse_float_or_zero(field(COL_TARGET_TEMP)),
        started_at,
        start_time: field(COL_START_TIME).to_string(),
        start_temperature: parse_float_or_zero(field(COL_START_TEMP)),
        ended_at,
        end_time,
        end_temperature: find_end_temperature(fields).unwrap_or(0.0),
        total_minutes: parse_int_or_zero(field(COL_TOTAL_MINUTES)),
        valve_minutes: parse_int_or_zero(field(COL_VALVE_MINUTES)),
    })
}

/// First reading from column 13 onwards that parses as a float strictly
/// greater than zero.
///
/// Empty, non-numeric, zero and negative fields are skipped: zero means the
/// reading has not been recorded yet.
pub fn find_end_temperature<S: AsRef<str>>(fields: &[S]) -> Option<f64> {
    fields
        .iter()
        .skip(COL_END_TEMP_SCAN)
        .filter_map(|f| f.as_ref().parse::<f64>().ok())
        .find(|value| *value > 0.0)
}

/// First `date;time` pair from column 11 up to `len - 4` whose date starts
/// with `"20"` and which parses as `YYYY-MM-DD HH:MM:SS`.
///
/// Returns the parsed timestamp together with the raw time field.
pub fn find_end_timestamp<S: AsRef<str>>(fields: &[S]) -> Option<(NaiveDateTime, String)> {
    let scan_end = fields.len().saturating_sub(4);
    (COL_END_STAMP_SCAN..scan_end).find_map(|i| {
        let date = fields[i].as_ref();
        if date.is_empty() || !date.starts_with(END_DATE_PREFIX) {
            return None;
        }
        let time = fields.get(i + 1)?.as_ref();
        parse_timestamp(date, time).map(|ts| (ts, time.to_string()))
    })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn parse_int_or_zero(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

fn parse_float_or_zero(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
