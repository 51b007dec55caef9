use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ReportError, Result};

/// Layout of the date/time pairs written by the heating equipment.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout of dates in the monthly reports (`DD/MM/YYYY`).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Join a date field and a time field with a single space and parse the pair
/// as [`TIMESTAMP_FORMAT`].
///
/// Both fields must have the exact fixed shape (`YYYY-MM-DD` and
/// `HH:MM:SS`, with the hour allowed to be a single digit); padded or
/// shortened components are rejected. Returns `None` when the pair does not
/// match the layout.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    if !has_date_shape(date) || !has_time_shape(time) {
        return None;
    }
    let joined = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&joined, TIMESTAMP_FORMAT).ok()
}

/// Parse the start-of-cycle pair, failing with [`ReportError::TimestampParse`]
/// when it does not match the layout.
pub fn parse_start_timestamp(date: &str, time: &str) -> Result<NaiveDateTime> {
    parse_timestamp(date, time)
        .ok_or_else(|| ReportError::TimestampParse(format!("{} {}", date, time)))
}

/// `YYYY-MM-DD`: ten ASCII characters, digits everywhere but the dashes.
fn has_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `HH:MM:SS` or `H:MM:SS`; minutes and seconds always take two digits.
fn has_time_shape(time: &str) -> bool {
    let bytes = time.as_bytes();
    let hour_digits = match bytes.len() {
        7 => 1,
        8 => 2,
        _ => return false,
    };
    bytes.iter().enumerate().all(|(i, b)| {
        if i == hour_digits || i == hour_digits + 3 {
            *b == b':'
        } else {
            b.is_ascii_digit()
        }
    })
}

// ── Display ───────────────────────────────────────────────────────────────────

/// Format a date as `DD/MM/YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
