/// Format a minute count as `HH:MM`.
///
/// Hours are not wrapped at 24; both parts are zero-padded to two digits.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(0), "00:00");
/// assert_eq!(format_hours_minutes(125), "02:05");
/// assert_eq!(format_hours_minutes(1_500), "25:00");
/// ```
pub fn format_hours_minutes(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{:02}:{:02}", hours, minutes)
}

/// Format a temperature as whole degrees, rounding half away from zero.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_temperature;
///
/// assert_eq!(format_temperature(64.4), "64");
/// assert_eq!(format_temperature(64.5), "65");
/// assert_eq!(format_temperature(0.0), "0");
/// ```
pub fn format_temperature(celsius: f64) -> String {
    let rounded = celsius.round();
    if rounded == 0.0 {
        // Avoid printing "-0" for small negative readings.
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

/// Keep only the `HH:MM` part of a `HH:MM:SS` time.
///
/// Values shorter than five characters are returned unchanged.
pub fn format_clock(time: &str) -> String {
    time.chars().take(5).collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
