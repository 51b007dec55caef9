use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One tank heating cycle recovered from a raw equipment line.
///
/// Only the start timestamp is guaranteed to come from the source; every
/// other numeric or temporal field falls back to zero, empty or the start
/// date when the equipment left it blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatCycleRecord {
    /// Opaque identifier assigned by the heating station.
    pub id: String,
    pub client: String,
    pub operator: String,
    pub tank_number: String,
    pub trailer_plate: String,
    /// Heating bay the tank was parked on.
    pub lane_number: i64,
    /// Setpoint the cycle was heating towards, in °C.
    pub target_temperature: f64,
    /// Start of the cycle; always present.
    pub started_at: NaiveDateTime,
    /// Start time exactly as written by the equipment (`HH:MM:SS`).
    pub start_time: String,
    /// Tank temperature when heating began, in °C.
    pub start_temperature: f64,
    /// End of the cycle, or `started_at` when no end stamp was recorded.
    pub ended_at: NaiveDateTime,
    /// End time as written by the equipment; empty while the cycle is open.
    #[serde(default)]
    pub end_time: String,
    /// Final tank temperature in °C; `0` when not yet recorded.
    #[serde(default)]
    pub end_temperature: f64,
    /// Elapsed heating time in minutes.
    #[serde(default)]
    pub total_minutes: i64,
    /// Minutes attributed to valve operation.
    #[serde(default)]
    pub valve_minutes: i64,
}

impl HeatCycleRecord {
    pub fn start_date(&self) -> NaiveDate {
        self.started_at.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.ended_at.date()
    }

    /// Calendar month of the start date, formatted `YYYY-MM`.
    pub fn month_key(&self) -> String {
        self.started_at.format("%Y-%m").to_string()
    }

    /// Whether the equipment recorded an end-of-cycle time stamp.
    pub fn is_completed(&self) -> bool {
        !self.end_time.is_empty()
    }
}

/// An input file that was left out of the run, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}
