//! Grouping of heating cycles into calendar months.

use std::collections::BTreeMap;

use report_core::models::HeatCycleRecord;

/// Records keyed by `YYYY-MM`, each bucket sorted by start.
pub type MonthlyReport = BTreeMap<String, Vec<HeatCycleRecord>>;

// ── MonthStats ────────────────────────────────────────────────────────────────

/// Totals accumulated over the heating cycles of one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthStats {
    pub count: u32,
    pub total_minutes: i64,
    pub valve_minutes: i64,
    /// Cycles that have no recorded end time yet.
    pub open_cycles: u32,
}

impl MonthStats {
    /// Add a single record to the running totals.
    pub fn add_record(&mut self, record: &HeatCycleRecord) {
        self.count += 1;
        self.total_minutes = self.total_minutes.saturating_add(record.total_minutes);
        self.valve_minutes = self.valve_minutes.saturating_add(record.valve_minutes);
        if !record.is_completed() {
            self.open_cycles += 1;
        }
    }

    pub fn from_records(records: &[HeatCycleRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add_record(record);
        }
        stats
    }
}

// ── MonthAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that buckets records by the month they started in.
pub struct MonthAggregator;

impl MonthAggregator {
    /// Group `records` by the `YYYY-MM` of their start date.
    ///
    /// Records are appended to their bucket in arrival order, then every
    /// bucket is sorted by start timestamp with the record id as tie-break.
    pub fn group_by_month(records: impl IntoIterator<Item = HeatCycleRecord>) -> MonthlyReport {
        let mut buckets: BTreeMap<String, Vec<HeatCycleRecord>> = BTreeMap::new();
        for record in records {
            buckets.entry(record.month_key()).or_default().push(record);
        }

        buckets
            .into_iter()
            .map(|(key, mut bucket)| {
                Self::sort_chronologically(&mut bucket);
                (key, bucket)
            })
            .collect()
    }

    /// Sort by start timestamp, then by record id.
    pub fn sort_chronologically(records: &mut [HeatCycleRecord]) {
        records.sort_by(|a, b| {
            a.started_at
                .cmp(&b.started_at)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    /// Sum of `total_minutes` across `records`, saturating at the `i64`
    /// bounds so a garbled minutes field cannot overflow the month total.
    pub fn total_minutes(records: &[HeatCycleRecord]) -> i64 {
        records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.total_minutes))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
