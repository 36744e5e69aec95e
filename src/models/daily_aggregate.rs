use chrono::NaiveDate;
use serde::Serialize;

/// Per-day totals derived from the log. Never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub total_duration: u32,
    pub total_distance: f64,
    pub max_pain: u8,
    /// `None` when nobody weighed in that day.
    pub mean_weight: Option<f64>,
    pub entry_count: usize,
}
