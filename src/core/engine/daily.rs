use crate::models::daily_aggregate::DailyAggregate;
use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Default)]
struct DayAcc {
    duration: u32,
    distance: f64,
    max_pain: u8,
    weight_sum: f64,
    weight_count: usize,
    entries: usize,
}

/// Group entries by calendar date, ascending.
///
/// Dates with no entries produce no row.
pub fn aggregate_daily(entries: &[LogEntry]) -> Vec<DailyAggregate> {
    let mut days: BTreeMap<NaiveDate, DayAcc> = BTreeMap::new();

    for e in entries {
        let acc = days.entry(e.date).or_default();

        acc.duration = acc.duration.saturating_add(e.duration);
        acc.distance += e.distance;
        acc.entries += 1;

        if let Some(p) = e.pain_level {
            acc.max_pain = acc.max_pain.max(p);
        }

        if let Some(w) = e.weight {
            acc.weight_sum += w;
            acc.weight_count += 1;
        }
    }

    days.into_iter()
        .map(|(date, acc)| DailyAggregate {
            date,
            total_duration: acc.duration,
            total_distance: acc.distance,
            max_pain: acc.max_pain,
            mean_weight: (acc.weight_count > 0).then(|| acc.weight_sum / acc.weight_count as f64),
            entry_count: acc.entries,
        })
        .collect()
}

/// Max pain for `date`, or 0 when the day has no row.
///
/// `daily` must be sorted by date, as returned by [`aggregate_daily`].
pub fn max_pain_on(daily: &[DailyAggregate], date: NaiveDate) -> u8 {
    daily
        .binary_search_by_key(&date, |d| d.date)
        .map(|i| daily[i].max_pain)
        .unwrap_or(0)
}
