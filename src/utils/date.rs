use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM-DD` argument, or the keywords `today` / `yesterday`.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today()),
        "yesterday" => today()
            .pred_opt()
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        _ => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// First and last day covered by a single period expression
/// (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
            Some((first, last))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse a period filter.
///
/// Supports:
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - START:END with both sides in one of the forms above
///   (e.g. `2024-09:2025-02`, `2025-01-01:2025-01-15`)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("invalid period '{p}'"));

    let (start, end) = match p.split_once(':') {
        Some((s, e)) => {
            let (s, _) = period_bounds(s.trim()).ok_or_else(invalid)?;
            let (_, e) = period_bounds(e.trim()).ok_or_else(invalid)?;
            (s, e)
        }
        None => period_bounds(p.trim()).ok_or_else(invalid)?,
    };

    if start > end {
        return Err(AppError::InvalidDate(format!(
            "period '{p}' ends before it starts"
        )));
    }
    Ok((start, end))
}

pub fn weekday_str(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
