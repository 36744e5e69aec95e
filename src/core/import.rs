//! Import of spreadsheet exports (one row per logged action).
//!
//! Recognised headers, matched case-insensitively:
//! `Date`, `Activity Type`, `Context`, `Distance (km)`, `Duration (min)`,
//! `Intensity (1-10)`, `Pain Location`, `Pain Level (0-10)`, `Notes` and
//! `Weight (kg)`, plus the `Kind` column written by `export`. Only `Date`
//! is mandatory; older sheets lack the weight column entirely.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::log_entry::LogEntry;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const COL_DATE: &str = "date";
const COL_KIND: &str = "kind";
const COL_ACTIVITY: &str = "activity type";
const COL_CONTEXT: &str = "context";
const COL_DISTANCE: &str = "distance (km)";
const COL_DURATION: &str = "duration (min)";
const COL_INTENSITY: &str = "intensity (1-10)";
const COL_PAIN_LOCATION: &str = "pain location";
const COL_PAIN_LEVEL: &str = "pain level (0-10)";
const COL_NOTES: &str = "notes";
const COL_WEIGHT: &str = "weight (kg)";

struct Row<'a> {
    line: usize,
    record: &'a csv::StringRecord,
    columns: &'a HashMap<String, usize>,
}

impl Row<'_> {
    /// Trimmed cell text, `None` when the column is missing or the cell empty.
    fn text(&self, col: &str) -> Option<String> {
        self.columns
            .get(col)
            .and_then(|&i| self.record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn error(&self, col: &str, value: &str) -> AppError {
        AppError::Import(format!(
            "line {}: column '{}' has invalid value '{}'",
            self.line, col, value
        ))
    }

    fn real(&self, col: &str) -> AppResult<Option<f64>> {
        match self.text(col) {
            None => Ok(None),
            Some(s) => s
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(Some)
                .ok_or_else(|| self.error(col, &s)),
        }
    }

    /// Whole, non-negative number. Sheets often store `30` as `30.0`.
    fn whole(&self, col: &str) -> AppResult<Option<u32>> {
        match self.real(col)? {
            None => Ok(None),
            Some(v) if v.fract() == 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
            Some(v) => Err(self.error(col, &v.to_string())),
        }
    }

    fn small(&self, col: &str) -> AppResult<Option<u8>> {
        match self.whole(col)? {
            None => Ok(None),
            Some(v) => u8::try_from(v)
                .map(Some)
                .map_err(|_| self.error(col, &v.to_string())),
        }
    }

    fn date(&self) -> AppResult<NaiveDate> {
        let raw = self
            .text(COL_DATE)
            .ok_or_else(|| AppError::Import(format!("line {}: missing date", self.line)))?;

        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S").map(|d| d.date()))
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S").map(|d| d.date()))
            .map_err(|_| self.error(COL_DATE, &raw))
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse a CSV export into validated entries, failing on the first bad row.
    pub fn read_csv<R: Read>(reader: R) -> AppResult<Vec<LogEntry>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns: HashMap<String, usize> = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        if !columns.contains_key(COL_DATE) {
            return Err(AppError::Import("missing required column 'Date'".into()));
        }

        let mut out = Vec::new();
        for (idx, rec) in rdr.records().enumerate() {
            let record = rec?;
            let row = Row {
                line: idx + 2, // header is line 1
                record: &record,
                columns: &columns,
            };
            out.push(Self::entry_from_row(&row)?);
        }
        Ok(out)
    }

    fn entry_from_row(row: &Row) -> AppResult<LogEntry> {
        let date = row.date()?;
        let label = row.text(COL_ACTIVITY);
        let pain_level = row.small(COL_PAIN_LEVEL)?;
        let weight = row.real(COL_WEIGHT)?;

        let explicit = match row.text(COL_KIND) {
            Some(k) => Some(EntryKind::from_label(&k).ok_or_else(|| row.error(COL_KIND, &k))?),
            None => None,
        };

        let kind = match explicit.or_else(|| label.as_deref().map(EntryKind::from_sheet_label)) {
            Some(k) => k,
            None if pain_level.is_some() => EntryKind::PainCheckin,
            None if weight.is_some() => EntryKind::BodyWeight,
            None => {
                return Err(AppError::Import(format!(
                    "line {}: row has no activity type, pain level or weight",
                    row.line
                )));
            }
        };

        let mut entry = LogEntry::new(date, kind);
        entry.source = "import".to_string();
        if kind.is_activity() {
            entry.activity_type = label;
        }
        entry.context = row.text(COL_CONTEXT);
        entry.distance = row.real(COL_DISTANCE)?.unwrap_or(0.0);
        entry.duration = row.whole(COL_DURATION)?.unwrap_or(0);
        entry.intensity = row.small(COL_INTENSITY)?;
        entry.pain_location = row.text(COL_PAIN_LOCATION);
        entry.pain_level = pain_level;
        entry.weight = weight;
        entry.notes = row.text(COL_NOTES).unwrap_or_default();

        entry
            .validate()
            .map_err(|e| AppError::Import(format!("line {}: {}", row.line, e)))?;
        Ok(entry)
    }

    /// Import every row of `path` in a single transaction.
    pub fn import(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let file = std::fs::File::open(path)?;
        let entries = Self::read_csv(file)?;

        let tx = pool.conn.transaction()?;
        for e in &entries {
            insert_entry(&tx, e)?;
        }
        ttlog(
            &tx,
            "import",
            &path.to_string_lossy(),
            &format!("Imported {} entries", entries.len()),
        )?;
        tx.commit()?;

        Ok(entries.len())
    }
}
