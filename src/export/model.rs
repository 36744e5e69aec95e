// src/export/model.rs

use crate::models::daily_aggregate::DailyAggregate;
use crate::models::log_entry::LogEntry;
use serde::Serialize;

/// Flat entry row, column names match the spreadsheet layout.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Kind")]
    pub kind: String,
    #[serde(rename = "Activity Type")]
    pub activity_type: String,
    #[serde(rename = "Context")]
    pub context: String,
    #[serde(rename = "Distance (km)")]
    pub distance: f64,
    #[serde(rename = "Duration (min)")]
    pub duration: u32,
    #[serde(rename = "Intensity (1-10)")]
    pub intensity: Option<u8>,
    #[serde(rename = "Pain Location")]
    pub pain_location: String,
    #[serde(rename = "Pain Level (0-10)")]
    pub pain_level: Option<u8>,
    #[serde(rename = "Weight (kg)")]
    pub weight: Option<f64>,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&LogEntry> for EntryExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            kind: e.kind.to_db_str().to_string(),
            activity_type: e.activity_type.clone().unwrap_or_default(),
            context: e.context.clone().unwrap_or_default(),
            distance: e.distance,
            duration: e.duration,
            intensity: e.intensity,
            pain_location: e.pain_location.clone().unwrap_or_default(),
            pain_level: e.pain_level,
            weight: e.weight,
            notes: e.notes.clone(),
        }
    }
}

/// One row per day.
#[derive(Serialize, Clone, Debug)]
pub struct DailyExport {
    pub date: String,
    pub total_duration: u32,
    pub total_distance: f64,
    pub max_pain: u8,
    pub mean_weight: Option<f64>,
    pub entries: usize,
}

impl From<&DailyAggregate> for DailyExport {
    fn from(d: &DailyAggregate) -> Self {
        Self {
            date: d.date.format("%Y-%m-%d").to_string(),
            total_duration: d.total_duration,
            total_distance: d.total_distance,
            max_pain: d.max_pain,
            mean_weight: d.mean_weight,
            entries: d.entry_count,
        }
    }
}
