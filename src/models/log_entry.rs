use super::entry_kind::EntryKind;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

pub const MAX_PAIN_LEVEL: u8 = 10;
pub const MAX_INTENSITY: u8 = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub date: NaiveDate,               // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub kind: EntryKind,               // ⇔ entries.kind ('activity' | 'pain' | 'weight')
    pub activity_type: Option<String>, // ⇔ entries.activity_type
    pub context: Option<String>,       // ⇔ entries.context
    pub distance: f64,                 // km, ⇔ entries.distance (REAL, default 0)
    pub duration: u32,                 // minutes, ⇔ entries.duration (INT, default 0)
    pub intensity: Option<u8>,         // RPE 1-10
    pub pain_location: Option<String>, // ⇔ entries.pain_location
    pub pain_level: Option<u8>,        // 0-10
    pub weight: Option<f64>,           // kg, NULL when not recorded
    pub notes: String,

    pub source: String,     // 'cli' | 'import'
    pub created_at: String, // ISO8601
}

impl LogEntry {
    /// Blank entry of the given kind for `date`.
    /// - `id = 0` until the row is inserted
    /// - `source = "cli"`
    /// - `created_at = now() in ISO8601`
    pub fn new(date: NaiveDate, kind: EntryKind) -> Self {
        Self {
            id: 0,
            date,
            kind,
            activity_type: None,
            context: None,
            distance: 0.0,
            duration: 0,
            intensity: None,
            pain_location: None,
            pain_level: None,
            weight: None,
            notes: String::new(),
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn activity(date: NaiveDate, activity_type: &str, distance: f64, duration: u32) -> Self {
        Self {
            activity_type: Some(activity_type.to_string()),
            distance,
            duration,
            ..Self::new(date, EntryKind::Activity)
        }
    }

    pub fn pain(date: NaiveDate, level: u8) -> Self {
        Self {
            pain_level: Some(level),
            ..Self::new(date, EntryKind::PainCheckin)
        }
    }

    pub fn body_weight(date: NaiveDate, kg: f64) -> Self {
        Self {
            weight: Some(kg),
            ..Self::new(date, EntryKind::BodyWeight)
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Check every numeric field against its allowed range.
    pub fn validate(&self) -> AppResult<()> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(AppError::InvalidValue(format!(
                "distance must be a non-negative number of km, got {}",
                self.distance
            )));
        }

        if let Some(p) = self.pain_level
            && p > MAX_PAIN_LEVEL
        {
            return Err(AppError::InvalidValue(format!(
                "pain level must be between 0 and {MAX_PAIN_LEVEL}, got {p}"
            )));
        }

        if let Some(i) = self.intensity
            && !(1..=MAX_INTENSITY).contains(&i)
        {
            return Err(AppError::InvalidValue(format!(
                "intensity must be between 1 and {MAX_INTENSITY}, got {i}"
            )));
        }

        if let Some(w) = self.weight
            && (!w.is_finite() || w < 0.0)
        {
            return Err(AppError::InvalidValue(format!(
                "weight must be a non-negative number of kg, got {w}"
            )));
        }

        if self.kind.is_activity() && self.activity_type.as_deref().is_none_or(str::is_empty) {
            return Err(AppError::InvalidValue(
                "an activity entry needs an activity type".into(),
            ));
        }

        Ok(())
    }

    /// Short one-line description of what was logged.
    pub fn describe(&self) -> String {
        match self.kind {
            EntryKind::Activity => {
                let name = self.activity_type.as_deref().unwrap_or("?");
                if self.distance > 0.0 {
                    format!("{} {:.2} km / {} min", name, self.distance, self.duration)
                } else {
                    format!("{} {} min", name, self.duration)
                }
            }
            EntryKind::PainCheckin => {
                let loc = self.pain_location.as_deref().unwrap_or("General");
                format!("{} pain {}/10", loc, self.pain_level.unwrap_or(0))
            }
            EntryKind::BodyWeight => match self.weight {
                Some(w) => format!("{:.1} kg", w),
                None => "--".to_string(),
            },
        }
    }
}
