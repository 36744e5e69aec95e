use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_entry_by_id, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Optional field values collected from the command line.
#[derive(Debug, Default, Clone)]
pub struct EntryFields {
    pub activity_type: Option<String>,
    pub context: Option<String>,
    pub distance: Option<f64>,
    pub duration: Option<u32>,
    pub intensity: Option<u8>,
    pub pain_location: Option<String>,
    pub pain_level: Option<u8>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl EntryFields {
    /// Copy every provided value onto `entry`.
    fn apply_to(&self, entry: &mut LogEntry) -> AppResult<()> {
        if let Some(a) = &self.activity_type {
            if !entry.kind.is_activity() {
                return Err(AppError::InvalidValue(format!(
                    "only activities have an activity type (entry is a {})",
                    entry.kind.label()
                )));
            }
            entry.activity_type = Some(a.trim().to_string());
        }
        if let Some(c) = &self.context {
            entry.context = Some(c.clone());
        }
        if let Some(d) = self.distance {
            entry.distance = d;
        }
        if let Some(m) = self.duration {
            entry.duration = m;
        }
        if let Some(i) = self.intensity {
            entry.intensity = Some(i);
        }
        if let Some(l) = &self.pain_location {
            entry.pain_location = Some(l.clone());
        }
        if let Some(p) = self.pain_level {
            entry.pain_level = Some(p);
        }
        if let Some(w) = self.weight {
            entry.weight = Some(w);
        }
        if let Some(n) = &self.notes {
            entry.notes = n.clone();
        }
        Ok(())
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Build a validated entry without touching the database.
    pub fn build(
        date: NaiveDate,
        kind: EntryKind,
        fields: &EntryFields,
        default_activity: &str,
    ) -> AppResult<LogEntry> {
        let mut entry = LogEntry::new(date, kind);

        match kind {
            EntryKind::Activity => {
                entry.activity_type = Some(default_activity.to_string());
            }
            EntryKind::PainCheckin => {
                // unset slider means "no pain"
                entry.pain_level = Some(fields.pain_level.unwrap_or(0));
            }
            EntryKind::BodyWeight => {
                if fields.weight.is_none() {
                    return Err(AppError::InvalidValue(
                        "a body weight entry needs --weight".into(),
                    ));
                }
            }
        }

        fields.apply_to(&mut entry)?;
        entry.validate()?;
        Ok(entry)
    }

    /// Insert a new entry and return its id.
    pub fn insert(
        pool: &mut DbPool,
        date: NaiveDate,
        kind: EntryKind,
        fields: &EntryFields,
        default_activity: &str,
    ) -> AppResult<i64> {
        let mut entry = Self::build(date, kind, fields, default_activity)?;
        entry.id = insert_entry(&pool.conn, &entry)?;

        ttlog(
            &pool.conn,
            "add",
            &entry.id.to_string(),
            &format!("{} {}", entry.date_str(), entry.describe()),
        )?;

        success(format!(
            "Saved #{} on {}: {}.",
            entry.id,
            entry.date_str(),
            entry.describe()
        ));
        Ok(entry.id)
    }

    /// Overwrite the provided fields of entry `id`.
    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        date: Option<NaiveDate>,
        fields: &EntryFields,
    ) -> AppResult<LogEntry> {
        let mut entry = load_entry_by_id(&pool.conn, id)?;

        if let Some(d) = date {
            entry.date = d;
        }
        fields.apply_to(&mut entry)?;
        entry.validate()?;

        update_entry(&pool.conn, &entry)?;

        ttlog(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("{} {}", entry.date_str(), entry.describe()),
        )?;

        success(format!("✏️ Entry #{} updated: {}.", id, entry.describe()));
        Ok(entry)
    }
}
