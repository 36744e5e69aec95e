use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EntryFields};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::utils::date;

/// Add a new entry, or patch an existing one with `--edit --id N`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        kind,
        activity,
        context,
        distance,
        duration,
        intensity,
        location,
        pain,
        weight,
        notes,
        id,
        edit,
    } = cmd
    {
        //
        // 1. Parse date (optional, defaults to today when adding)
        //
        let parsed_date = date_arg.as_deref().map(date::parse_date_arg).transpose()?;

        //
        // 2. Collect field values
        //
        let fields = EntryFields {
            activity_type: activity.clone(),
            context: context.clone(),
            distance: *distance,
            duration: *duration,
            intensity: *intensity,
            pain_location: location.clone(),
            pain_level: *pain,
            weight: *weight,
            notes: notes.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 3. Edit mode
        //
        if *edit {
            let id = id.ok_or_else(|| AppError::InvalidValue("--edit needs --id".into()))?;
            if kind.is_some() {
                return Err(AppError::InvalidValue(
                    "the kind of an existing entry cannot be changed".into(),
                ));
            }
            AddLogic::edit(&mut pool, id, parsed_date, &fields)?;
            return Ok(());
        }

        if id.is_some() {
            return Err(AppError::InvalidValue("--id is only valid with --edit".into()));
        }

        //
        // 4. Insert mode
        //
        let d = parsed_date.unwrap_or_else(date::today);
        let k = kind.unwrap_or(EntryKind::Activity);

        AddLogic::insert(&mut pool, d, k, &fields, &cfg.default_activity)?;
    }

    Ok(())
}
