use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_entries, load_entries_between};
use crate::errors::AppResult;
use crate::models::entry_kind::EntryKind;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_pain, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::format_minutes;
use crate::utils::table::Table;

const NOTES_WIDTH: usize = 32;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, kind, now } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let mut entries = if *now {
            let t = date::today();
            load_entries_between(&pool.conn, &t, &t)?
        } else if let Some(p) = period {
            let (start, end) = date::parse_period(p)?;
            load_entries_between(&pool.conn, &start, &end)?
        } else {
            load_all_entries(&pool.conn)?
        };

        if let Some(k) = kind {
            entries.retain(|e| e.kind == *k);
        }

        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        // newest first
        entries.reverse();

        header(format!("{} entries", entries.len()));
        print_entries(&entries, cfg);
    }
    Ok(())
}

fn print_entries(entries: &[LogEntry], cfg: &Config) {
    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(
        vec!["ID", "Date", "Kind", "Details", "Duration", "Pain", "Notes"],
        sep,
    );

    for e in entries {
        let date_cell = if cfg.show_weekday {
            format!("{} {}", date::weekday_str(&e.date), e.date_str())
        } else {
            e.date_str()
        };

        let duration = match e.kind {
            EntryKind::Activity => format_minutes(e.duration),
            _ => "--".to_string(),
        };

        let pain = match e.pain_level {
            Some(p) => format!("{}{}{}", color_for_pain(p), p, RESET),
            None => "--".to_string(),
        };

        table.add_row(vec![
            e.id.to_string(),
            date_cell,
            e.kind.label().to_string(),
            e.describe(),
            colorize_optional(&duration),
            colorize_optional(&pain),
            short_notes(&e.notes),
        ]);
    }

    print!("{}", table.render());
}

/// First wrapped line of `notes`, with an ellipsis when there is more.
fn short_notes(notes: &str) -> String {
    let lines = textwrap::wrap(notes, NOTES_WIDTH);
    match lines.first() {
        None => String::new(),
        Some(first) if lines.len() == 1 => first.to_string(),
        Some(first) => format!("{}…", first),
    }
}
