use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::aggregate_daily;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_pain, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{format_km, format_minutes, format_optional_kg, pain_bar};
use crate::utils::table::Table;

/// Activity vs pain for the most recent logged days.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend { days } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_all_entries(&pool.conn)?;
        let daily = aggregate_daily(&entries);

        if daily.is_empty() {
            info("No entries logged yet.");
            return Ok(());
        }

        let n = days.unwrap_or(cfg.trend_days).max(1);
        let recent = &daily[daily.len().saturating_sub(n)..];

        header(format!("Last {} logged days", recent.len()));

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec!["Date", "Entries", "Duration", "Distance", "Weight", "Max pain"],
            sep,
        );

        for d in recent {
            let date_cell = if cfg.show_weekday {
                format!("{} {}", date::weekday_str(&d.date), d.date)
            } else {
                d.date.to_string()
            };

            table.add_row(vec![
                date_cell,
                d.entry_count.to_string(),
                colorize_optional(&format_minutes(d.total_duration)),
                format_km(d.total_distance),
                colorize_optional(&format_optional_kg(d.mean_weight)),
                format!("{}{}{}", color_for_pain(d.max_pain), pain_bar(d.max_pain), RESET),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
