// src/export/logic.rs

use crate::core::engine::aggregate_daily;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_entries, load_entries_between};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DailyExport, EntryExport};
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries, or per-day aggregates when `daily` is set.
    ///
    /// `range` is `None`, `"all"` or a period expression accepted by
    /// [`parse_period`]. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        daily: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let entries = match range {
            None => load_all_entries(&pool.conn)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_all_entries(&pool.conn)?,
            Some(r) => {
                let (start, end) = parse_period(r)?;
                load_entries_between(&pool.conn, &start, &end)?
            }
        };

        if entries.is_empty() {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let written = if daily {
            let rows: Vec<DailyExport> = aggregate_daily(&entries).iter().map(Into::into).collect();
            write_rows(format, &rows, path)?;
            rows.len()
        } else {
            let rows: Vec<EntryExport> = entries.iter().map(Into::into).collect();
            write_rows(format, &rows, path)?;
            rows.len()
        };

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!(
                "{} {} rows as {}",
                written,
                if daily { "daily" } else { "entry" },
                format.as_str()
            ),
        )?;

        Ok(written)
    }
}

fn write_rows<T: serde::Serialize>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
