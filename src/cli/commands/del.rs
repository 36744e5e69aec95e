use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_entry_by_id;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // fails with EntryNotFound before asking anything
        let entry = load_entry_by_id(&pool.conn, *id)?;

        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({} {})? This action is irreversible.",
                id,
                entry.date_str(),
                entry.describe()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;
        success(format!(
            "Entry #{} deleted ({} {}).",
            removed.id,
            removed.date_str(),
            removed.describe()
        ));
    }

    Ok(())
}
