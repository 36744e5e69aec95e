use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::progress::GoalReport;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW, color_for_days_remaining};
use crate::utils::date;
use crate::utils::formatting::{bold, format_km, progress_bar};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { today } = cmd {
        let today = match today {
            Some(s) => date::parse_date_arg(s)?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;

        match GoalLogic::report(&mut pool, today)? {
            Some(report) => print_report(&report),
            None => info("No goal has been set yet. Use `goal --set`."),
        }
    }
    Ok(())
}

fn print_report(r: &GoalReport) {
    let g = &r.goal.goal;

    header(format!(
        "Goal: {} {} by {} (max pain {})",
        g.target_activity,
        format_km(g.target_distance),
        g.target_date,
        g.max_allowed_pain
    ));

    if r.sessions.is_empty() {
        println!("{}No qualifying sessions yet.{}", GREY, RESET);
    } else {
        println!("Qualifying sessions:");
        for s in &r.sessions {
            let marker = if s.window_complete {
                String::new()
            } else {
                format!(" {}(provisional){}", YELLOW, RESET)
            };
            println!("  #{:<5} {}  {}{}", s.entry_id, s.date, format_km(s.distance), marker);
        }
    }

    println!();
    println!("Best      : {}", bold(&format_km(r.best)));
    println!(
        "Progress  : {} {:.0}%",
        progress_bar(r.progress.percent, BAR_WIDTH),
        r.progress.percent * 100.0
    );

    let days = r.progress.days_remaining;
    let days_text = if days < 0 {
        format!("deadline passed {} days ago", -days)
    } else {
        format!("{} days remaining", days)
    };
    println!(
        "Deadline  : {}{}{}",
        color_for_days_remaining(days),
        days_text,
        RESET
    );

    if r.progress.achieved {
        println!("\n{}🏁 Goal achieved!{}", GREEN, RESET);
    }
}
