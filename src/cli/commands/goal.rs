use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::goal::{Goal, GoalRecord};
use crate::ui::messages::{header, info, success};
use crate::utils::date;
use crate::utils::formatting::format_km;
use crate::utils::table::Table;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal {
        set,
        activity,
        distance,
        max_pain,
        by,
        history,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *set {
            let distance = distance
                .ok_or_else(|| AppError::MalformedGoal("--set needs --distance".into()))?;
            let by = by
                .as_deref()
                .ok_or_else(|| AppError::MalformedGoal("--set needs --by".into()))?;
            let target_date = date::parse_date_arg(by)?;
            let activity = activity.as_deref().unwrap_or(&cfg.default_activity);

            let goal = Goal::new(activity, distance, *max_pain, target_date)?;
            let id = GoalLogic::set(&mut pool, &goal, Utc::now().naive_utc())?;

            success(format!(
                "Goal #{} set: {} {} by {} (max pain {}).",
                id,
                goal.target_activity,
                format_km(goal.target_distance),
                goal.target_date,
                goal.max_allowed_pain
            ));
            return Ok(());
        }

        if *history {
            let goals = GoalLogic::history(&mut pool)?;
            if goals.is_empty() {
                info("No goal has been set yet.");
                return Ok(());
            }
            header("Goal history");
            print_goals(&goals, cfg);
            return Ok(());
        }

        match GoalLogic::active(&mut pool)? {
            Some(g) => {
                header("Active goal");
                print_goals(std::slice::from_ref(&g), cfg);
            }
            None => info("No goal has been set yet. Use `goal --set`."),
        }
    }
    Ok(())
}

fn print_goals(goals: &[GoalRecord], cfg: &Config) {
    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(
        vec!["ID", "Created (UTC)", "Activity", "Distance", "Max pain", "Target date"],
        sep,
    );
    for g in goals {
        table.add_row(vec![
            g.id.to_string(),
            g.created_at.format("%Y-%m-%d %H:%M").to_string(),
            g.goal.target_activity.clone(),
            format_km(g.goal.target_distance),
            g.goal.max_allowed_pain.to_string(),
            g.goal.target_date.to_string(),
        ]);
    }
    print!("{}", table.render());
}
