use clap::Subcommand;
use habitloop_core::{AppConfig, CoreError, Database};
use serde_json::json;

use crate::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Print the badge log, oldest first
    Badges,
    /// Print the current streak of fully successful days
    Streak,
    /// Print recent committed days, oldest first
    History {
        /// How many days to show (default from config)
        #[arg(long)]
        days: Option<usize>,
    },
}

pub fn run(action: StatsAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let engine = common::load_engine(&db);

    match action {
        StatsAction::Badges => {
            common::print_json(&engine.badges())?;
        }
        StatsAction::Streak => {
            common::print_json(&json!({"streak": engine.streak()}))?;
        }
        StatsAction::History { days } => {
            let days = days.unwrap_or_else(|| AppConfig::load_or_default().history_days as usize);
            let rows: Vec<_> = engine
                .recent_history(days)
                .into_iter()
                .map(|(date, snap)| {
                    json!({
                        "date": date,
                        "steps": snap.steps,
                        "water_ml": snap.water_ml,
                        "screen_min": snap.screen_min,
                        "sleep_hours": snap.sleep_hours,
                        "points": snap.points,
                    })
                })
                .collect();
            common::print_json(&rows)?;
        }
    }
    Ok(())
}
