use clap::Subcommand;
use habitloop_core::{CoreError, Database, GoalSet};

use crate::common;

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Print the active goal set
    Show,
    /// Update one or more targets; omitted targets keep their value
    Set {
        #[arg(long)]
        steps: Option<u32>,
        #[arg(long)]
        water_ml: Option<u32>,
        #[arg(long)]
        screen_limit_min: Option<u32>,
        #[arg(long)]
        sleep_hours: Option<f64>,
    },
}

pub fn run(action: GoalsAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    match action {
        GoalsAction::Show => {
            common::print_json(engine.goals())?;
        }
        GoalsAction::Set {
            steps,
            water_ml,
            screen_limit_min,
            sleep_hours,
        } => {
            let current = engine.goals();
            let goals = GoalSet {
                steps: steps.unwrap_or(current.steps),
                water_ml: water_ml.unwrap_or(current.water_ml),
                screen_limit_min: screen_limit_min.unwrap_or(current.screen_limit_min),
                sleep_hours: sleep_hours.unwrap_or(current.sleep_hours),
            };
            let event = engine.set_goals(goals);
            common::save_engine(&db, &engine);
            common::print_json(&event)?;
        }
    }
    Ok(())
}
