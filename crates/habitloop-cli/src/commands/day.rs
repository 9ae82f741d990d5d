use clap::Subcommand;
use habitloop_core::{CoreError, Database};

use crate::common;

#[derive(Subcommand)]
pub enum DayAction {
    /// Print today's record, goal progress and challenge as JSON
    Status,
    /// Archive today, evaluate goals, update streak/badges, start fresh
    Commit,
}

pub fn run(action: DayAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    match action {
        DayAction::Status => {
            let overview = engine.overview();
            common::save_engine(&db, &engine);
            common::print_json(&overview)?;
        }
        DayAction::Commit => {
            let event = engine.commit_day();
            common::save_engine(&db, &engine);
            common::print_json(&event)?;
        }
    }
    Ok(())
}
