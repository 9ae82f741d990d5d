use clap::Subcommand;
use habitloop_core::{CoreError, Database};
use serde_json::json;

use crate::common;

#[derive(Subcommand)]
pub enum BoardAction {
    /// Print the leaderboard, highest points first
    Show,
    /// Set the active team (creates its entry if missing)
    Team { name: String },
}

pub fn run(action: BoardAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    match action {
        BoardAction::Show => {
            common::print_json(&engine.leaderboard().standings())?;
        }
        BoardAction::Team { name } => {
            let result = engine.set_team(&name);
            common::save_engine(&db, &engine);
            match result {
                Some(event) => common::print_json(&event)?,
                None => println!("{}", json!({"type": "noop", "detail": "blank team name"})),
            }
        }
    }
    Ok(())
}
