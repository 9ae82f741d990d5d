use clap::Subcommand;
use habitloop_core::{CoreError, Database};
use serde_json::json;

use crate::common;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Print today's challenge
    Show,
    /// Mark today's challenge done and claim its points
    Complete,
}

pub fn run(action: ChallengeAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    match action {
        ChallengeAction::Show => {
            engine.rollover_if_due();
            common::save_engine(&db, &engine);
            common::print_json(engine.challenge())?;
        }
        ChallengeAction::Complete => match engine.complete_challenge() {
            Some(event) => {
                common::save_engine(&db, &engine);
                common::print_json(&event)?;
            }
            None => {
                common::save_engine(&db, &engine);
                println!("{}", json!({"type": "noop", "detail": "already done today"}));
            }
        },
    }
    Ok(())
}
