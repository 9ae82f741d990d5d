use clap::Subcommand;
use habitloop_core::{CoreError, Database};
use serde_json::json;

use crate::common;

#[derive(Subcommand)]
pub enum FocusAction {
    /// Start a screen-free session (no-op if one is running)
    Start,
    /// Stop the session, record it and award any bonus
    Stop,
    /// Print the running session's elapsed minutes
    Status,
}

pub fn run(action: FocusAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    match action {
        FocusAction::Start => {
            let result = engine.focus_start();
            // Loading may have rolled the day over; persist either way.
            common::save_engine(&db, &engine);
            match result {
                Some(event) => common::print_json(&event)?,
                None => println!("{}", json!({"type": "noop", "detail": "already running"})),
            }
        }
        FocusAction::Stop => {
            let result = engine.focus_stop();
            common::save_engine(&db, &engine);
            match result {
                Some(event) => common::print_json(&event)?,
                None => println!("{}", json!({"type": "noop", "detail": "not running"})),
            }
        }
        FocusAction::Status => {
            // Rollover may apply before the state is read.
            engine.rollover_if_due();
            common::save_engine(&db, &engine);
            let status = json!({
                "running": engine.timer().is_running(),
                "elapsed_min": engine.focus_elapsed_min(),
            });
            common::print_json(&status)?;
        }
    }
    Ok(())
}
