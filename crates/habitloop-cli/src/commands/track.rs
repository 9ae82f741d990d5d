use clap::Subcommand;
use habitloop_core::{CoreError, Database};

use crate::common;

#[derive(Subcommand)]
pub enum TrackAction {
    /// Add steps to today's count
    Steps {
        count: u32,
    },
    /// Add milliliters of water
    Water {
        ml: u32,
    },
    /// Add minutes of screen time
    Screen {
        minutes: u32,
    },
    /// Set last night's sleep in hours
    Sleep {
        hours: f64,
    },
}

pub fn run(action: TrackAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let mut engine = common::load_engine(&db);

    let event = match action {
        TrackAction::Steps { count } => engine.add_steps(count),
        TrackAction::Water { ml } => engine.add_water_ml(ml),
        TrackAction::Screen { minutes } => engine.add_screen_min(minutes),
        TrackAction::Sleep { hours } => engine.set_sleep_hours(hours),
    };

    common::save_engine(&db, &engine);
    common::print_json(&event)
}
