//! Shared helpers for CLI commands.

use serde::Serialize;

use habitloop_core::storage::state;
use habitloop_core::{AppConfig, CoreError, Database, HabitEngine, SystemClock};

/// Load the engine from the store, defaulting missing pieces.
pub fn load_engine(db: &Database) -> HabitEngine<SystemClock> {
    let config = AppConfig::load_or_default();
    state::load(db, SystemClock, &config.default_team)
}

/// Persist the engine. Write failures are reported but never fatal;
/// in-memory state stays authoritative for the session.
pub fn save_engine(db: &Database, engine: &HabitEngine<SystemClock>) {
    if let Err(e) = state::save(db, engine) {
        eprintln!("warning: failed to persist state: {e}");
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CoreError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
