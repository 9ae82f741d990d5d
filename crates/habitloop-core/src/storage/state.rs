//! Per-key persistence of engine state.
//!
//! Each entity is stored under its own key as a JSON blob, so a single
//! malformed value only costs that entity: on load it falls back to its
//! documented default and everything else survives. Saving is
//! best-effort; a write failure leaves the in-memory state authoritative
//! for the rest of the session.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::database::Database;
use crate::challenge::ChallengeInstance;
use crate::clock::Clock;
use crate::day::DayState;
use crate::engine::{EngineParts, HabitEngine};
use crate::error::StoreError;
use crate::focus::FocusTimer;
use crate::goals::GoalSet;
use crate::leaderboard::Leaderboard;

/// kv keys, one per persisted entity.
pub mod keys {
    pub const GOALS: &str = "goals";
    pub const TODAY: &str = "today";
    pub const CHALLENGE: &str = "daily_challenge";
    pub const LEADERBOARD: &str = "leaders";
    pub const HISTORY: &str = "history";
    pub const BADGES: &str = "badges";
    pub const STREAK: &str = "streak";
    pub const FOCUS_TIMER: &str = "focus_timer";
    pub const NOTES: &str = "notes";
}

/// Read one key, falling back to `fallback` when the key is missing,
/// unreadable or holds malformed JSON. Parse failures never propagate.
fn get_or_else<T, F>(db: &Database, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match db.kv_get(key) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|_| fallback()),
        _ => fallback(),
    }
}

fn put<T: Serialize>(db: &Database, key: &str, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string(value)?;
    db.kv_set(key, &json)
}

/// Load the engine from the store, defaulting each missing or malformed
/// entity independently. A fresh day belongs to `default_team`.
pub fn load<C: Clock>(db: &Database, clock: C, default_team: &str) -> HabitEngine<C> {
    let today = clock.today();
    let day: DayState = get_or_else(db, keys::TODAY, || DayState::fresh(today, default_team));
    let challenge_date = day.date;
    let parts = EngineParts {
        goals: get_or_else(db, keys::GOALS, GoalSet::default),
        challenge: get_or_else(db, keys::CHALLENGE, || {
            ChallengeInstance::for_date(challenge_date)
        }),
        leaderboard: get_or_else(db, keys::LEADERBOARD, Leaderboard::new),
        history: get_or_else(db, keys::HISTORY, BTreeMap::new),
        badges: get_or_else(db, keys::BADGES, Vec::new),
        streak: get_or_else(db, keys::STREAK, || 0),
        timer: get_or_else(db, keys::FOCUS_TIMER, FocusTimer::default),
        notes: get_or_else(db, keys::NOTES, String::new),
        day,
    };
    HabitEngine::from_parts(clock, parts)
}

/// Write every entity back to the store. Returns the first failure, but
/// keeps writing the remaining keys either way; callers treat a failure
/// as non-fatal.
pub fn save<C: Clock>(db: &Database, engine: &HabitEngine<C>) -> Result<(), StoreError> {
    let parts = engine.parts();
    let results = [
        put(db, keys::GOALS, &parts.goals),
        put(db, keys::TODAY, &parts.day),
        put(db, keys::CHALLENGE, &parts.challenge),
        put(db, keys::LEADERBOARD, &parts.leaderboard),
        put(db, keys::HISTORY, &parts.history),
        put(db, keys::BADGES, &parts.badges),
        put(db, keys::STREAK, &parts.streak),
        put(db, keys::FOCUS_TIMER, &parts.timer),
        put(db, keys::NOTES, &parts.notes),
    ];
    results.into_iter().find(|r| r.is_err()).unwrap_or(Ok(()))
}
