//! # Habitloop Core Library
//!
//! This library provides the core business logic for Habitloop, a daily
//! habit tracker with goals, gamification points, a team leaderboard and a
//! rotating daily challenge. All operations are available via a standalone
//! CLI binary; any GUI would be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Engine**: an explicit root object owning the day record, goals,
//!   challenge, leaderboard, history, badges and streak -- its methods are
//!   the only mutation surface
//! - **Focus timer**: a wall-clock-based stopwatch; elapsed time is a pure
//!   query, never a ticking side effect
//! - **Storage**: SQLite key-value persistence of JSON blobs plus
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`HabitEngine`]: daily state & scoring engine
//! - [`GoalSet`]: configurable daily targets
//! - [`FocusTimer`]: screen-free session stopwatch
//! - [`Database`]: durable key-value store

pub mod badge;
pub mod challenge;
pub mod clock;
pub mod day;
pub mod engine;
pub mod error;
pub mod events;
pub mod focus;
pub mod goals;
pub mod leaderboard;
pub mod prompts;
pub mod storage;

pub use challenge::ChallengeInstance;
pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{DaySnapshot, DayState, FocusSession};
pub use engine::{DayOverview, EngineParts, HabitEngine, COMMIT_BONUS};
pub use error::{ConfigError, CoreError, Result, StoreError};
pub use events::{Event, Metric};
pub use focus::FocusTimer;
pub use goals::{GoalProgress, GoalSet};
pub use leaderboard::{Leaderboard, TeamScore};
pub use storage::{AppConfig, Database};
