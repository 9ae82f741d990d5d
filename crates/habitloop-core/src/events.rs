use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::goals::GoalSet;

/// Tracked metrics a user can edit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Steps,
    WaterMl,
    ScreenMin,
    SleepHours,
}

/// Every state change in the engine produces an Event.
/// The CLI prints them; a GUI layer would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The calendar date advanced and a fresh day replaced the old one.
    DayRolledOver {
        from: NaiveDate,
        to: NaiveDate,
        at: DateTime<Utc>,
    },
    /// A metric was edited directly. Carries the new total.
    MetricUpdated {
        metric: Metric,
        value: f64,
        at: DateTime<Utc>,
    },
    /// Points were granted to the day and the team.
    PointsAwarded {
        points: u32,
        reason: String,
        team: String,
        at: DateTime<Utc>,
    },
    /// The daily challenge was marked done (once per date).
    ChallengeCompleted {
        text: String,
        points: u32,
        at: DateTime<Utc>,
    },
    /// The explicit end-of-day transaction ran.
    DayCommitted {
        date: NaiveDate,
        all_goals_met: bool,
        streak: u32,
        badges: Vec<String>,
        at: DateTime<Utc>,
    },
    FocusStarted {
        started_at_ms: i64,
        at: DateTime<Utc>,
    },
    FocusStopped {
        minutes: u32,
        bonus: u32,
        at: DateTime<Utc>,
    },
    TeamChanged {
        team: String,
        at: DateTime<Utc>,
    },
    GoalsUpdated {
        goals: GoalSet,
        at: DateTime<Utc>,
    },
}
