//! The daily state & scoring engine.
//!
//! [`HabitEngine`] is the explicit root object owning every entity: the
//! active day, goals, daily challenge, leaderboard, history, badges,
//! streak and the focus timer. There are no ambient globals; the methods
//! here are the only mutation surface.
//!
//! Every public operation first runs the idempotent rollover check, so the
//! active day always matches the clock's date before anything reads or
//! writes it. Rollover itself touches nothing but the day and the
//! challenge -- streak, leaderboard and history move only on the explicit
//! [`commit_day`](HabitEngine::commit_day) transaction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badge;
use crate::challenge::ChallengeInstance;
use crate::clock::{Clock, SystemClock};
use crate::day::{DaySnapshot, DayState};
use crate::events::{Event, Metric};
use crate::focus::{self, FocusTimer};
use crate::goals::{GoalProgress, GoalSet};
use crate::leaderboard::Leaderboard;

/// Fixed bonus granted when a committed day meets every goal.
pub const COMMIT_BONUS: u32 = 5;

/// Everything the engine persists, as plain data. The storage layer loads
/// and saves each field under its own key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineParts {
    pub goals: GoalSet,
    pub day: DayState,
    pub challenge: ChallengeInstance,
    pub leaderboard: Leaderboard,
    pub history: BTreeMap<NaiveDate, DaySnapshot>,
    pub badges: Vec<String>,
    pub streak: u32,
    pub timer: FocusTimer,
    pub notes: String,
}

/// Read-only view of the current day for display.
#[derive(Debug, Clone, Serialize)]
pub struct DayOverview {
    pub day: DayState,
    pub goals: GoalSet,
    pub progress: GoalProgress,
    pub all_goals_met: bool,
    pub challenge: ChallengeInstance,
    pub streak: u32,
    pub focus_elapsed_min: Option<u32>,
}

/// Root engine object. Single-threaded; every operation is synchronous
/// and atomic with respect to the others.
#[derive(Debug)]
pub struct HabitEngine<C: Clock = SystemClock> {
    clock: C,
    goals: GoalSet,
    day: DayState,
    challenge: ChallengeInstance,
    leaderboard: Leaderboard,
    history: BTreeMap<NaiveDate, DaySnapshot>,
    badges: Vec<String>,
    streak: u32,
    timer: FocusTimer,
    notes: String,
}

impl HabitEngine<SystemClock> {
    /// Fresh engine on the wall clock.
    pub fn new(team: &str) -> Self {
        Self::with_clock(SystemClock, team)
    }
}

impl<C: Clock> HabitEngine<C> {
    /// Fresh engine for `team`, dated from `clock`.
    pub fn with_clock(clock: C, team: &str) -> Self {
        let today = clock.today();
        let day = DayState::fresh(today, team);
        let challenge = ChallengeInstance::for_date(today);
        let mut leaderboard = Leaderboard::new();
        leaderboard.ensure_team(team);
        Self {
            clock,
            goals: GoalSet::default(),
            day,
            challenge,
            leaderboard,
            history: BTreeMap::new(),
            badges: Vec::new(),
            streak: 0,
            timer: FocusTimer::Idle,
            notes: String::new(),
        }
    }

    /// Rebuild an engine from persisted parts. Ensures the loaded team has
    /// a leaderboard entry, so a later award cannot drop points.
    pub fn from_parts(clock: C, parts: EngineParts) -> Self {
        let mut engine = Self {
            clock,
            goals: parts.goals,
            day: parts.day,
            challenge: parts.challenge,
            leaderboard: parts.leaderboard,
            history: parts.history,
            badges: parts.badges,
            streak: parts.streak,
            timer: parts.timer,
            notes: parts.notes,
        };
        let team = engine.day.team.clone();
        engine.leaderboard.ensure_team(&team);
        engine.sync_challenge();
        engine
    }

    /// Clone of the persistable state.
    pub fn parts(&self) -> EngineParts {
        EngineParts {
            goals: self.goals.clone(),
            day: self.day.clone(),
            challenge: self.challenge.clone(),
            leaderboard: self.leaderboard.clone(),
            history: self.history.clone(),
            badges: self.badges.clone(),
            streak: self.streak,
            timer: self.timer,
            notes: self.notes.clone(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn day(&self) -> &DayState {
        &self.day
    }

    pub fn challenge(&self) -> &ChallengeInstance {
        &self.challenge
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn history(&self) -> &BTreeMap<NaiveDate, DaySnapshot> {
        &self.history
    }

    /// The `days` most recent history records, oldest first.
    pub fn recent_history(&self, days: usize) -> Vec<(NaiveDate, DaySnapshot)> {
        let mut recent: Vec<_> = self
            .history
            .iter()
            .rev()
            .take(days)
            .map(|(d, s)| (*d, *s))
            .collect();
        recent.reverse();
        recent
    }

    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Elapsed minutes of the running focus session, for display only.
    pub fn focus_elapsed_min(&self) -> Option<u32> {
        self.timer.elapsed_min(self.clock.now_ms())
    }

    /// Full display snapshot of the current day. Runs the rollover check
    /// first, like every other observation of the date.
    pub fn overview(&mut self) -> DayOverview {
        self.rollover_if_due();
        DayOverview {
            day: self.day.clone(),
            goals: self.goals.clone(),
            progress: self.goals.progress(&self.day),
            all_goals_met: self.goals.all_met(&self.day),
            challenge: self.challenge.clone(),
            streak: self.streak,
            focus_elapsed_min: self.focus_elapsed_min(),
        }
    }

    // ── Rollover ─────────────────────────────────────────────────────

    /// Replace the day when the calendar date moved on. Idempotent and
    /// side-effect-free when the dates already match. Preserves only the
    /// team; never touches streak, leaderboard or history.
    pub fn rollover_if_due(&mut self) -> Option<Event> {
        let today = self.clock.today();
        if self.day.date == today {
            self.sync_challenge();
            return None;
        }
        let from = self.day.date;
        let team = self.day.team.clone();
        self.day = DayState::fresh(today, &team);
        self.sync_challenge();
        Some(Event::DayRolledOver {
            from,
            to: today,
            at: self.clock.now(),
        })
    }

    /// Re-derive the challenge when its date no longer matches the active
    /// day. Keyed off the DayState date, not the clock, so challenge
    /// rotation tracks rollover rather than wall-clock ticks.
    fn sync_challenge(&mut self) {
        if self.challenge.date != self.day.date {
            self.challenge = ChallengeInstance::for_date(self.day.date);
        }
    }

    // ── Metric edits (no points) ─────────────────────────────────────

    pub fn add_steps(&mut self, steps: u32) -> Event {
        self.rollover_if_due();
        self.day.steps = self.day.steps.saturating_add(steps);
        self.metric_event(Metric::Steps, f64::from(self.day.steps))
    }

    pub fn add_water_ml(&mut self, ml: u32) -> Event {
        self.rollover_if_due();
        self.day.water_ml = self.day.water_ml.saturating_add(ml);
        self.metric_event(Metric::WaterMl, f64::from(self.day.water_ml))
    }

    pub fn add_screen_min(&mut self, minutes: u32) -> Event {
        self.rollover_if_due();
        self.day.screen_min = self.day.screen_min.saturating_add(minutes);
        self.metric_event(Metric::ScreenMin, f64::from(self.day.screen_min))
    }

    /// Set tonight's reported sleep. Non-finite or negative input is
    /// coerced to zero instead of rejected.
    pub fn set_sleep_hours(&mut self, hours: f64) -> Event {
        self.rollover_if_due();
        self.day.sleep_hours = if hours.is_finite() && hours > 0.0 {
            hours
        } else {
            0.0
        };
        self.metric_event(Metric::SleepHours, self.day.sleep_hours)
    }

    fn metric_event(&self, metric: Metric, value: f64) -> Event {
        Event::MetricUpdated {
            metric,
            value,
            at: self.clock.now(),
        }
    }

    // ── Scoring ──────────────────────────────────────────────────────

    /// Grant points to the current day and to its team. The reason is
    /// informational only and never persisted.
    pub fn award(&mut self, points: u32, reason: &str) -> Event {
        self.rollover_if_due();
        self.grant(points);
        Event::PointsAwarded {
            points,
            reason: reason.to_string(),
            team: self.day.team.clone(),
            at: self.clock.now(),
        }
    }

    fn grant(&mut self, points: u32) {
        self.day.points = self.day.points.saturating_add(points);
        self.leaderboard.add_points(&self.day.team, points);
    }

    /// Mark the daily challenge done and award its points. One-way within
    /// its date; a second call is a no-op.
    pub fn complete_challenge(&mut self) -> Option<Event> {
        self.rollover_if_due();
        if self.challenge.done {
            return None;
        }
        self.challenge.done = true;
        let points = self.challenge.points;
        let text = self.challenge.text.clone();
        self.grant(points);
        Some(Event::ChallengeCompleted {
            text,
            points,
            at: self.clock.now(),
        })
    }

    /// The end-of-day transaction: archive the day, evaluate goals, update
    /// streak and badges, then replace the day (team preserved).
    ///
    /// This is the engine's only composite operation and it runs
    /// synchronously start to finish. A later commit on the same date
    /// overwrites that date's history record.
    pub fn commit_day(&mut self) -> Event {
        self.rollover_if_due();
        let date = self.day.date;

        // 1. Archive before any scoring, so the snapshot holds exactly
        //    what the user tracked.
        self.history.insert(date, self.day.snapshot());

        // 2. Evaluate.
        let all_goals_met = self.goals.all_met(&self.day);

        // 3. Streak, bonus and badges on success; streak reset on failure.
        let mut earned = Vec::new();
        if all_goals_met {
            self.streak += 1;
            self.grant(COMMIT_BONUS);
            earned = badge::earned(&self.day);
            self.badges.extend(earned.iter().cloned());
        } else {
            self.streak = 0;
        }

        // 4. Forced rollover: fresh day, team preserved.
        let team = self.day.team.clone();
        self.day = DayState::fresh(self.clock.today(), &team);
        self.sync_challenge();

        Event::DayCommitted {
            date,
            all_goals_met,
            streak: self.streak,
            badges: earned,
            at: self.clock.now(),
        }
    }

    // ── Focus timer ──────────────────────────────────────────────────

    /// Start a focus session. No-op when one is already running.
    pub fn focus_start(&mut self) -> Option<Event> {
        self.rollover_if_due();
        let now_ms = self.clock.now_ms();
        if self.timer.start(now_ms) {
            Some(Event::FocusStarted {
                started_at_ms: now_ms,
                at: self.clock.now(),
            })
        } else {
            None
        }
    }

    /// Stop the running session, record it against the current day and
    /// award one point per ten full minutes. No-op when idle.
    pub fn focus_stop(&mut self) -> Option<Event> {
        self.rollover_if_due();
        let session = self.timer.stop(self.clock.now_ms())?;
        self.day.focus_sessions.push(session);
        let bonus = focus::session_bonus(session.minutes);
        if bonus > 0 {
            self.grant(bonus);
        }
        Some(Event::FocusStopped {
            minutes: session.minutes,
            bonus,
            at: self.clock.now(),
        })
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Rename the team. Ensures a leaderboard entry exists before any
    /// award can target the new name. Blank names are ignored.
    pub fn set_team(&mut self, name: &str) -> Option<Event> {
        self.rollover_if_due();
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.day.team = name.to_string();
        self.leaderboard.ensure_team(name);
        Some(Event::TeamChanged {
            team: name.to_string(),
            at: self.clock.now(),
        })
    }

    pub fn set_goals(&mut self, goals: GoalSet) -> Event {
        self.rollover_if_due();
        self.goals = goals.clone();
        Event::GoalsUpdated {
            goals,
            at: self.clock.now(),
        }
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }
}
