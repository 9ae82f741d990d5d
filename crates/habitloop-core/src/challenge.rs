//! Daily challenge rotation.
//!
//! The challenge of the day is a pure function of the calendar date: the
//! date's digits, taken as a number, index into a fixed catalog. Rotation
//! follows the active [`DayState`](crate::day::DayState) date, not the wall
//! clock, so the challenge changes exactly when the day rolls over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog entry: static text plus the points completing it is worth.
#[derive(Debug, Clone, Copy)]
pub struct ChallengeDef {
    pub text: &'static str,
    pub points: u32,
}

/// Fixed challenge catalog, indexed by date digits modulo its length.
pub const CATALOG: [ChallengeDef; 7] = [
    ChallengeDef {
        text: "Collect at least 6,000 steps.",
        points: 3,
    },
    ChallengeDef {
        text: "Drink 8 glasses of water (about 1.6 l).",
        points: 3,
    },
    ChallengeDef {
        text: "Spend 30 minutes screen-free in one stretch.",
        points: 3,
    },
    ChallengeDef {
        text: "Go to bed 30 minutes earlier than usual.",
        points: 3,
    },
    ChallengeDef {
        text: "Do 3 kind gestures for others.",
        points: 3,
    },
    ChallengeDef {
        text: "Do 5 minutes of breathing exercises during the day.",
        points: 3,
    },
    ChallengeDef {
        text: "Spend 15 minutes being active outdoors.",
        points: 3,
    },
];

/// The challenge selected for one specific date.
///
/// `done` is one-way within its date; a rollover replaces the instance
/// with a fresh one, `done = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeInstance {
    pub text: String,
    pub points: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub done: bool,
}

impl ChallengeInstance {
    /// Deterministic selection for `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let idx = index_for(&date.format("%Y%m%d").to_string());
        let def = &CATALOG[idx];
        Self {
            text: def.text.to_string(),
            points: def.points,
            date,
            done: false,
        }
    }
}

/// Catalog index for an arbitrary date string.
///
/// Total over any input: non-digit characters are ignored and a string
/// with no digits at all maps to index 0. Digit accumulation wraps, which
/// keeps the function defined for absurdly long inputs.
pub fn index_for(date_str: &str) -> usize {
    let n = date_str
        .chars()
        .filter(char::is_ascii_digit)
        .fold(0u64, |acc, c| {
            acc.wrapping_mul(10).wrapping_add(c as u64 - '0' as u64)
        });
    (n % CATALOG.len() as u64) as usize
}
