//! Per-team cumulative point totals.
//!
//! Team identity is normalized (trimmed, case-insensitive) and the same
//! policy applies to entry auto-creation and to award-target lookup, so a
//! team named "blue" and "Blue " is one entry. The first-seen spelling is
//! kept as the display name.

use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team: String,
    pub points: u32,
}

/// Set of team entries, one per normalized team name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<TeamScore>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TeamScore] {
        &self.entries
    }

    /// Make sure an entry exists for `name`. Returns true when a new entry
    /// was appended. Blank names are ignored.
    pub fn ensure_team(&mut self, name: &str) -> bool {
        let display = name.trim();
        if display.is_empty() {
            return false;
        }
        let key = normalize(name);
        if self.entries.iter().any(|e| normalize(&e.team) == key) {
            return false;
        }
        self.entries.push(TeamScore {
            team: display.to_string(),
            points: 0,
        });
        true
    }

    /// Add points to `name`'s entry, creating it first when missing.
    /// Points are never lost to an unknown team.
    pub fn add_points(&mut self, name: &str, points: u32) {
        self.ensure_team(name);
        let key = normalize(name);
        if let Some(entry) = self.entries.iter_mut().find(|e| normalize(&e.team) == key) {
            entry.points = entry.points.saturating_add(points);
        }
    }

    pub fn get(&self, name: &str) -> Option<&TeamScore> {
        let key = normalize(name);
        self.entries.iter().find(|e| normalize(&e.team) == key)
    }

    /// Entries sorted by points descending. Ties keep insertion order.
    pub fn standings(&self) -> Vec<&TeamScore> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.points.cmp(&a.points));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_team_appends_once() {
        let mut board = Leaderboard::new();
        assert!(board.ensure_team("Blue"));
        assert!(!board.ensure_team("Blue"));
        assert!(!board.ensure_team(" blue "));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].team, "Blue");
        assert_eq!(board.entries()[0].points, 0);
    }

    #[test]
    fn blank_names_are_ignored() {
        let mut board = Leaderboard::new();
        assert!(!board.ensure_team(""));
        assert!(!board.ensure_team("   "));
        assert!(board.entries().is_empty());
    }

    #[test]
    fn awarding_an_unknown_team_creates_it_first() {
        let mut board = Leaderboard::new();
        board.add_points("Green", 7);
        assert_eq!(board.get("green").unwrap().points, 7);
    }

    #[test]
    fn lookup_policy_matches_creation_policy() {
        let mut board = Leaderboard::new();
        board.ensure_team("Blue");
        board.add_points(" BLUE", 4);
        board.add_points("blue ", 2);
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.get("Blue").unwrap().points, 6);
    }

    #[test]
    fn standings_sort_descending_and_stable() {
        let mut board = Leaderboard::new();
        board.add_points("A", 3);
        board.add_points("B", 9);
        board.add_points("C", 3);
        let standings = board.standings();
        let names: Vec<_> = standings.iter().map(|e| e.team.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
