//! Schedule (output) model.
//!
//! The finished timetable handed to rendering and export: rounds with
//! time labels, matches with fields and team names, and any fairness
//! violations the field assignment had to accept.
//!
//! Wire shape: `{ schedule: [{ roundIndex, timeLabel, matches: [{ field,
//! teamA, teamB }] }] }`.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// A complete tournament timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Rounds in play order.
    #[serde(rename = "schedule")]
    pub rounds: Vec<ScheduledRound>,
    /// Field count the schedule was built for (at least one).
    pub fields: u32,
    /// Lower bound on the round count of the generic (non-special) pairs.
    pub lower_bound: usize,
    /// How the generic pairs were partitioned into rounds.
    pub method: PartitionMethod,
    /// Fairness rule breaches accepted during field assignment.
    pub violations: Vec<Violation>,
}

/// One round of the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledRound {
    /// 0-based round index.
    pub round_index: usize,
    /// `"HH:MM–HH:MM"`.
    pub time_label: String,
    /// Round start.
    pub start: ClockTime,
    /// Round end (start + match duration).
    pub end: ClockTime,
    /// Matches sorted by field.
    pub matches: Vec<ScheduledMatch>,
}

/// One match of the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMatch {
    /// Field number (1-based).
    pub field: u32,
    pub team_a: String,
    pub team_b: String,
    /// Whether this is the reserved special pair.
    #[serde(default)]
    pub special: bool,
}

/// How the round partition was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionMethod {
    /// Backtracking search proved the round count minimal.
    #[default]
    Exact,
    /// Search budget ran out; rounds were built greedily.
    Greedy,
}

/// A fairness rule breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Team name.
    pub entity_id: String,
    /// Round where the breach happened.
    pub round_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A team was kept on the same field for a third consecutive round
    /// because no other field was free.
    FieldStreak,
}

impl ScheduledMatch {
    pub fn new(field: u32, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            field,
            team_a: team_a.into(),
            team_b: team_b.into(),
            special: false,
        }
    }

    /// Marks the match as the special pair.
    pub fn as_special(mut self) -> Self {
        self.special = true;
        self
    }

    /// Whether the team plays in this match.
    pub fn involves(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// Whether this match is between the two teams (either order).
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team_a == a && self.team_b == b) || (self.team_a == b && self.team_b == a)
    }
}

impl ScheduledRound {
    /// Match on the given field, if any.
    pub fn match_on_field(&self, field: u32) -> Option<&ScheduledMatch> {
        self.matches.iter().find(|m| m.field == field)
    }
}

impl Violation {
    /// Creates a field streak violation.
    pub fn field_streak(team: impl Into<String>, round_index: usize, field: u32) -> Self {
        let team = team.into();
        Self {
            violation_type: ViolationType::FieldStreak,
            message: format!(
                "'{team}' kept on field {field} in round {} with no other field free",
                round_index + 1
            ),
            entity_id: team,
            round_index,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no match is scheduled.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Number of matches across all rounds.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// Whether field assignment stayed within the fairness rule.
    pub fn is_fair(&self) -> bool {
        self.violations.is_empty()
    }

    /// Matches played on a field, in round order.
    pub fn matches_on_field(&self, field: u32) -> Vec<(&ScheduledRound, &ScheduledMatch)> {
        self.rounds
            .iter()
            .filter_map(|r| r.match_on_field(field).map(|m| (r, m)))
            .collect()
    }

    /// Matches a team plays, in round order.
    pub fn matches_for_team(&self, team: &str) -> Vec<(&ScheduledRound, &ScheduledMatch)> {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter().map(move |m| (r, m)))
            .filter(|(_, m)| m.involves(team))
            .collect()
    }

    /// Round index and match of the meeting between two teams.
    pub fn find_match(&self, a: &str, b: &str) -> Option<(usize, &ScheduledMatch)> {
        self.rounds.iter().find_map(|r| {
            r.matches
                .iter()
                .find(|m| m.is_between(a, b))
                .map(|m| (r.round_index, m))
        })
    }

    /// The special match, if one was scheduled.
    pub fn special_match(&self) -> Option<(usize, &ScheduledMatch)> {
        self.rounds.iter().find_map(|r| {
            r.matches
                .iter()
                .find(|m| m.special)
                .map(|m| (r.round_index, m))
        })
    }
}
