//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Round count | Rounds in the timetable |
//! | Lower bound | max(⌈pairs / fields⌉, max team degree) |
//! | Exact | Whether the round partition is proven minimal |
//! | Matches per field | Load of each field |
//! | Max field streak | Longest same-field run of any team |
//! | Forced fields | Matches kept on a field against the streak rule |
//! | Duration | First round start to last round end (min) |

use std::collections::{BTreeMap, HashMap, HashSet};

use super::fields::MAX_FIELD_STREAK;
use crate::models::{PartitionMethod, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleKpi {
    pub round_count: usize,
    pub match_count: usize,
    pub lower_bound: usize,
    /// Whether the generic rounds came from the exact search.
    pub exact: bool,
    /// Matches per field (1-based field → count). Every field is listed.
    pub matches_by_field: BTreeMap<u32, usize>,
    /// Longest run of consecutive played rounds any team spent on one field.
    pub max_field_streak: usize,
    /// Matches placed against the streak rule. A match whose two teams
    /// both broke their streak counts once.
    pub forced_field_count: usize,
    /// Minutes from first round start to last round end.
    pub duration_minutes: u32,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut matches_by_field: BTreeMap<u32, usize> =
            (1..=schedule.fields).map(|f| (f, 0)).collect();
        let mut streaks: HashMap<&str, (u32, usize)> = HashMap::new();
        let mut max_field_streak = 0;

        for round in &schedule.rounds {
            for m in &round.matches {
                *matches_by_field.entry(m.field).or_insert(0) += 1;

                for team in [m.team_a.as_str(), m.team_b.as_str()] {
                    let entry = streaks.entry(team).or_insert((m.field, 0));
                    if entry.0 == m.field {
                        entry.1 += 1;
                    } else {
                        *entry = (m.field, 1);
                    }
                    max_field_streak = max_field_streak.max(entry.1);
                }
            }
        }

        let forced: HashSet<(usize, u32)> = schedule
            .violations
            .iter()
            .filter_map(|v| {
                let round = schedule.rounds.get(v.round_index)?;
                let m = round.matches.iter().find(|m| m.involves(&v.entity_id))?;
                Some((v.round_index, m.field))
            })
            .collect();

        let duration_minutes = match (schedule.rounds.first(), schedule.rounds.last()) {
            (Some(first), Some(last)) => last.end.minutes().saturating_sub(first.start.minutes()),
            _ => 0,
        };

        Self {
            round_count: schedule.round_count(),
            match_count: schedule.match_count(),
            lower_bound: schedule.lower_bound,
            exact: schedule.method == PartitionMethod::Exact,
            matches_by_field,
            max_field_streak,
            forced_field_count: forced.len(),
            duration_minutes,
        }
    }

    /// Rounds beyond the lower bound.
    pub fn excess_rounds(&self) -> usize {
        self.round_count.saturating_sub(self.lower_bound)
    }

    /// Whether every team stayed within the field streak limit.
    pub fn is_fair(&self) -> bool {
        self.max_field_streak <= MAX_FIELD_STREAK as usize
    }
}
