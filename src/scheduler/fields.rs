//! Fair-play field assignment.
//!
//! # Rule
//! A team should not be put on the same field in more than two
//! consecutive rounds in which it plays.
//!
//! # Algorithm
//! Rounds and matches are processed in order. For each match the first
//! free field `1..=F` is taken on which neither team would extend a
//! streak of two. When no such field exists the first free field is
//! taken anyway and the choice is reported as a `ForcedField`.
//! Each round's matches are then sorted by field.
//!
//! Per-team state (`last_field`, `streak`) lives in the assigner for one
//! schedule build only.

use std::collections::HashMap;

use crate::models::{Pair, Round, TeamId};

/// Longest run of consecutive rounds a team may spend on one field.
pub const MAX_FIELD_STREAK: u32 = 2;

/// A team's recent field history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStreak {
    /// Field of the team's most recent match.
    pub last_field: u32,
    /// Consecutive matches played on `last_field`.
    pub streak: u32,
}

/// A field given to a match although it breaks the streak rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedField {
    pub round_index: usize,
    pub pair: Pair,
    pub field: u32,
}

/// Assigns fields to matches across rounds.
#[derive(Debug, Clone)]
pub struct FieldAssigner {
    fields: u32,
    history: HashMap<TeamId, FieldStreak>,
}

impl FieldAssigner {
    /// Creates an assigner for `fields` fields. Zero is treated as one.
    pub fn new(fields: u32) -> Self {
        Self {
            fields: fields.max(1),
            history: HashMap::new(),
        }
    }

    /// Current streak of a team, if it has played.
    pub fn streak(&self, team: TeamId) -> Option<FieldStreak> {
        self.history.get(&team).copied()
    }

    /// Assigns a field to every match, returning the forced choices.
    pub fn assign(&mut self, rounds: &mut [Round]) -> Vec<ForcedField> {
        let mut forced = Vec::new();

        for (round_index, round) in rounds.iter_mut().enumerate() {
            let mut used = vec![false; self.fields as usize + 1];

            for m in &mut round.matches {
                let fair = (1..=self.fields).find(|&f| !used[f as usize] && self.is_fair(m.pair, f));
                let Some(field) = fair.or_else(|| (1..=self.fields).find(|&f| !used[f as usize]))
                else {
                    continue;
                };
                if fair.is_none() {
                    log::debug!("Round {}: no fair field left, forcing field {}", round_index + 1, field);
                    forced.push(ForcedField {
                        round_index,
                        pair: m.pair,
                        field,
                    });
                }

                used[field as usize] = true;
                m.field = Some(field);
                for team in m.pair.teams() {
                    self.record(team, field);
                }
            }

            round.matches.sort_by_key(|m| m.field);
        }

        forced
    }

    fn is_fair(&self, pair: Pair, field: u32) -> bool {
        pair.teams().iter().all(|t| match self.history.get(t) {
            Some(h) => h.last_field != field || h.streak < MAX_FIELD_STREAK,
            None => true,
        })
    }

    fn record(&mut self, team: TeamId, field: u32) {
        self.history
            .entry(team)
            .and_modify(|h| {
                if h.last_field == field {
                    h.streak += 1;
                } else {
                    *h = FieldStreak {
                        last_field: field,
                        streak: 1,
                    };
                }
            })
            .or_insert(FieldStreak {
                last_field: field,
                streak: 1,
            });
    }
}
