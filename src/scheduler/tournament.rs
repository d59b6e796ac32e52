//! Tournament scheduler: the full pipeline from roster to timetable.
//!
//! # Algorithm
//!
//! 1. Normalize the roster (trim, drop empty, collapse duplicate names).
//! 2. Resolve the special pair; generate the remaining eligible pairs.
//! 3. Partition pairs into the fewest rounds (exact search, greedy fallback).
//! 4. Append the special pair to the final round or a new round.
//! 5. Assign fields under the streak rule; record forced choices.
//! 6. Label each round with its time slot.
//!
//! Every call rebuilds the schedule from its inputs; identical inputs
//! give identical schedules.

use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::fields::{FieldAssigner, MAX_FIELD_STREAK};
use super::pairs::{generate_pairs, resolve_special_pair};
use super::partition::{PartitionConfig, RoundPartitioner};
use super::special::insert_special_pair;
use crate::error::RequestError;
use crate::models::{
    Pair, Roster, Round, Schedule, ScheduledMatch, ScheduledRound, Team, TeamId,
    TournamentConfig, Violation,
};

/// Input document for one generation run.
///
/// Flat on the wire: `{ teams, fields, matchDuration, breakDuration,
/// startTime, specialPair }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Teams as entered.
    pub teams: Vec<Team>,
    /// Timing, field count, special pair.
    #[serde(flatten)]
    pub config: TournamentConfig,
}

impl ScheduleRequest {
    /// Creates a request with the default configuration.
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            config: TournamentConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: TournamentConfig) -> Self {
        self.config = config;
        self
    }

    /// Decodes a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builds tournament schedules.
///
/// # Example
///
/// ```
/// use u_tournament::models::{Team, TournamentConfig};
/// use u_tournament::scheduler::TournamentScheduler;
///
/// let teams = vec![Team::new("A"), Team::new("B"), Team::new("C"), Team::new("D")];
/// let config = TournamentConfig::new().with_fields(2);
///
/// let schedule = TournamentScheduler::new().schedule(&teams, &config);
/// assert_eq!(schedule.round_count(), 3);
/// assert_eq!(schedule.match_count(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TournamentScheduler {
    partition: PartitionConfig,
}

impl TournamentScheduler {
    /// Creates a scheduler with default search limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round search limits.
    pub fn with_partition_config(mut self, config: PartitionConfig) -> Self {
        self.partition = config;
        self
    }

    /// Schedules a roster under a configuration.
    pub fn schedule(&self, teams: &[Team], config: &TournamentConfig) -> Schedule {
        let roster = Roster::new(teams);
        let capacity = config.capacity();

        let special = resolve_special_pair(&roster, config.special_pair.as_ref());
        let pairs = generate_pairs(&roster, special);

        let partition = RoundPartitioner::new(capacity)
            .with_config(self.partition.clone())
            .partition(&pairs);
        let method = partition.method();
        let lower_bound = partition.lower_bound();

        let mut rounds: Vec<Round> = partition
            .into_rounds()
            .into_iter()
            .map(Round::from_pairs)
            .collect();
        if let Some(special) = special {
            let placement = insert_special_pair(&mut rounds, special, capacity);
            log::debug!("Special pair placed: {:?}", placement);
        }

        let forced = FieldAssigner::new(config.fields).assign(&mut rounds);
        let mut violations = Vec::new();
        for f in &forced {
            for team in streak_breakers(&rounds, f.round_index, f.pair, f.field) {
                violations.push(Violation::field_streak(roster.name(team), f.round_index, f.field));
            }
        }

        let clock = RoundClock::from_config(config);
        let scheduled: Vec<ScheduledRound> = rounds
            .iter()
            .enumerate()
            .map(|(round_index, round)| {
                let slot = clock.slot(round_index);
                ScheduledRound {
                    round_index,
                    time_label: slot.label(),
                    start: slot.start,
                    end: slot.end,
                    matches: round
                        .matches
                        .iter()
                        .filter_map(|m| {
                            let field = m.field?;
                            let scheduled = ScheduledMatch::new(
                                field,
                                roster.name(m.pair.first()),
                                roster.name(m.pair.second()),
                            );
                            Some(if Some(m.pair) == special {
                                scheduled.as_special()
                            } else {
                                scheduled
                            })
                        })
                        .collect(),
                }
            })
            .collect();

        log::info!(
            "Scheduled {} teams: {} matches in {} rounds on {} fields ({:?}, lower bound {}, {} forced fields)",
            roster.len(),
            pairs.len() + usize::from(special.is_some()),
            scheduled.len(),
            capacity,
            method,
            lower_bound,
            forced.len()
        );

        Schedule {
            rounds: scheduled,
            fields: config.fields.max(1),
            lower_bound,
            method,
            violations,
        }
    }

    /// Schedules a decoded request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Schedule {
        self.schedule(&request.teams, &request.config)
    }
}

/// Teams of a forced match whose streak on `field` now exceeds the limit.
fn streak_breakers(
    rounds: &[Round],
    round_index: usize,
    pair: Pair,
    field: u32,
) -> Vec<TeamId> {
    pair.teams()
        .into_iter()
        .filter(|&team| {
            let streak = rounds[..=round_index]
                .iter()
                .rev()
                .filter_map(|r| r.matches.iter().find(|m| m.pair.contains(team)))
                .take_while(|m| m.field == Some(field))
                .count();
            streak > MAX_FIELD_STREAK as usize
        })
        .collect()
}
