//! Match and round models used while building a schedule.

use serde::{Deserialize, Serialize};

use super::{Pair, TeamId};

/// A single match between two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The two teams.
    pub pair: Pair,
    /// Field number (1-based). `None` until field assignment runs.
    pub field: Option<u32>,
}

impl Match {
    /// Creates a match with no field assigned.
    pub fn new(pair: Pair) -> Self {
        Self { pair, field: None }
    }
}

/// A time slot in which matches are played concurrently.
///
/// Invariant: no team appears in more than one match of the round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Matches in this round.
    pub matches: Vec<Match>,
}

impl Round {
    /// Creates an empty round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a round from pairs, keeping their order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair>) -> Self {
        Self {
            matches: pairs.into_iter().map(Match::new).collect(),
        }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the round has no matches.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Whether a team already plays in this round.
    pub fn contains_team(&self, team: TeamId) -> bool {
        self.matches.iter().any(|m| m.pair.contains(team))
    }

    /// Whether the pair can join this round under the given field capacity.
    pub fn accepts(&self, pair: Pair, capacity: usize) -> bool {
        self.len() < capacity && pair.teams().iter().all(|&t| !self.contains_team(t))
    }
}
