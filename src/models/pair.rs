//! Unordered team pair.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// An unordered pair of distinct teams.
///
/// Stored canonically as `(min id, max id)`, so `Pair::new(a, b)` and
/// `Pair::new(b, a)` are equal and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    low: TeamId,
    high: TeamId,
}

impl Pair {
    /// Creates a pair. Returns `None` when both ids are the same team.
    pub fn new(a: TeamId, b: TeamId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Team with the lower roster position.
    #[inline]
    pub fn first(&self) -> TeamId {
        self.low
    }

    /// Team with the higher roster position.
    #[inline]
    pub fn second(&self) -> TeamId {
        self.high
    }

    /// Whether the team is part of this pair.
    #[inline]
    pub fn contains(&self, team: TeamId) -> bool {
        self.low == team || self.high == team
    }

    /// Both teams, lower id first.
    #[inline]
    pub fn teams(&self) -> [TeamId; 2] {
        [self.low, self.high]
    }
}
