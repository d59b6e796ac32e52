//! Eligible pair generation.
//!
//! # Rules
//! A pair `(a, b)` is eligible iff `a ≠ b`, the teams do not share a
//! non-empty club, and it is not the reserved special pair.
//!
//! # Ordering
//! Pairs are sorted by the byte-wise concatenation of the two names
//! (roster order), with the id pair as tie-breaker. The order feeds the
//! partition search, so it fixes the output for identical input.
//!
//! # Complexity
//! O(n²) pair checks plus O(p log p) sorting for n teams, p pairs.

use crate::models::{Pair, Roster, SpecialPair};

/// Generates the eligible pairs of a roster in deterministic order.
pub fn generate_pairs(roster: &Roster, special: Option<Pair>) -> Vec<Pair> {
    let ids: Vec<_> = roster.ids().collect();
    let mut keyed: Vec<(String, Pair)> = Vec::new();

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            if roster.same_club(a, b) {
                continue;
            }
            let Some(pair) = Pair::new(a, b) else {
                continue;
            };
            if Some(pair) == special {
                continue;
            }
            let key = format!("{}{}", roster.name(pair.first()), roster.name(pair.second()));
            keyed.push((key, pair));
        }
    }

    keyed.sort();
    keyed.into_iter().map(|(_, pair)| pair).collect()
}

/// Resolves the configured special pair against the roster.
///
/// Returns `None` (no special pair) when either name is unknown, names
/// a team that appears more than once in the input, or both names are
/// the same team.
pub fn resolve_special_pair(roster: &Roster, special: Option<&SpecialPair>) -> Option<Pair> {
    let special = special?;
    let a = special.team_a.trim();
    let b = special.team_b.trim();

    if roster.is_duplicated(a) || roster.is_duplicated(b) {
        log::debug!("Special pair '{}' vs '{}' ignored: ambiguous team name", a, b);
        return None;
    }
    let (Some(id_a), Some(id_b)) = (roster.find(a), roster.find(b)) else {
        log::debug!("Special pair '{}' vs '{}' ignored: unknown team", a, b);
        return None;
    };
    let pair = Pair::new(id_a, id_b);
    if pair.is_none() {
        log::debug!("Special pair '{}' vs '{}' ignored: same team", a, b);
    }
    pair
}

/// Highest number of pairs any single team is part of.
pub fn max_degree(pairs: &[Pair], team_count: usize) -> usize {
    let mut degree = vec![0usize; team_count];
    for pair in pairs {
        for team in pair.teams() {
            degree[team.0] += 1;
        }
    }
    degree.into_iter().max().unwrap_or(0)
}
