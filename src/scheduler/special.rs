//! Special pair placement.
//!
//! The reserved pair is always played last: it joins the final round when
//! that round has a free field and neither team already plays in it,
//! otherwise it gets a new trailing round of its own. Club exclusion does
//! not apply to it.

use crate::models::{Match, Pair, Round};

/// Where the special pair ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialPlacement {
    /// Added to the existing final round.
    JoinedFinalRound,
    /// Placed alone in a new final round.
    NewRound,
}

/// Appends the special pair to the schedule's final round or a new one.
pub fn insert_special_pair(rounds: &mut Vec<Round>, special: Pair, capacity: usize) -> SpecialPlacement {
    if let Some(last) = rounds.last_mut() {
        if last.accepts(special, capacity.max(1)) {
            last.matches.push(Match::new(special));
            return SpecialPlacement::JoinedFinalRound;
        }
    }
    rounds.push(Round::from_pairs([special]));
    SpecialPlacement::NewRound
}
