//! Minimum-round partitioning of pairs.
//!
//! Teams are vertices and eligible pairs are edges. A round is a matching
//! (vertex-disjoint edge set) of at most `F` edges, so the problem is a
//! minimum edge coloring with bounded color classes.
//!
//! # Algorithm
//!
//! 1. Lower bound `R_min = max(⌈|E| / F⌉, Δ)`: a team with `d` matches
//!    needs `d` rounds whatever the field count.
//! 2. Iterative deepening over `R = R_min, R_min + 1, …`: place edges in
//!    the input order into `R` slots by backtracking. Candidate slots are
//!    tried by occupancy ascending; only one empty slot is tried per edge
//!    (empty slots are interchangeable). A placement is pruned when an
//!    endpoint has more unplaced edges than slots it can still enter.
//! 3. The first `R` with a full placement is minimal. `R = |E|` always
//!    succeeds.
//! 4. Every node expansion is counted. When the budget runs out the
//!    search stops and rounds are built greedily instead: repeatedly take
//!    a largest matching of at most `F` edges from the remaining edges
//!    (bounded branch-and-bound, seeded with a first-fit matching that
//!    serves the teams with the most remaining matches first).
//!
//! # Complexity
//! Exact search is exponential in |E| in the worst case, capped by
//! `node_budget`. The greedy fallback is at most |E| rounds of
//! `O(matching_budget + |E|)` each.
//!
//! # Reference
//! Vizing (1964); de Werra (1981), "Scheduling in sports"

use std::cmp::Reverse;

use crate::models::{Pair, PartitionMethod};

use super::pairs::max_degree;

/// Search limits for the round partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionConfig {
    /// Node expansions allowed for the exact search, over all `R` tried.
    pub node_budget: usize,
    /// Node expansions allowed per greedy round when maximizing one matching.
    pub matching_budget: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            node_budget: 250_000,
            matching_budget: 20_000,
        }
    }
}

impl PartitionConfig {
    pub fn with_node_budget(mut self, n: usize) -> Self {
        self.node_budget = n;
        self
    }

    pub fn with_matching_budget(mut self, n: usize) -> Self {
        self.matching_budget = n;
        self
    }
}

/// Rounds produced by the partitioner, tagged with how they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    /// The exact search finished; the round count is minimal.
    Exact {
        rounds: Vec<Vec<Pair>>,
        lower_bound: usize,
    },
    /// The search budget ran out; rounds come from the greedy fallback.
    Greedy {
        rounds: Vec<Vec<Pair>>,
        lower_bound: usize,
    },
}

impl Partition {
    /// Rounds in order.
    pub fn rounds(&self) -> &[Vec<Pair>] {
        match self {
            Partition::Exact { rounds, .. } | Partition::Greedy { rounds, .. } => rounds,
        }
    }

    /// Consumes the partition, returning its rounds.
    pub fn into_rounds(self) -> Vec<Vec<Pair>> {
        match self {
            Partition::Exact { rounds, .. } | Partition::Greedy { rounds, .. } => rounds,
        }
    }

    /// `max(⌈|E| / F⌉, Δ)` for the partitioned pairs.
    pub fn lower_bound(&self) -> usize {
        match self {
            Partition::Exact { lower_bound, .. } | Partition::Greedy { lower_bound, .. } => {
                *lower_bound
            }
        }
    }

    pub fn method(&self) -> PartitionMethod {
        match self {
            Partition::Exact { .. } => PartitionMethod::Exact,
            Partition::Greedy { .. } => PartitionMethod::Greedy,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Partition::Exact { .. })
    }
}

/// Lower bound on the number of rounds: `max(⌈|E| / F⌉, Δ)`.
pub fn lower_bound(pairs: &[Pair], capacity: usize) -> usize {
    let capacity = capacity.max(1);
    let by_fields = pairs.len().div_ceil(capacity);
    by_fields.max(max_degree(pairs, team_count(pairs)))
}

fn team_count(pairs: &[Pair]) -> usize {
    pairs.iter().map(|p| p.second().0 + 1).max().unwrap_or(0)
}

/// Splits pairs into the fewest rounds of at most `capacity` matches.
#[derive(Debug, Clone)]
pub struct RoundPartitioner {
    capacity: usize,
    config: PartitionConfig,
}

impl RoundPartitioner {
    /// Creates a partitioner for `capacity` fields. Zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            config: PartitionConfig::default(),
        }
    }

    /// Sets the search limits.
    pub fn with_config(mut self, config: PartitionConfig) -> Self {
        self.config = config;
        self
    }

    /// Partitions `pairs` (in the given order) into rounds.
    pub fn partition(&self, pairs: &[Pair]) -> Partition {
        if pairs.is_empty() {
            return Partition::Exact {
                rounds: Vec::new(),
                lower_bound: 0,
            };
        }

        let teams = team_count(pairs);
        let lower_bound = lower_bound(pairs, self.capacity);
        let mut search = ExactSearch::new(pairs, self.capacity, teams, self.config.node_budget);

        for round_count in lower_bound..=pairs.len() {
            match search.run(round_count) {
                Ok(Some(mut rounds)) => {
                    rounds.retain(|r| !r.is_empty());
                    log::debug!(
                        "Exact partition: {} rounds (lower bound {}, {} nodes)",
                        rounds.len(),
                        lower_bound,
                        search.nodes
                    );
                    return Partition::Exact {
                        rounds,
                        lower_bound,
                    };
                }
                Ok(None) => {
                    log::debug!("No placement into {} rounds", round_count);
                }
                Err(BudgetExhausted) => {
                    log::warn!(
                        "Round search budget of {} nodes exhausted at {} rounds; using greedy rounds",
                        self.config.node_budget,
                        round_count
                    );
                    break;
                }
            }
        }

        Partition::Greedy {
            rounds: greedy_rounds(pairs, self.capacity, teams, self.config.matching_budget),
            lower_bound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BudgetExhausted;

struct Slot {
    pairs: Vec<usize>,
    busy: Vec<bool>,
}

struct ExactSearch<'a> {
    pairs: &'a [Pair],
    capacity: usize,
    team_count: usize,
    slots: Vec<Slot>,
    /// Unplaced pairs per team.
    remaining: Vec<usize>,
    nodes: usize,
    budget: usize,
}

impl<'a> ExactSearch<'a> {
    fn new(pairs: &'a [Pair], capacity: usize, team_count: usize, budget: usize) -> Self {
        Self {
            pairs,
            capacity,
            team_count,
            slots: Vec::new(),
            remaining: Vec::new(),
            nodes: 0,
            budget,
        }
    }

    /// Tries to place every pair into `round_count` slots.
    fn run(&mut self, round_count: usize) -> Result<Option<Vec<Vec<Pair>>>, BudgetExhausted> {
        self.slots = (0..round_count)
            .map(|_| Slot {
                pairs: Vec::with_capacity(self.capacity),
                busy: vec![false; self.team_count],
            })
            .collect();
        self.remaining = vec![0; self.team_count];
        for pair in self.pairs {
            for team in pair.teams() {
                self.remaining[team.0] += 1;
            }
        }

        if !self.place(0)? {
            return Ok(None);
        }
        Ok(Some(
            self.slots
                .iter()
                .map(|s| s.pairs.iter().map(|&i| self.pairs[i]).collect())
                .collect(),
        ))
    }

    fn place(&mut self, index: usize) -> Result<bool, BudgetExhausted> {
        if index == self.pairs.len() {
            return Ok(true);
        }
        let pair = self.pairs[index];

        for slot in self.candidate_slots(pair) {
            self.nodes += 1;
            if self.nodes > self.budget {
                return Err(BudgetExhausted);
            }

            self.assign(slot, index);
            if self.endpoints_feasible(pair) && self.place(index + 1)? {
                return Ok(true);
            }
            self.unassign(slot, index);
        }

        Ok(false)
    }

    fn candidate_slots(&self, pair: Pair) -> Vec<usize> {
        let [a, b] = pair.teams();
        let mut candidates: Vec<usize> = (0..self.slots.len())
            .filter(|&s| {
                let slot = &self.slots[s];
                slot.pairs.len() < self.capacity && !slot.busy[a.0] && !slot.busy[b.0]
            })
            .collect();
        candidates.sort_by_key(|&s| (self.slots[s].pairs.len(), s));

        let mut empty_seen = false;
        candidates.retain(|&s| {
            if !self.slots[s].pairs.is_empty() {
                return true;
            }
            !std::mem::replace(&mut empty_seen, true)
        });
        candidates
    }

    /// Each endpoint still has at least as many open slots as unplaced pairs.
    fn endpoints_feasible(&self, pair: Pair) -> bool {
        pair.teams().iter().all(|t| {
            let open = self
                .slots
                .iter()
                .filter(|s| !s.busy[t.0] && s.pairs.len() < self.capacity)
                .count();
            self.remaining[t.0] <= open
        })
    }

    fn assign(&mut self, slot: usize, index: usize) {
        let pair = self.pairs[index];
        let s = &mut self.slots[slot];
        s.pairs.push(index);
        for team in pair.teams() {
            s.busy[team.0] = true;
            self.remaining[team.0] -= 1;
        }
    }

    fn unassign(&mut self, slot: usize, index: usize) {
        let pair = self.pairs[index];
        let s = &mut self.slots[slot];
        s.pairs.pop();
        for team in pair.teams() {
            s.busy[team.0] = false;
            self.remaining[team.0] += 1;
        }
    }
}

/// Builds rounds by repeatedly extracting a largest bounded matching.
fn greedy_rounds(
    pairs: &[Pair],
    capacity: usize,
    team_count: usize,
    matching_budget: usize,
) -> Vec<Vec<Pair>> {
    let mut remaining = pairs.to_vec();
    let mut rounds = Vec::new();

    while !remaining.is_empty() {
        let chosen = MatchingSearch::new(&remaining, capacity, team_count, matching_budget).best();
        let mut taken = vec![false; remaining.len()];
        for &i in &chosen {
            taken[i] = true;
        }

        rounds.push(chosen.iter().map(|&i| remaining[i]).collect());
        remaining = remaining
            .into_iter()
            .zip(taken)
            .filter_map(|(pair, t)| (!t).then_some(pair))
            .collect();
    }

    rounds
}

/// Branch-and-bound for one largest matching of at most `capacity` pairs.
struct MatchingSearch<'a> {
    pairs: &'a [Pair],
    capacity: usize,
    /// Remaining matches per team.
    degree: Vec<usize>,
    busy: Vec<bool>,
    current: Vec<usize>,
    best: Vec<usize>,
    /// No matching can be larger than this.
    target: usize,
    nodes: usize,
    budget: usize,
}

impl<'a> MatchingSearch<'a> {
    fn new(pairs: &'a [Pair], capacity: usize, team_count: usize, budget: usize) -> Self {
        let mut degree = vec![0; team_count];
        for pair in pairs {
            for team in pair.teams() {
                degree[team.0] += 1;
            }
        }
        let teams = degree.iter().filter(|&&d| d > 0).count();

        Self {
            pairs,
            capacity,
            degree,
            busy: vec![false; team_count],
            current: Vec::new(),
            best: Vec::new(),
            target: (teams / 2).min(capacity),
            nodes: 0,
            budget,
        }
    }

    /// Indices (ascending) of the best matching found within budget.
    fn best(mut self) -> Vec<usize> {
        self.best = self.first_fit();
        if self.best.len() < self.target && self.extend(0).is_err() {
            log::debug!(
                "Matching search stopped after {} nodes with {} pairs",
                self.nodes,
                self.best.len()
            );
        }
        self.best
    }

    /// Greedy seed that serves the teams with the most remaining matches
    /// first. Those teams bound the round count, so leaving them idle
    /// costs extra rounds later.
    fn first_fit(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.pairs.len()).collect();
        order.sort_by_key(|&i| {
            let [a, b] = self.pairs[i].teams();
            let (da, db) = (self.degree[a.0], self.degree[b.0]);
            (Reverse(da.max(db)), Reverse(da + db), i)
        });

        let mut busy = vec![false; self.busy.len()];
        let mut chosen = Vec::new();
        for i in order {
            if chosen.len() == self.capacity {
                break;
            }
            let [a, b] = self.pairs[i].teams();
            if !busy[a.0] && !busy[b.0] {
                busy[a.0] = true;
                busy[b.0] = true;
                chosen.push(i);
            }
        }
        chosen.sort_unstable();
        chosen
    }

    fn extend(&mut self, index: usize) -> Result<(), BudgetExhausted> {
        if self.current.len() > self.best.len() {
            self.best = self.current.clone();
        }
        if self.best.len() >= self.target
            || index == self.pairs.len()
            || self.current.len() == self.capacity
            || self.current.len() + (self.pairs.len() - index) <= self.best.len()
        {
            return Ok(());
        }

        self.nodes += 1;
        if self.nodes > self.budget {
            return Err(BudgetExhausted);
        }

        let [a, b] = self.pairs[index].teams();
        if !self.busy[a.0] && !self.busy[b.0] {
            self.busy[a.0] = true;
            self.busy[b.0] = true;
            self.current.push(index);
            self.extend(index + 1)?;
            self.current.pop();
            self.busy[a.0] = false;
            self.busy[b.0] = false;
        }

        self.extend(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;
    use std::collections::HashSet;

    fn pair(a: usize, b: usize) -> Pair {
        Pair::new(TeamId(a), TeamId(b)).unwrap()
    }

    /// All pairs of `n` teams in id order (the order `generate_pairs`
    /// yields for single-letter names).
    fn complete(n: usize) -> Vec<Pair> {
        let mut pairs = Vec::new();
        for a in 0..n {
            for b in a + 1..n {
                pairs.push(pair(a, b));
            }
        }
        pairs
    }

    fn assert_valid(pairs: &[Pair], rounds: &[Vec<Pair>], capacity: usize) {
        let mut seen = HashSet::new();
        for round in rounds {
            assert!(!round.is_empty());
            assert!(round.len() <= capacity);
            let mut teams = HashSet::new();
            for p in round {
                for t in p.teams() {
                    assert!(teams.insert(t), "team {:?} twice in a round", t);
                }
                assert!(seen.insert(*p), "pair {:?} scheduled twice", p);
            }
        }
        assert_eq!(seen.len(), pairs.len());
        assert!(pairs.iter().all(|p| seen.contains(p)));
    }

    #[test]
    fn test_lower_bound() {
        // K4, 2 fields: max(⌈6/2⌉, 3) = 3
        assert_eq!(lower_bound(&complete(4), 2), 3);
        // K4, 1 field: max(6, 3) = 6
        assert_eq!(lower_bound(&complete(4), 1), 6);
        // Star: degree dominates
        assert_eq!(lower_bound(&[pair(0, 1), pair(0, 2), pair(0, 3)], 4), 3);
        assert_eq!(lower_bound(&[], 3), 0);
    }

    #[test]
    fn test_four_teams_two_fields() {
        let pairs = complete(4);
        let partition = RoundPartitioner::new(2).partition(&pairs);
        assert!(partition.is_exact());
        assert_eq!(partition.lower_bound(), 3);
        assert_eq!(
            partition.rounds(),
            &[
                vec![pair(0, 1), pair(2, 3)],
                vec![pair(0, 2), pair(1, 3)],
                vec![pair(0, 3), pair(1, 2)],
            ]
        );
    }

    #[test]
    fn test_six_teams_minimal() {
        let pairs = complete(6);
        let partition = RoundPartitioner::new(3).partition(&pairs);
        assert_eq!(partition.method(), PartitionMethod::Exact);
        assert_eq!(partition.rounds().len(), 5);
        assert_valid(&pairs, partition.rounds(), 3);
    }

    #[test]
    fn test_five_teams_two_fields() {
        let pairs = complete(5);
        let partition = RoundPartitioner::new(2).partition(&pairs);
        assert!(partition.is_exact());
        assert_eq!(partition.rounds().len(), 5);
        assert_valid(&pairs, partition.rounds(), 2);
    }

    #[test]
    fn test_single_field_one_match_per_round() {
        let pairs = complete(4);
        let partition = RoundPartitioner::new(1).partition(&pairs);
        assert_eq!(partition.rounds().len(), 6);
        assert_valid(&pairs, partition.rounds(), 1);
    }

    #[test]
    fn test_zero_capacity_treated_as_one() {
        let pairs = complete(3);
        let partition = RoundPartitioner::new(0).partition(&pairs);
        assert_eq!(partition.rounds().len(), 3);
        assert_valid(&pairs, partition.rounds(), 1);
    }

    #[test]
    fn test_empty_input() {
        let partition = RoundPartitioner::new(4).partition(&[]);
        assert!(partition.is_exact());
        assert!(partition.rounds().is_empty());
        assert_eq!(partition.lower_bound(), 0);
    }

    #[test]
    fn test_budget_exhaustion_falls_back_to_greedy() {
        let pairs = complete(4);
        let config = PartitionConfig::default().with_node_budget(0);
        let partition = RoundPartitioner::new(2).with_config(config).partition(&pairs);

        assert_eq!(partition.method(), PartitionMethod::Greedy);
        assert_eq!(partition.lower_bound(), 3);
        assert_eq!(
            partition.clone().into_rounds(),
            vec![
                vec![pair(0, 1), pair(2, 3)],
                vec![pair(0, 2), pair(1, 3)],
                vec![pair(0, 3), pair(1, 2)],
            ]
        );
    }

    #[test]
    fn test_greedy_is_feasible_on_larger_input() {
        let pairs = complete(9);
        let config = PartitionConfig::default()
            .with_node_budget(10)
            .with_matching_budget(50);
        let partition = RoundPartitioner::new(3).with_config(config).partition(&pairs);
        assert!(!partition.is_exact());
        assert!(partition.rounds().len() >= partition.lower_bound());
        assert_valid(&pairs, partition.rounds(), 3);
    }

    #[test]
    fn test_matching_search_beats_first_fit() {
        // First fit takes (1,2) and blocks both (0,1) and (2,3);
        // the largest matching is {(0,1), (2,3)}.
        let pairs = vec![pair(1, 2), pair(0, 1), pair(2, 3)];
        let best = MatchingSearch::new(&pairs, 2, 4, 1_000).best();
        assert_eq!(best, vec![1, 2]);
    }

    #[test]
    fn test_greedy_serves_busiest_team_every_round() {
        // Team 0 has four matches; an index-order seed would open with
        // {(1,2), (3,4)} and leave it idle, costing a fifth round.
        let pairs = vec![
            pair(1, 2),
            pair(3, 4),
            pair(0, 1),
            pair(0, 2),
            pair(0, 3),
            pair(0, 4),
        ];
        let rounds = greedy_rounds(&pairs, 2, 5, 1_000);
        assert_eq!(rounds.len(), lower_bound(&pairs, 2));
        assert!(rounds.iter().all(|r| r.iter().any(|p| p.contains(TeamId(0)))));
        assert_valid(&pairs, &rounds, 2);
    }

    #[test]
    fn test_matching_search_respects_capacity() {
        let pairs = vec![pair(0, 1), pair(2, 3), pair(4, 5)];
        let best = MatchingSearch::new(&pairs, 2, 6, 1_000).best();
        assert_eq!(best.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let pairs = complete(7);
        let a = RoundPartitioner::new(3).partition(&pairs);
        let b = RoundPartitioner::new(3).partition(&pairs);
        assert_eq!(a, b);
    }
}
