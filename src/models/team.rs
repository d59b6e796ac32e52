//! Team and roster models.
//!
//! A `Team` is raw input as entered by the user. A `Roster` is the
//! normalized view used for one scheduling run: names trimmed, empty
//! names dropped, duplicate names collapsed to their first occurrence,
//! and every surviving team given a dense `TeamId`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A team entered into the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Display name. Identity within one run.
    pub name: String,
    /// Club affiliation. Teams of the same club never meet.
    #[serde(default)]
    pub club: Option<String>,
    /// Display color (e.g. `"#FFB6C1"`). Exported with the roster only.
    #[serde(default)]
    pub color: Option<String>,
}

impl Team {
    /// Creates a team without club or color.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            club: None,
            color: None,
        }
    }

    /// Sets the club affiliation.
    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Club key used for same-club comparison.
    ///
    /// Trimmed, inner whitespace collapsed, lowercased. `None` when the
    /// club is missing or blank.
    pub fn club_key(&self) -> Option<String> {
        let club = self.club.as_deref()?;
        let key = club
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        (!key.is_empty()).then_some(key)
    }
}

/// Dense index of a team inside a `Roster`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub usize);

/// Normalized team list for a single scheduling run.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<Team>,
    club_keys: Vec<Option<String>>,
    index: HashMap<String, TeamId>,
    duplicated: BTreeSet<String>,
}

impl Roster {
    /// Normalizes raw teams into a roster.
    ///
    /// Names are trimmed; teams whose name is empty after trimming are
    /// dropped; a repeated name keeps its first occurrence and is recorded
    /// as duplicated.
    pub fn new(teams: &[Team]) -> Self {
        let mut roster = Self::default();

        for team in teams {
            let name = team.name.trim();
            if name.is_empty() {
                continue;
            }
            if roster.index.contains_key(name) {
                log::debug!("Dropping duplicate team name '{}'", name);
                roster.duplicated.insert(name.to_string());
                continue;
            }

            let normalized = Team {
                name: name.to_string(),
                club: team
                    .club
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
                color: team.color.clone(),
            };
            let id = TeamId(roster.teams.len());
            roster.index.insert(normalized.name.clone(), id);
            roster.club_keys.push(normalized.club_key());
            roster.teams.push(normalized);
        }

        roster
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the roster has no teams.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Normalized teams in input order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Team for an id.
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    /// Team name for an id.
    pub fn name(&self, id: TeamId) -> &str {
        &self.teams[id.0].name
    }

    /// Looks up a team by (trimmed) name.
    pub fn find(&self, name: &str) -> Option<TeamId> {
        self.index.get(name.trim()).copied()
    }

    /// Whether the name appeared more than once in the raw input.
    pub fn is_duplicated(&self, name: &str) -> bool {
        self.duplicated.contains(name.trim())
    }

    /// Names that appeared more than once in the raw input.
    pub fn duplicated_names(&self) -> impl Iterator<Item = &str> {
        self.duplicated.iter().map(String::as_str)
    }

    /// Whether two teams share a non-empty club.
    pub fn same_club(&self, a: TeamId, b: TeamId) -> bool {
        match (&self.club_keys[a.0], &self.club_keys[b.0]) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// All team ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = TeamId> {
        (0..self.teams.len()).map(TeamId)
    }
}
