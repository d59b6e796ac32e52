//! Tournament configuration.
//!
//! Immutable for one generation run. The wire format is `camelCase`
//! (`fields`, `matchDuration`, `breakDuration`, `startTime`, `specialPair`).

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// Wall-clock time of day in minutes since midnight.
///
/// Parses and renders `HH:MM`. Rendering does not wrap past midnight:
/// 1450 minutes renders as `24:10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Creates a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Creates a clock time from hours and minutes.
    pub fn hm(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(hours * 60 + minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// This time shifted forward by `minutes`.
    pub fn plus_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes.saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl FromStr for ClockTime {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| {
            RequestError::InvalidClockTime {
                value: s.to_string(),
            }
        })?;
        Ok(Self::hm(time.hour(), time.minute()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Two teams (by name) reserved for the final round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPair {
    pub team_a: String,
    pub team_b: String,
}

impl SpecialPair {
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
        }
    }
}

/// Parameters of one tournament generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentConfig {
    /// Number of fields (matches per round at most).
    pub fields: u32,
    /// Match length (minutes).
    pub match_duration: u32,
    /// Break after each round (minutes).
    pub break_duration: u32,
    /// Start of the first round.
    pub start_time: ClockTime,
    /// Pair forced into the final round.
    pub special_pair: Option<SpecialPair>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            fields: 4,
            match_duration: 12,
            break_duration: 3,
            start_time: ClockTime::hm(10, 0),
            special_pair: None,
        }
    }
}

impl TournamentConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(mut self, fields: u32) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_match_duration(mut self, minutes: u32) -> Self {
        self.match_duration = minutes;
        self
    }

    pub fn with_break_duration(mut self, minutes: u32) -> Self {
        self.break_duration = minutes;
        self
    }

    pub fn with_start_time(mut self, start: ClockTime) -> Self {
        self.start_time = start;
        self
    }

    pub fn with_special_pair(mut self, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        self.special_pair = Some(SpecialPair::new(team_a, team_b));
        self
    }

    /// Field capacity per round. A zero field count is treated as one.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.fields.max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_parse_and_display() {
        let t: ClockTime = "09:05".parse().unwrap();
        assert_eq!(t.minutes(), 545);
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(" 10:00 ".parse::<ClockTime>().unwrap(), ClockTime::hm(10, 0));
    }

    #[test]
    fn test_clock_time_rejects_garbage() {
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_past_midnight_does_not_wrap() {
        let t = ClockTime::hm(23, 50).plus_minutes(20);
        assert_eq!(t.to_string(), "24:10");
    }

    #[test]
    fn test_config_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.fields, 4);
        assert_eq!(config.match_duration, 12);
        assert_eq!(config.break_duration, 3);
        assert_eq!(config.start_time.to_string(), "10:00");
        assert!(config.special_pair.is_none());
    }

    #[test]
    fn test_config_builder_and_capacity() {
        let config = TournamentConfig::new()
            .with_fields(0)
            .with_match_duration(10)
            .with_break_duration(2)
            .with_start_time(ClockTime::hm(8, 30))
            .with_special_pair("A", "B");
        assert_eq!(config.capacity(), 1);
        assert_eq!(config.match_duration, 10);
        assert_eq!(config.special_pair, Some(SpecialPair::new("A", "B")));
    }

    #[test]
    fn test_config_json_wire_format() {
        let json = r#"{
            "fields": 2,
            "matchDuration": 10,
            "breakDuration": 2,
            "startTime": "10:00",
            "specialPair": { "teamA": "A", "teamB": "B" }
        }"#;
        let config: TournamentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.fields, 2);
        assert_eq!(config.start_time, ClockTime::hm(10, 0));
        assert_eq!(config.special_pair.as_ref().unwrap().team_b, "B");

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["startTime"], "10:00");
        assert_eq!(back["matchDuration"], 10);
    }

    #[test]
    fn test_config_json_bad_start_time() {
        let json = r#"{ "startTime": "10h" }"#;
        assert!(serde_json::from_str::<TournamentConfig>(json).is_err());
    }
}
