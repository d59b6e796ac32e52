//! Round clock: start/end times and labels per round.
//!
//! Round `i` starts at `start + i · (match + break)` and ends
//! `match` minutes later. Times are plain minutes since midnight;
//! no rounding, no timezone.

use crate::models::{ClockTime, TournamentConfig};

/// Start and end of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    /// `"HH:MM–HH:MM"` (en dash).
    pub fn label(&self) -> String {
        format!("{}–{}", self.start, self.end)
    }
}

/// Maps round indices to time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundClock {
    start: ClockTime,
    match_minutes: u32,
    break_minutes: u32,
}

impl RoundClock {
    pub fn new(start: ClockTime, match_minutes: u32, break_minutes: u32) -> Self {
        Self {
            start,
            match_minutes,
            break_minutes,
        }
    }

    /// Clock for a tournament configuration.
    pub fn from_config(config: &TournamentConfig) -> Self {
        Self::new(config.start_time, config.match_duration, config.break_duration)
    }

    /// Time slot of the round at `round_index` (0-based).
    pub fn slot(&self, round_index: usize) -> TimeSlot {
        let step = u64::from(self.match_minutes) + u64::from(self.break_minutes);
        let offset = u32::try_from(round_index as u64 * step).unwrap_or(u32::MAX);
        let start = self.start.plus_minutes(offset);
        TimeSlot {
            start,
            end: start.plus_minutes(self.match_minutes),
        }
    }

    /// Label of the round at `round_index` (0-based).
    pub fn label(&self, round_index: usize) -> String {
        self.slot(round_index).label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let clock = RoundClock::new(ClockTime::hm(10, 0), 10, 2);
        assert_eq!(clock.label(0), "10:00–10:10");
        assert_eq!(clock.label(1), "10:12–10:22");
        assert_eq!(clock.label(2), "10:24–10:34");
    }

    #[test]
    fn test_zero_break() {
        let clock = RoundClock::new(ClockTime::hm(9, 45), 15, 0);
        assert_eq!(clock.label(1), "10:00–10:15");
    }

    #[test]
    fn test_from_config_defaults() {
        let clock = RoundClock::from_config(&TournamentConfig::default());
        // 10:00 start, 12 min matches, 3 min breaks
        let slot = clock.slot(4);
        assert_eq!(slot.start, ClockTime::hm(11, 0));
        assert_eq!(slot.end, ClockTime::hm(11, 12));
    }

    #[test]
    fn test_past_midnight() {
        let clock = RoundClock::new(ClockTime::hm(23, 30), 20, 10);
        assert_eq!(clock.label(1), "24:00–24:20");
    }
}
