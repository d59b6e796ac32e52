//! Tournament domain models.
//!
//! Provides the data types for one timetabling run: the raw team input,
//! its normalized roster, the unordered pair key, working rounds, the
//! configuration, and the finished schedule.
//!
//! # Graph View
//!
//! | u-tournament | Graph theory |
//! |--------------|--------------|
//! | Team | Vertex |
//! | Pair | Edge |
//! | Round | Matching (color class) |
//! | Schedule | Edge coloring |

mod config;
mod pair;
mod round;
mod schedule;
mod team;

pub use config::{ClockTime, SpecialPair, TournamentConfig};
pub use pair::Pair;
pub use round::{Match, Round};
pub use schedule::{
    PartitionMethod, Schedule, ScheduledMatch, ScheduledRound, Violation, ViolationType,
};
pub use team::{Roster, Team, TeamId};
