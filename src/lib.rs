//! Tournament timetabling for the U-Engine ecosystem.
//!
//! Builds a conflict-free match timetable for a multi-team, multi-field
//! tournament: every eligible pair of teams meets exactly once, no team
//! plays twice in a round, and the number of rounds is kept minimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Roster`, `Pair`, `Match`, `Round`,
//!   `TournamentConfig`, `Schedule`
//! - **`scheduler`**: Pair generation, minimum-round partitioning, special
//!   pair insertion, fair field assignment, round clock, KPIs
//! - **`validation`**: Input checks (field count, durations, duplicate names,
//!   special pair references)
//! - **`export`**: Summary/per-field tables and `.xlsx` workbook output
//!
//! # Pipeline
//!
//! ```text
//! Roster ─► generate_pairs ─► RoundPartitioner ─► insert_special_pair
//!        ─► FieldAssigner ─► RoundClock ─► Schedule
//! ```
//!
//! # References
//!
//! - Vizing (1964), "On an estimate of the chromatic class of a p-graph"
//! - de Werra (1981), "Scheduling in sports"

pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ExportError, RequestError};
