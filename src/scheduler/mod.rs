//! Tournament scheduling pipeline and KPI evaluation.
//!
//! # Components
//!
//! - `pairs`: eligible pair generation (club exclusion, special pair carve-out)
//! - `partition`: minimum-round partition by budgeted backtracking, greedy fallback
//! - `special`: special pair placement in the final round
//! - `fields`: fair-play field assignment (at most two consecutive rounds per field)
//! - `clock`: round time slots and labels
//! - `tournament`: the orchestrating `TournamentScheduler`
//!
//! # KPI
//!
//! `ScheduleKpi` reports round count against the lower bound, field load,
//! field streaks, and total duration.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

mod clock;
mod fields;
mod kpi;
mod pairs;
mod partition;
mod special;
mod tournament;

pub use clock::{RoundClock, TimeSlot};
pub use fields::{FieldAssigner, FieldStreak, ForcedField, MAX_FIELD_STREAK};
pub use kpi::ScheduleKpi;
pub use pairs::{generate_pairs, max_degree, resolve_special_pair};
pub use partition::{lower_bound, Partition, PartitionConfig, RoundPartitioner};
pub use special::{insert_special_pair, SpecialPlacement};
pub use tournament::{ScheduleRequest, TournamentScheduler};
