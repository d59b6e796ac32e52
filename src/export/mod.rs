//! Schedule export.
//!
//! `tables` derives the spreadsheet data contract (summary table, one
//! table per field, team roster) from a finished `Schedule`; `xlsx`
//! writes those tables into a workbook.

mod tables;
mod xlsx;

pub use tables::{field_table, summary_table, teams_table, Table};
pub use xlsx::{workbook_bytes, write_workbook};
