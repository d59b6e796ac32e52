//! `.xlsx` workbook output.
//!
//! Sheets: `Schedule` (summary), `Field 1` … `Field F`, `Teams`.
//! Header rows are bold; all cells are strings.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::tables::{field_table, summary_table, teams_table, Table};
use crate::error::ExportError;
use crate::models::{Schedule, Team};

/// Writes the schedule workbook to `path`.
pub fn write_workbook(schedule: &Schedule, teams: &[Team], path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(schedule, teams)?;
    workbook.save(path).map_err(|source| ExportError::Save {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Schedule workbook written to {}", path.display());
    Ok(())
}

/// Renders the schedule workbook into memory.
pub fn workbook_bytes(schedule: &Schedule, teams: &[Team]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(schedule, teams)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(schedule: &Schedule, teams: &[Team]) -> Result<Workbook, ExportError> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Schedule")?;
        write_rows(sheet, &summary_table(schedule), &header)?;
    }
    for field in 1..=schedule.fields {
        let sheet = workbook.add_worksheet();
        sheet.set_name(format!("Field {field}"))?;
        write_rows(sheet, &field_table(schedule, field), &header)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Teams")?;
        write_rows(sheet, &teams_table(teams), &header)?;
    }

    Ok(workbook)
}

fn write_rows(worksheet: &mut Worksheet, rows: &Table, header: &Format) -> Result<(), ExportError> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            if row_idx == 0 {
                worksheet.write_string_with_format(row_idx as u32, col_idx as u16, value, header)?;
            } else {
                worksheet.write_string(row_idx as u32, col_idx as u16, value)?;
            }
        }
    }
    worksheet.autofit();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TournamentConfig;
    use crate::scheduler::TournamentScheduler;

    fn sample() -> (Schedule, Vec<Team>) {
        let teams: Vec<Team> = ["A", "B", "C", "D"].into_iter().map(Team::new).collect();
        let schedule =
            TournamentScheduler::new().schedule(&teams, &TournamentConfig::new().with_fields(2));
        (schedule, teams)
    }

    #[test]
    fn test_workbook_bytes_is_zip() {
        let (schedule, teams) = sample();
        let bytes = workbook_bytes(&schedule, &teams).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_schedule_exports() {
        let bytes = workbook_bytes(&Schedule::new(), &[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_workbook_bad_path() {
        let (schedule, teams) = sample();
        let path = Path::new("/nonexistent-dir/u-tournament/schedule.xlsx");
        let err = write_workbook(&schedule, &teams, path).unwrap_err();
        assert!(matches!(err, ExportError::Save { .. }));
        assert!(err.to_string().contains("schedule.xlsx"));
    }
}
