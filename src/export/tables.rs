//! Export tables derived from a finished schedule.
//!
//! Each table is a grid of strings whose first row is the header. No
//! scheduling logic runs here; everything is read off the `Schedule`.

use crate::models::{Schedule, Team};

/// Row-major string grid, header first.
pub type Table = Vec<Vec<String>>;

/// Summary: one row per round, two cells (team A, team B) per field.
///
/// Header: `Round, Time, Field 1 A, Field 1 B, …, Field F A, Field F B`.
/// Cells of fields without a match that round are empty.
pub fn summary_table(schedule: &Schedule) -> Table {
    let mut header = vec!["Round".to_string(), "Time".to_string()];
    for field in 1..=schedule.fields {
        header.push(format!("Field {field} A"));
        header.push(format!("Field {field} B"));
    }

    let mut rows = vec![header];
    for round in &schedule.rounds {
        let mut row = vec![(round.round_index + 1).to_string(), round.time_label.clone()];
        for field in 1..=schedule.fields {
            match round.match_on_field(field) {
                Some(m) => {
                    row.push(m.team_a.clone());
                    row.push(m.team_b.clone());
                }
                None => row.extend([String::new(), String::new()]),
            }
        }
        rows.push(row);
    }
    rows
}

/// Matches of one field, in round order.
///
/// Header: `Round, Time, Team A, Team B`.
pub fn field_table(schedule: &Schedule, field: u32) -> Table {
    let header = ["Round", "Time", "Team A", "Team B"].map(String::from).to_vec();
    let mut rows = vec![header];
    for (round, m) in schedule.matches_on_field(field) {
        rows.push(vec![
            (round.round_index + 1).to_string(),
            round.time_label.clone(),
            m.team_a.clone(),
            m.team_b.clone(),
        ]);
    }
    rows
}

/// Team roster as entered (non-empty names only).
///
/// Header: `Name, Club, Color`.
pub fn teams_table(teams: &[Team]) -> Table {
    let header = ["Name", "Club", "Color"].map(String::from).to_vec();
    let mut rows = vec![header];
    for team in teams.iter().filter(|t| !t.name.trim().is_empty()) {
        rows.push(vec![
            team.name.trim().to_string(),
            team.club.clone().unwrap_or_default(),
            team.color.clone().unwrap_or_default(),
        ]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TournamentConfig;
    use crate::scheduler::TournamentScheduler;

    fn schedule(fields: u32) -> Schedule {
        let teams: Vec<Team> = ["A", "B", "C", "D"].into_iter().map(Team::new).collect();
        let config = TournamentConfig::new()
            .with_fields(fields)
            .with_match_duration(10)
            .with_break_duration(2);
        TournamentScheduler::new().schedule(&teams, &config)
    }

    #[test]
    fn test_summary_table() {
        let table = summary_table(&schedule(2));
        assert_eq!(
            table[0],
            vec!["Round", "Time", "Field 1 A", "Field 1 B", "Field 2 A", "Field 2 B"]
        );
        assert_eq!(table.len(), 4);
        assert_eq!(table[1], vec!["1", "10:00–10:10", "A", "B", "C", "D"]);
        assert_eq!(table[3], vec!["3", "10:24–10:34", "A", "D", "B", "C"]);
    }

    #[test]
    fn test_summary_table_empty_cells() {
        let table = summary_table(&schedule(3));
        assert_eq!(table[0].len(), 8);
        for row in &table[1..] {
            assert_eq!(row.len(), 8);
            // Four teams fill at most two fields per round.
            assert_eq!(row.iter().filter(|c| c.is_empty()).count(), 2);
        }
    }

    #[test]
    fn test_field_table() {
        let table = field_table(&schedule(2), 2);
        assert_eq!(table[0], vec!["Round", "Time", "Team A", "Team B"]);
        assert_eq!(
            table[1..].to_vec(),
            vec![
                vec!["1", "10:00–10:10", "C", "D"],
                vec!["2", "10:12–10:22", "B", "D"],
                vec!["3", "10:24–10:34", "B", "C"],
            ]
        );
    }

    #[test]
    fn test_field_table_unused_field() {
        let table = field_table(&schedule(2), 5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_zero_fields_export_field_one() {
        let schedule = TournamentScheduler::new().schedule(
            &["A", "B", "C"].into_iter().map(Team::new).collect::<Vec<_>>(),
            &TournamentConfig::new().with_fields(0),
        );
        assert_eq!(schedule.fields, 1);

        let table = summary_table(&schedule);
        assert_eq!(table[0], vec!["Round", "Time", "Field 1 A", "Field 1 B"]);
        assert_eq!(table.len(), 4);
        assert!(table[1..].iter().all(|row| row.len() == 4 && !row[2].is_empty()));
        assert_eq!(field_table(&schedule, 1).len(), 4);
    }

    #[test]
    fn test_teams_table() {
        let teams = vec![
            Team::new(" Lions ").with_club("KS").with_color("#FFB6C1"),
            Team::new(""),
            Team::new("Tigers"),
        ];
        let table = teams_table(&teams);
        assert_eq!(
            table,
            vec![
                vec!["Name", "Club", "Color"],
                vec!["Lions", "KS", "#FFB6C1"],
                vec!["Tigers", "", ""],
            ]
        );
    }
}
