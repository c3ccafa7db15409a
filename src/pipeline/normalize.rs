//! Raw result rows to chronologically numbered games
//!
//! Parses dates, start times and scores, orders games by (date, start)
//! and assigns 1-based game ids in that order.

use crate::{ColumnConfig, HoopsError, RawTable, Result, ScheduledGame};
use chrono::{NaiveDate, NaiveTime};

/// Date layouts seen in results exports, tried in order
const DATE_FORMATS: &[&str] = &["%a %b %d %Y", "%b %d %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// 12-hour start time, e.g. `7:30 PM`
const TIME_FORMAT: &str = "%I:%M %p";

/// Layout used when writing games back to the raw schema
const DATE_OUTPUT_FORMAT: &str = "%a %b %d %Y";

/// Column positions resolved once per table
struct ColumnIndices {
    date: usize,
    start: usize,
    away_team: usize,
    away_score: usize,
    home_team: usize,
    home_score: usize,
    overtime: Option<usize>,
}

impl ColumnIndices {
    fn resolve(table: &RawTable, columns: &ColumnConfig) -> Result<Self> {
        Ok(ColumnIndices {
            date: table.require_column(&columns.date)?,
            start: table.require_column(&columns.start)?,
            away_team: table.require_column(&columns.away_team)?,
            away_score: table.require_column(&columns.away_score)?,
            home_team: table.require_column(&columns.home_team)?,
            home_score: table.require_column(&columns.home_score)?,
            // A results file with no overtime games may omit the column
            overtime: table.column_index(&columns.overtime),
        })
    }
}

/// Normalize raw rows into games ordered by (date, start time).
///
/// Rows with equal date and start time keep their input order. The
/// overtime flag is set only where the marker cell equals
/// `columns.overtime_marker`.
pub fn normalize(table: &RawTable, columns: &ColumnConfig) -> Result<Vec<ScheduledGame>> {
    let idx = ColumnIndices::resolve(table, columns)?;

    let mut games = Vec::with_capacity(table.len());
    for (row_index, row) in table.rows.iter().enumerate() {
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");
        let row_number = row_index + 1;

        let date = parse_date(cell(idx.date)).map_err(|message| HoopsError::Parse {
            row: row_number,
            column: columns.date.clone(),
            value: cell(idx.date).to_string(),
            message,
        })?;
        let start = parse_start(cell(idx.start)).map_err(|message| HoopsError::Parse {
            row: row_number,
            column: columns.start.clone(),
            value: cell(idx.start).to_string(),
            message,
        })?;
        let away_score = parse_score(cell(idx.away_score), row_number, &columns.away_score)?;
        let home_score = parse_score(cell(idx.home_score), row_number, &columns.home_score)?;
        let overtime = idx
            .overtime
            .map(|i| cell(i) == columns.overtime_marker)
            .unwrap_or(false);

        games.push(ScheduledGame {
            game_id: 0,
            date,
            start,
            home_team: cell(idx.home_team).to_string(),
            away_team: cell(idx.away_team).to_string(),
            home_score,
            away_score,
            overtime,
        });
    }

    // Vec::sort_by_key is stable, so same-slot games keep input order
    games.sort_by_key(|g| (g.date, g.start));
    for (rank, game) in games.iter_mut().enumerate() {
        game.game_id = rank as u32 + 1;
    }

    log::debug!("Normalized {} games", games.len());
    Ok(games)
}

/// Write games back out in the raw schema (overtime as the marker or
/// empty). Normalizing the result reproduces the same games.
pub fn to_raw_table(games: &[ScheduledGame], columns: &ColumnConfig) -> RawTable {
    let mut table = RawTable::new(vec![
        columns.date.clone(),
        columns.start.clone(),
        columns.away_team.clone(),
        columns.away_score.clone(),
        columns.home_team.clone(),
        columns.home_score.clone(),
        columns.overtime.clone(),
    ]);

    for game in games {
        table.push_row(vec![
            game.date.format(DATE_OUTPUT_FORMAT).to_string(),
            game.start.format(TIME_FORMAT).to_string(),
            game.away_team.clone(),
            game.away_score.to_string(),
            game.home_team.clone(),
            game.home_score.to_string(),
            if game.overtime {
                columns.overtime_marker.clone()
            } else {
                String::new()
            },
        ]);
    }

    table
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| format!("expected one of {:?}", DATE_FORMATS))
}

/// Parse `7:30 PM`, also accepting the compact `7:30p` form
fn parse_start(value: &str) -> std::result::Result<NaiveTime, String> {
    let expanded = match value.chars().last() {
        Some('p') | Some('P') if !value.to_ascii_uppercase().ends_with("PM") => {
            format!("{} PM", &value[..value.len() - 1])
        }
        Some('a') | Some('A') if !value.to_ascii_uppercase().ends_with("AM") => {
            format!("{} AM", &value[..value.len() - 1])
        }
        _ => value.to_string(),
    };

    NaiveTime::parse_from_str(&expanded, TIME_FORMAT)
        .map_err(|e| format!("expected H:MM AM/PM ({})", e))
}

fn parse_score(value: &str, row: usize, column: &str) -> Result<u16> {
    value.parse::<u16>().map_err(|e| HoopsError::Parse {
        row,
        column: column.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table(rows: &[[&str; 7]]) -> RawTable {
        let columns = ColumnConfig::default();
        let mut table = RawTable::new(vec![
            columns.date.clone(),
            columns.start.clone(),
            columns.away_team.clone(),
            columns.away_score.clone(),
            columns.home_team.clone(),
            columns.home_score.clone(),
            "Unnamed: 6".to_string(),
            columns.overtime.clone(),
        ]);
        for r in rows {
            table.push_row(vec![
                r[0].to_string(),
                r[1].to_string(),
                r[2].to_string(),
                r[3].to_string(),
                r[4].to_string(),
                r[5].to_string(),
                "Box Score".to_string(),
                r[6].to_string(),
            ]);
        }
        table
    }

    #[test]
    fn test_orders_by_date_then_time() {
        let table = raw_table(&[
            ["Wed Oct 26 2016", "7:00 PM", "Nets", "117", "Celtics", "122", ""],
            ["Tue Oct 25 2016", "10:30 PM", "Spurs", "129", "Warriors", "100", ""],
            ["Tue Oct 25 2016", "8:00 PM", "Knicks", "88", "Cavaliers", "117", ""],
        ]);
        let games = normalize(&table, &ColumnConfig::default()).unwrap();

        let ids: Vec<_> = games.iter().map(|g| (g.game_id, g.home_team.as_str())).collect();
        assert_eq!(
            ids,
            vec![(1, "Cavaliers"), (2, "Warriors"), (3, "Celtics")]
        );
        assert_eq!(games[0].away_score, 88);
        assert_eq!(games[0].home_score, 117);
        assert_eq!(games[0].start, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }

    #[test]
    fn test_same_slot_keeps_input_order() {
        let table = raw_table(&[
            ["Fri Nov 4 2016", "7:00 PM", "Heat", "90", "Hornets", "91", ""],
            ["Fri Nov 4 2016", "7:00 PM", "Bulls", "95", "Pacers", "101", ""],
        ]);
        let games = normalize(&table, &ColumnConfig::default()).unwrap();
        assert_eq!(games[0].home_team, "Hornets");
        assert_eq!(games[1].home_team, "Pacers");
        assert_eq!(games[1].game_id, 2);
    }

    #[test]
    fn test_overtime_only_for_literal_marker() {
        let table = raw_table(&[
            ["Tue Oct 25 2016", "8:00 PM", "A", "100", "B", "102", "OT"],
            ["Wed Oct 26 2016", "8:00 PM", "A", "100", "B", "102", "2OT"],
            ["Thu Oct 27 2016", "8:00 PM", "A", "100", "B", "102", ""],
        ]);
        let games = normalize(&table, &ColumnConfig::default()).unwrap();
        let flags: Vec<_> = games.iter().map(|g| g.overtime).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn test_missing_overtime_column_means_regulation() {
        let mut table = raw_table(&[["Tue Oct 25 2016", "8:00 PM", "A", "1", "B", "2", "OT"]]);
        table.columns.pop();
        for row in &mut table.rows {
            row.pop();
        }
        let games = normalize(&table, &ColumnConfig::default()).unwrap();
        assert!(!games[0].overtime);
    }

    #[test]
    fn test_compact_time_suffix() {
        let table = raw_table(&[["2016-10-25", "7:30p", "A", "1", "B", "2", ""]]);
        let games = normalize(&table, &ColumnConfig::default()).unwrap();
        assert_eq!(games[0].start, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let mut table = raw_table(&[]);
        table.columns[5] = "Home PTS".to_string();
        match normalize(&table, &ColumnConfig::default()) {
            Err(HoopsError::Schema { column }) => assert_eq!(column, "PTS.1"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_time_is_parse_error() {
        let table = raw_table(&[["Tue Oct 25 2016", "25:99", "A", "1", "B", "2", ""]]);
        match normalize(&table, &ColumnConfig::default()) {
            Err(HoopsError::Parse { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Start (ET)");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let table = raw_table(&[["someday", "8:00 PM", "A", "1", "B", "2", ""]]);
        assert!(matches!(
            normalize(&table, &ColumnConfig::default()),
            Err(HoopsError::Parse { .. })
        ));
    }

    #[test]
    fn test_renormalizing_output_is_stable() {
        let columns = ColumnConfig::default();
        let table = raw_table(&[
            ["Wed Oct 26 2016", "7:00 PM", "Nets", "117", "Celtics", "122", "OT"],
            ["Tue Oct 25 2016", "8:00 PM", "Knicks", "88", "Cavaliers", "117", ""],
        ]);
        let first = normalize(&table, &columns).unwrap();
        let second = normalize(&to_raw_table(&first, &columns), &columns).unwrap();
        assert_eq!(first, second);
    }
}
