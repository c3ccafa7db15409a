//! Team-game table and standings output

use crate::{Result, StandingRow, TeamGameRow};
use std::io::Write;
use std::path::Path;

/// Output columns, in order
pub const TEAM_GAME_COLUMNS: [&str; 13] = [
    "GameID",
    "Date",
    "Start_EST",
    "H/A",
    "Team",
    "W/L",
    "Overtime",
    "PT_Diff",
    "Wins",
    "GP",
    "PCT",
    "Opponent",
    "Opponent_PCT",
];

fn team_game_record(row: &TeamGameRow) -> [String; 13] {
    [
        row.game_id.to_string(),
        row.date.format("%Y-%m-%d").to_string(),
        row.start.format("%H:%M:%S").to_string(),
        row.side.to_string(),
        row.team.clone(),
        row.win_flag().to_string(),
        u8::from(row.overtime).to_string(),
        row.point_diff.to_string(),
        row.record.wins.to_string(),
        row.record.games_played.to_string(),
        format!("{:.3}", row.record.pct),
        row.opponent.clone(),
        format!("{:.3}", row.opponent_record.pct),
    ]
}

/// Write the team-game table as CSV with a header row
pub fn write_team_games<W: Write>(writer: W, rows: &[TeamGameRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(TEAM_GAME_COLUMNS)?;
    for row in rows {
        csv.write_record(team_game_record(row))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the team-game table to a file, creating parent directories
pub fn write_team_games_file<P: AsRef<Path>>(path: P, rows: &[TeamGameRow]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_team_games(file, rows)?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Standings as CSV
pub fn write_standings<W: Write>(writer: W, standings: &[StandingRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Team", "Wins", "Losses", "PCT"])?;
    for s in standings {
        csv.write_record([
            s.team.clone(),
            s.wins.to_string(),
            s.losses.to_string(),
            format!("{:.3}", s.pct),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
