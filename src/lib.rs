//! Basketball team records from box scores
//!
//! Turns per-game home/away result rows into a two-rows-per-game table
//! annotated with each team's record coming into the game, plus season
//! standings.

pub mod data;
pub mod pipeline;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which side of a game a team played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tabular input exactly as read from a results file: named columns,
/// string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        RawTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a required column, or a schema error naming it
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| HoopsError::Schema {
            column: name.to_string(),
        })
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A game after normalization: chronological id assigned, scores parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub game_id: u32,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u16,
    pub away_score: u16,
    pub overtime: bool,
}

/// A played game with its outcome resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: u32,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u16,
    pub away_score: u16,
    pub overtime: bool,
    pub winner: Side,
    /// Absolute score margin
    pub point_diff: u16,
}

impl GameRecord {
    /// Team name playing on the given side
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }
}

/// Record as of before a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PreGameRecord {
    pub wins: u32,
    pub games_played: u32,
    /// Rounded to 3 decimals, 0 when no games played
    pub pct: f64,
}

impl PreGameRecord {
    pub fn losses(&self) -> u32 {
        self.games_played - self.wins
    }
}

/// One team's view of one game, annotated with both teams' records
/// coming into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameRow {
    pub game_id: u32,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub side: Side,
    pub team: String,
    pub won: bool,
    pub overtime: bool,
    /// Positive for the winner, negative for the loser
    pub point_diff: i32,
    pub record: PreGameRecord,
    pub opponent: String,
    pub opponent_record: PreGameRecord,
}

impl TeamGameRow {
    /// W/L flag as written in the output table
    pub fn win_flag(&self) -> u8 {
        u8::from(self.won)
    }
}

/// Final record for a team that completed a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub pct: f64,
}

/// Round a ratio to 3 decimals, the precision used for every published
/// percentage
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum HoopsError {
    #[error("Missing expected column: {column}")]
    Schema { column: String },

    #[error("Row {row}, column '{column}': cannot parse '{value}': {message}")]
    Parse {
        row: usize,
        column: String,
        value: String,
        message: String,
    },

    #[error("Record integrity violated: {0}")]
    Integrity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, HoopsError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub columns: ColumnConfig,
    #[serde(default)]
    pub season: SeasonConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub input_dir: String,
    pub pattern: String,
    pub output_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            input_dir: "gamedata".to_string(),
            pattern: "*.csv".to_string(),
            output_path: "result.csv".to_string(),
        }
    }
}

/// Header names of the raw results schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub date: String,
    pub start: String,
    pub away_team: String,
    pub away_score: String,
    pub home_team: String,
    pub home_score: String,
    pub overtime: String,
    /// Cell value marking an overtime game
    pub overtime_marker: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        ColumnConfig {
            date: "Date".to_string(),
            start: "Start (ET)".to_string(),
            away_team: "Visitor/Neutral".to_string(),
            away_score: "PTS".to_string(),
            home_team: "Home/Neutral".to_string(),
            home_score: "PTS.1".to_string(),
            overtime: "Unnamed: 7".to_string(),
            overtime_marker: "OT".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Games in a full regular season
    pub length: u32,
    /// Standings rows shown in reports
    pub top_n: usize,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig {
            length: 82,
            top_n: 10,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HoopsError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| HoopsError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HoopsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
