//! Record derivation pipeline
//!
//! normalize → outcome → expand → win/loss → records → standings. Every
//! stage takes the previous stage's output by reference or value and
//! returns a new collection; nothing here touches the filesystem.

pub mod expand;
pub mod normalize;
pub mod outcome;
pub mod records;
pub mod standings;
pub mod win_loss;

pub use records::RecordCounter;
pub use standings::season_totals;

use crate::{Config, GameRecord, RawTable, Result, StandingRow, TeamGameRow};

/// Everything derived from one batch of results
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub games: Vec<GameRecord>,
    pub team_games: Vec<TeamGameRow>,
    pub standings: Vec<StandingRow>,
}

/// Run the full pipeline over a raw results table
pub fn run(table: &RawTable, config: &Config) -> Result<PipelineOutput> {
    let scheduled = normalize::normalize(table, &config.columns)?;
    let games = outcome::resolve(&scheduled);
    let entries = expand::expand(&games);
    let decided = win_loss::assign(entries, &games)?;
    let team_games = records::accumulate(decided)?;
    let standings = standings::season_totals(&team_games, config.season.length);

    log::info!(
        "Derived {} team-game rows from {} games ({} full-season standings)",
        team_games.len(),
        games.len(),
        standings.len()
    );

    Ok(PipelineOutput {
        games,
        team_games,
        standings,
    })
}
