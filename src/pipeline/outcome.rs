//! Game outcome resolution

use crate::{GameRecord, ScheduledGame, Side};

/// Winning side of a game.
///
/// The home team wins only with strictly more points; a level score
/// resolves to `Away`. Basketball games cannot end tied, so this branch
/// only fixes what a malformed row produces.
pub fn winner(home_score: u16, away_score: u16) -> Side {
    if home_score > away_score {
        Side::Home
    } else {
        Side::Away
    }
}

/// Attach winner and absolute point differential to each game
pub fn resolve(games: &[ScheduledGame]) -> Vec<GameRecord> {
    games
        .iter()
        .map(|game| GameRecord {
            game_id: game.game_id,
            date: game.date,
            start: game.start,
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            home_score: game.home_score,
            away_score: game.away_score,
            overtime: game.overtime,
            winner: winner(game.home_score, game.away_score),
            point_diff: game.home_score.abs_diff(game.away_score),
        })
        .collect()
}
