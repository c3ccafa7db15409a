//! Split each game into one entry per participating team

use crate::{GameRecord, Side};
use chrono::{NaiveDate, NaiveTime};

/// One team's side of a game, before the result is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideEntry {
    pub game_id: u32,
    pub team: String,
    pub side: Side,
    pub opponent: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub overtime: bool,
    /// Unsigned margin, sign applied once the result is known
    pub point_diff: u16,
}

impl SideEntry {
    fn from_game(game: &GameRecord, side: Side) -> Self {
        SideEntry {
            game_id: game.game_id,
            team: game.team(side).to_string(),
            side,
            opponent: game.team(side.other()).to_string(),
            date: game.date,
            start: game.start,
            overtime: game.overtime,
            point_diff: game.point_diff,
        }
    }
}

/// All away entries followed by all home entries
pub fn expand(games: &[GameRecord]) -> Vec<SideEntry> {
    let away = games.iter().map(|g| SideEntry::from_game(g, Side::Away));
    let home = games.iter().map(|g| SideEntry::from_game(g, Side::Home));
    away.chain(home).collect()
}
