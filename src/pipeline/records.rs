//! Running team records
//!
//! Annotates every team entry with the team's and the opponent's record
//! coming into the game.

use super::win_loss::DecidedEntry;
use crate::{round3, HoopsError, PreGameRecord, Result, TeamGameRow};
use std::collections::HashMap;

/// Wins and games played accumulated so far for one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCounter {
    pub wins: u32,
    pub games_played: u32,
}

impl RecordCounter {
    /// Fold in one game result
    pub fn update(&mut self, won: bool) {
        self.games_played += 1;
        self.wins += u32::from(won);
    }

    /// Win ratio, 0 before the first game
    pub fn win_pct(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }

    fn snapshot(&self) -> PreGameRecord {
        PreGameRecord {
            wins: self.wins,
            games_played: self.games_played,
            pct: round3(self.win_pct()),
        }
    }
}

/// Per-team counters, read before each game and updated after it
#[derive(Debug, Default)]
pub struct RunningRecords {
    counters: HashMap<String, RecordCounter>,
}

impl RunningRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `team` before this game, then count the game
    pub fn before_and_record(&mut self, team: &str, won: bool) -> Result<PreGameRecord> {
        let counter = self.counters.entry(team.to_string()).or_default();
        if counter.wins > counter.games_played {
            return Err(HoopsError::Integrity(format!(
                "{} has {} wins in {} games",
                team, counter.wins, counter.games_played
            )));
        }
        let before = counter.snapshot();
        counter.update(won);
        Ok(before)
    }

    /// Counter for a team, if it has appeared
    pub fn get(&self, team: &str) -> Option<&RecordCounter> {
        self.counters.get(team)
    }
}

/// Build the final team-game table.
///
/// Rows are ordered by game id with the winner first. The signed point
/// differential is positive for the winner. Team and opponent records only
/// count games strictly before the current one; the opponent's record is
/// accumulated from the opponent's own results (the complement of this
/// row's flag), not derived from this team's record.
pub fn accumulate(mut entries: Vec<DecidedEntry>) -> Result<Vec<TeamGameRow>> {
    // stable: (game id asc, W/L desc)
    entries.sort_by(|a, b| {
        a.entry
            .game_id
            .cmp(&b.entry.game_id)
            .then(b.won.cmp(&a.won))
    });

    let mut teams = RunningRecords::new();
    let mut opponents = RunningRecords::new();
    let mut rows = Vec::with_capacity(entries.len());

    for DecidedEntry { entry, won } in entries {
        let record = teams.before_and_record(&entry.team, won)?;
        let opponent_record = opponents.before_and_record(&entry.opponent, !won)?;

        let magnitude = i32::from(entry.point_diff);
        rows.push(TeamGameRow {
            game_id: entry.game_id,
            date: entry.date,
            start: entry.start,
            side: entry.side,
            team: entry.team,
            won,
            overtime: entry.overtime,
            point_diff: if won { magnitude } else { -magnitude },
            record,
            opponent: entry.opponent,
            opponent_record,
        });
    }

    log::debug!("Accumulated records for {} team-game rows", rows.len());
    Ok(rows)
}
