//! Win/loss flag per team entry

use super::expand::SideEntry;
use crate::{GameRecord, HoopsError, Result, Side};
use std::collections::HashMap;

/// A side entry with its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecidedEntry {
    pub entry: SideEntry,
    pub won: bool,
}

/// Flag each entry as a win when its side matches the game's winner.
///
/// Fails if an entry refers to an unknown game, or a game does not end
/// up with exactly one home entry, one away entry and one win.
pub fn assign(entries: Vec<SideEntry>, games: &[GameRecord]) -> Result<Vec<DecidedEntry>> {
    let winners: HashMap<u32, Side> = games.iter().map(|g| (g.game_id, g.winner)).collect();

    let decided = entries
        .into_iter()
        .map(|entry| {
            let winner = winners.get(&entry.game_id).ok_or_else(|| {
                HoopsError::Integrity(format!("game {} has no recorded winner", entry.game_id))
            })?;
            let won = entry.side == *winner;
            Ok(DecidedEntry { entry, won })
        })
        .collect::<Result<Vec<_>>>()?;

    check_one_winner_per_game(&decided)?;
    Ok(decided)
}

#[derive(Default)]
struct GameTally {
    home: u32,
    away: u32,
    wins: u32,
}

fn check_one_winner_per_game(entries: &[DecidedEntry]) -> Result<()> {
    let mut tallies: HashMap<u32, GameTally> = HashMap::new();
    for decided in entries {
        let tally = tallies.entry(decided.entry.game_id).or_default();
        match decided.entry.side {
            Side::Home => tally.home += 1,
            Side::Away => tally.away += 1,
        }
        tally.wins += u32::from(decided.won);
    }

    for (game_id, tally) in &tallies {
        if tally.home != 1 || tally.away != 1 || tally.wins != 1 {
            return Err(HoopsError::Integrity(format!(
                "game {} has {} home, {} away and {} winning entries",
                game_id, tally.home, tally.away, tally.wins
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::expand::expand;
    use chrono::{NaiveDate, NaiveTime};

    fn make_record(game_id: u32, winner: Side) -> GameRecord {
        GameRecord {
            game_id,
            date: NaiveDate::from_ymd_opt(2017, 3, 1).unwrap(),
            start: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            home_team: "Hawks".to_string(),
            away_team: "Bucks".to_string(),
            home_score: 100,
            away_score: 90,
            overtime: false,
            winner,
            point_diff: 10,
        }
    }

    #[test]
    fn test_flags_follow_winner() {
        let games = vec![make_record(1, Side::Home), make_record(2, Side::Away)];
        let decided = assign(expand(&games), &games).unwrap();

        for d in &decided {
            let expected = match d.entry.game_id {
                1 => d.entry.side == Side::Home,
                _ => d.entry.side == Side::Away,
            };
            assert_eq!(d.won, expected);
        }
        assert_eq!(decided.iter().filter(|d| d.won).count(), 2);
    }

    #[test]
    fn test_unknown_game_is_integrity_error() {
        let games = vec![make_record(1, Side::Home)];
        let entries = expand(&games);
        assert!(matches!(assign(entries, &[]), Err(HoopsError::Integrity(_))));
    }

    #[test]
    fn test_duplicated_side_is_integrity_error() {
        let games = vec![make_record(1, Side::Home)];
        let mut entries = expand(&games);
        let extra = entries[1].clone();
        entries.push(extra);
        assert!(matches!(assign(entries, &games), Err(HoopsError::Integrity(_))));
    }
}
