//! Season standings from the team-game table

use super::records::RecordCounter;
use crate::{round3, StandingRow, TeamGameRow};
use std::collections::HashMap;

/// Final records of every team that reached `season_length` games.
///
/// Records include the game they are taken at. A team's row is its
/// record as of its `season_length`-th game in table order. Ordered by
/// win percentage descending, then team name.
pub fn season_totals(rows: &[TeamGameRow], season_length: u32) -> Vec<StandingRow> {
    let mut counters: HashMap<&str, RecordCounter> = HashMap::new();
    let mut standings = Vec::new();

    for row in rows {
        let counter = counters.entry(row.team.as_str()).or_default();
        counter.update(row.won);
        if counter.games_played == season_length {
            standings.push((
                counter.win_pct(),
                StandingRow {
                    team: row.team.clone(),
                    wins: counter.wins,
                    losses: counter.games_played - counter.wins,
                    pct: 0.0,
                },
            ));
        }
    }

    // order on the unrounded ratio, publish the rounded one
    standings.sort_by(|(pct_a, a), (pct_b, b)| {
        pct_b.total_cmp(pct_a).then_with(|| a.team.cmp(&b.team))
    });

    log::debug!(
        "{} teams completed a {}-game season",
        standings.len(),
        season_length
    );

    standings
        .into_iter()
        .map(|(pct, row)| StandingRow {
            pct: round3(pct),
            ..row
        })
        .collect()
}

/// The leading `n` standings rows
pub fn top(standings: &[StandingRow], n: usize) -> &[StandingRow] {
    &standings[..n.min(standings.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PreGameRecord, Side};
    use chrono::{NaiveDate, NaiveTime};

    fn make_row(game_id: u32, team: &str, won: bool) -> TeamGameRow {
        TeamGameRow {
            game_id,
            date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            start: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            side: Side::Home,
            team: team.to_string(),
            won,
            overtime: false,
            point_diff: 0,
            record: PreGameRecord::default(),
            opponent: String::new(),
            opponent_record: PreGameRecord::default(),
        }
    }

    #[test]
    fn test_only_full_seasons_qualify() {
        let mut rows = Vec::new();
        for g in 0..4 {
            rows.push(make_row(g, "Full", g % 2 == 0));
        }
        for g in 0..3 {
            rows.push(make_row(g, "Short", true));
        }
        let standings = season_totals(&rows, 4);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].team, "Full");
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[0].losses, 2);
        assert_eq!(standings[0].pct, 0.5);
    }

    #[test]
    fn test_sorted_by_pct_then_name() {
        let mut rows = Vec::new();
        for (team, wins) in [("Zeta", 2), ("Alpha", 2), ("Mid", 3), ("Low", 0)] {
            for g in 0..3 {
                rows.push(make_row(g, team, g < wins));
            }
        }
        let standings = season_totals(&rows, 3);
        let order: Vec<_> = standings.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(order, vec!["Mid", "Alpha", "Zeta", "Low"]);
        assert_eq!(standings[1].pct, 0.667);
    }

    #[test]
    fn test_every_team_at_82_games() {
        let teams = ["Celtics", "Nets", "Knicks", "Raptors"];
        let mut rows = Vec::new();
        for g in 0..82u32 {
            for (i, team) in teams.iter().enumerate() {
                rows.push(make_row(g, team, (g as usize + i) % 3 != 0));
            }
        }
        let standings = season_totals(&rows, 82);
        assert_eq!(standings.len(), teams.len());
        for s in &standings {
            assert_eq!(s.wins + s.losses, 82);
        }
    }

    #[test]
    fn test_top_truncates() {
        let rows: Vec<_> = (0..2).map(|g| make_row(g, "Only", true)).collect();
        let standings = season_totals(&rows, 2);
        assert_eq!(top(&standings, 10).len(), 1);
        assert!(top(&standings, 0).is_empty());
    }
}
