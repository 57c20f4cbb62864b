//! Session score tables and the cross-session leaderboard.
//!
//! Both aggregations recompute from the stored per-game and per-penalty
//! values on every call; nothing is cached.

use std::collections::HashMap;

use crate::dto::stats::{LeaderboardEntry, SessionScoreEntry};
use crate::models::{Game, Penalty, Session};

/// Per-team score table for one session, sorted descending by total.
///
/// Only teams in `team_ids` are counted; a stored game or penalty that
/// references any other team is ignored. The sort is stable, so teams tied
/// on total keep the order of the session's team list.
pub fn session_scores(
    team_ids: &[String],
    games: &[Game],
    penalties: &[Penalty],
) -> Vec<SessionScoreEntry> {
    let mut game_points: HashMap<&str, i64> =
        team_ids.iter().map(|id| (id.as_str(), 0)).collect();
    let mut penalty_points: HashMap<&str, i64> =
        team_ids.iter().map(|id| (id.as_str(), 0)).collect();

    for game in games {
        for (team_id, points) in &game.points {
            if let Some(sum) = game_points.get_mut(team_id.as_str()) {
                *sum += points;
            }
        }
    }

    for penalty in penalties {
        if let Some(sum) = penalty_points.get_mut(penalty.team_id.as_str()) {
            *sum += penalty.value;
        }
    }

    let mut entries: Vec<SessionScoreEntry> = team_ids
        .iter()
        .map(|team_id| {
            let games_total = game_points[team_id.as_str()];
            let penalties_total = penalty_points[team_id.as_str()];
            SessionScoreEntry {
                team_id: team_id.clone(),
                game_points: games_total,
                penalty_points: penalties_total,
                total: games_total + penalties_total,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total.cmp(&a.total));
    entries
}

/// Combined per-team totals for one session, in team-list order.
fn session_totals(
    team_ids: &[String],
    games: &[Game],
    penalties: &[Penalty],
) -> Vec<(String, i64)> {
    let mut scores = session_scores(team_ids, games, penalties);
    // back to team-list order so the winner tie-break is deterministic
    let order: HashMap<&str, usize> = team_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();
    scores.sort_by_key(|entry| order[entry.team_id.as_str()]);
    scores
        .into_iter()
        .map(|entry| (entry.team_id, entry.total))
        .collect()
}

/// Cumulative standings over completed sessions: summed totals, sessions
/// played, and session wins per team.
///
/// The winner of a session is the team with the highest session total;
/// when several teams tie for it, the one listed first in the session's
/// team list takes the win. Output is sorted descending by total points,
/// stable by first-encounter order.
pub fn leaderboard(sessions: &[(Session, Vec<Game>, Vec<Penalty>)]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (session, games, penalties) in sessions {
        let totals = session_totals(&session.team_ids, games, penalties);

        for (team_id, total) in &totals {
            let i = *index.entry(team_id.clone()).or_insert_with(|| {
                entries.push(LeaderboardEntry {
                    team_id: team_id.clone(),
                    total_points: 0,
                    wins: 0,
                    sessions: 0,
                });
                entries.len() - 1
            });
            entries[i].total_points += total;
            entries[i].sessions += 1;
        }

        let mut winner: Option<(&str, i64)> = None;
        for (team_id, total) in &totals {
            match winner {
                Some((_, best)) if best >= *total => {}
                _ => winner = Some((team_id.as_str(), *total)),
            }
        }
        if let Some((team_id, _)) = winner {
            entries[index[team_id]].wins += 1;
        }
    }

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn game(points: &[(&str, i64)]) -> Game {
        Game {
            id: "g".to_string(),
            session_id: "s".to_string(),
            name: "G".to_string(),
            player_placements: HashMap::new(),
            player_points: HashMap::new(),
            team_player_map: HashMap::new(),
            points: points.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            placements: HashMap::new(),
        }
    }

    fn penalty(team_id: &str, value: i64) -> Penalty {
        Penalty {
            id: "p".to_string(),
            session_id: "s".to_string(),
            team_id: team_id.to_string(),
            value,
            reason: String::new(),
        }
    }

    fn session(id: &str, team_ids: &[&str]) -> Session {
        Session {
            id: id.to_string(),
            name: id.to_string(),
            date: chrono::NaiveDateTime::default(),
            team_ids: ids(team_ids),
            status: "completed".to_string(),
        }
    }

    #[test]
    fn totals_combine_games_and_penalties() {
        let scores = session_scores(
            &ids(&["t1", "t2"]),
            &[game(&[("t1", 7), ("t2", 3)])],
            &[penalty("t1", -2)],
        );

        assert_eq!(scores[0].team_id, "t1");
        assert_eq!(scores[0].game_points, 7);
        assert_eq!(scores[0].penalty_points, -2);
        assert_eq!(scores[0].total, 5);
        assert_eq!(scores[1].team_id, "t2");
        assert_eq!(scores[1].total, 3);
    }

    #[test]
    fn unknown_team_references_are_filtered() {
        let scores = session_scores(
            &ids(&["t1"]),
            &[game(&[("t1", 4), ("intruder", 9)])],
            &[penalty("intruder", -5)],
        );

        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].total, 4);
    }

    #[test]
    fn tied_teams_keep_team_list_order() {
        let scores = session_scores(&ids(&["t1", "t2", "t3"]), &[], &[]);

        let order: Vec<&str> = scores.iter().map(|s| s.team_id.as_str()).collect();
        assert_eq!(order, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn scores_sort_descending_by_total() {
        let scores = session_scores(
            &ids(&["t1", "t2", "t3"]),
            &[game(&[("t1", 2), ("t2", 9), ("t3", 5)])],
            &[],
        );

        let order: Vec<&str> = scores.iter().map(|s| s.team_id.as_str()).collect();
        assert_eq!(order, vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn leaderboard_single_session() {
        let sessions = vec![(
            session("s1", &["t1", "t2"]),
            vec![game(&[("t1", 7), ("t2", 3)])],
            vec![penalty("t1", -1)],
        )];

        let board = leaderboard(&sessions);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].team_id, "t1");
        assert_eq!(board[0].total_points, 6);
        assert_eq!(board[0].wins, 1);
        assert_eq!(board[0].sessions, 1);
        assert_eq!(board[1].team_id, "t2");
        assert_eq!(board[1].total_points, 3);
        assert_eq!(board[1].wins, 0);
        assert_eq!(board[1].sessions, 1);
    }

    #[test]
    fn leaderboard_accumulates_across_sessions() {
        let sessions = vec![
            (
                session("s1", &["t1", "t2"]),
                vec![game(&[("t1", 7), ("t2", 3)])],
                vec![],
            ),
            (
                session("s2", &["t1", "t2"]),
                vec![game(&[("t1", 1), ("t2", 6)])],
                vec![],
            ),
        ];

        let board = leaderboard(&sessions);
        let t2 = board.iter().find(|e| e.team_id == "t2").unwrap();
        assert_eq!(t2.total_points, 9);
        assert_eq!(t2.wins, 1);
        assert_eq!(t2.sessions, 2);
    }

    #[test]
    fn tied_session_total_goes_to_first_listed_team() {
        let sessions = vec![(
            session("s1", &["t2", "t1"]),
            vec![game(&[("t1", 5), ("t2", 5)])],
            vec![],
        )];

        let board = leaderboard(&sessions);
        let t2 = board.iter().find(|e| e.team_id == "t2").unwrap();
        let t1 = board.iter().find(|e| e.team_id == "t1").unwrap();
        assert_eq!(t2.wins, 1);
        assert_eq!(t1.wins, 0);
    }

    #[test]
    fn empty_input_yields_empty_board() {
        assert!(leaderboard(&[]).is_empty());
    }
}
