//! Converts raw finishing positions into points and per-team aggregates.
//!
//! Points are computed once, when a game is recorded, against whatever
//! scoring tables are configured at that moment. The results are stored on
//! the game and never recomputed.

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::dto::settings::{ScoringConfig, ScoringConfig2P, SettingsResponse};
use crate::error::Result;
use crate::repository::settings::SettingsRepository;

/// Placement stored for a team none of whose players appear in the
/// placement map. Larger than any real finishing position.
pub const NO_PLACEMENT: i64 = 999;

/// The configured point tables: one for games with more than two entrants,
/// one for head-to-head games.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    standard: ScoringConfig,
    two_player: ScoringConfig2P,
}

impl ScoringTable {
    pub fn new(standard: ScoringConfig, two_player: ScoringConfig2P) -> Self {
        Self {
            standard,
            two_player,
        }
    }

    /// Points for finishing at `position` in a game with `entrant_count`
    /// entrants. Positions outside the table earn the worst configured
    /// value, never zero.
    pub fn points_for(&self, position: i64, entrant_count: usize) -> i64 {
        if entrant_count <= 2 {
            match position {
                1 => self.two_player.first,
                _ => self.two_player.second,
            }
        } else {
            match position {
                1 => self.standard.first,
                2 => self.standard.second,
                3 => self.standard.third,
                _ => self.standard.fourth,
            }
        }
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), ScoringConfig2P::default())
    }
}

/// Identity of one entrant in a game. Placement maps key entrants either
/// by bare player name, or by a team-scoped composite when two teams field
/// players with the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrantKey<'a> {
    TeamScoped { team_id: &'a str, name: &'a str },
    Bare(&'a str),
}

impl EntrantKey<'_> {
    pub fn storage_key(&self) -> String {
        match self {
            EntrantKey::TeamScoped { team_id, name } => format!("{team_id}::{name}"),
            EntrantKey::Bare(name) => (*name).to_string(),
        }
    }
}

/// Looks up a player's entry in a placement-keyed map: the team-scoped
/// composite wins, the bare name is the fallback for games recorded before
/// composite keys existed.
fn resolve_key(
    placements: &HashMap<String, i64>,
    team_id: &str,
    name: &str,
) -> Option<String> {
    let scoped = EntrantKey::TeamScoped { team_id, name }.storage_key();
    if placements.contains_key(&scoped) {
        return Some(scoped);
    }
    let bare = EntrantKey::Bare(name).storage_key();
    placements.contains_key(&bare).then_some(bare)
}

/// The frozen outcome of scoring one game.
#[derive(Debug, Clone, Default)]
pub struct GamePoints {
    /// Entrant key -> points awarded.
    pub player_points: HashMap<String, i64>,
    /// Team id -> summed points of the team's entrants.
    pub points: HashMap<String, i64>,
    /// Team id -> best (minimum) placement among the team's entrants.
    pub placements: HashMap<String, i64>,
}

/// Scores one game: per-entrant points from the table, then per-team sums
/// and best placements over the roster map.
///
/// A rostered player absent from `player_placements` contributes nothing;
/// a team with no resolvable entrant scores 0 with placement
/// [`NO_PLACEMENT`].
pub fn score_game(
    player_placements: &HashMap<String, i64>,
    team_player_map: &HashMap<String, Vec<String>>,
    table: &ScoringTable,
) -> GamePoints {
    let entrant_count = player_placements.len();

    let player_points: HashMap<String, i64> = player_placements
        .iter()
        .map(|(key, &position)| (key.clone(), table.points_for(position, entrant_count)))
        .collect();

    let mut points = HashMap::new();
    let mut placements = HashMap::new();
    for (team_id, players) in team_player_map {
        let mut team_total = 0;
        let mut best_position = NO_PLACEMENT;
        for player_name in players {
            if let Some(key) = resolve_key(player_placements, team_id, player_name) {
                team_total += player_points[&key];
                best_position = best_position.min(player_placements[&key]);
            }
        }
        points.insert(team_id.clone(), team_total);
        placements.insert(team_id.clone(), best_position);
    }

    GamePoints {
        player_points,
        points,
        placements,
    }
}

/// Reads the scoring tables from the settings store. Called once per game
/// creation so a config change takes effect on the next game recorded.
pub async fn load_scoring_table(pool: &SqlitePool) -> Result<ScoringTable> {
    let raw = SettingsRepository::new(pool).all().await?;
    let settings = SettingsResponse::from_raw(&raw);
    Ok(ScoringTable::new(settings.scoring, settings.scoring_2p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placements(entries: &[(&str, i64)]) -> HashMap<String, i64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn roster(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(team, players)| {
                (
                    team.to_string(),
                    players.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn default_four_player_game() {
        let result = score_game(
            &placements(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]),
            &roster(&[("t1", &["A", "B"]), ("t2", &["C", "D"])]),
            &ScoringTable::default(),
        );

        assert_eq!(result.player_points["A"], 4);
        assert_eq!(result.player_points["B"], 3);
        assert_eq!(result.player_points["C"], 2);
        assert_eq!(result.player_points["D"], 1);
        assert_eq!(result.points["t1"], 7);
        assert_eq!(result.points["t2"], 3);
        assert_eq!(result.placements["t1"], 1);
        assert_eq!(result.placements["t2"], 3);
    }

    #[test]
    fn two_player_game_uses_head_to_head_table() {
        let result = score_game(
            &placements(&[("A", 1), ("B", 2)]),
            &roster(&[("t1", &["A"]), ("t2", &["B"])]),
            &ScoringTable::default(),
        );

        assert_eq!(result.player_points["A"], 4);
        assert_eq!(result.player_points["B"], 1);
    }

    #[test]
    fn positions_beyond_the_table_earn_last_place_points() {
        let table = ScoringTable::default();
        assert_eq!(table.points_for(5, 6), 1);
        assert_eq!(table.points_for(17, 6), 1);
        // Two-player table: anything but first earns the second-place value.
        assert_eq!(table.points_for(3, 2), 1);
    }

    #[test]
    fn composite_keys_keep_same_named_players_apart() {
        let result = score_game(
            &placements(&[
                ("t1::Alex", 1),
                ("t1::Sam", 3),
                ("t2::Alex", 2),
                ("t2::Pat", 4),
            ]),
            &roster(&[("t1", &["Alex", "Sam"]), ("t2", &["Alex", "Pat"])]),
            &ScoringTable::default(),
        );

        assert_eq!(result.player_points["t1::Alex"], 4);
        assert_eq!(result.player_points["t2::Alex"], 3);
        assert_eq!(result.points["t1"], 6);
        assert_eq!(result.points["t2"], 4);
        assert_eq!(result.placements["t1"], 1);
        assert_eq!(result.placements["t2"], 2);
    }

    #[test]
    fn legacy_flat_keys_aggregate_unchanged() {
        let result = score_game(
            &placements(&[("Alice", 1), ("Bob", 2), ("Carol", 3), ("Dave", 4)]),
            &roster(&[("t1", &["Alice", "Bob"]), ("t2", &["Carol", "Dave"])]),
            &ScoringTable::default(),
        );

        assert_eq!(result.points["t1"], 7);
        assert_eq!(result.points["t2"], 3);
    }

    #[test]
    fn unplaced_roster_player_contributes_nothing() {
        let result = score_game(
            &placements(&[("A", 1), ("B", 2), ("C", 3)]),
            &roster(&[("t1", &["A", "Ghost"]), ("t2", &["B", "C"])]),
            &ScoringTable::default(),
        );

        assert_eq!(result.points["t1"], 4);
        assert_eq!(result.placements["t1"], 1);
    }

    #[test]
    fn team_without_entrants_gets_sentinel_placement() {
        let result = score_game(
            &placements(&[("A", 1), ("B", 2), ("C", 3)]),
            &roster(&[("t1", &["A", "B", "C"]), ("t2", &["Nobody"])]),
            &ScoringTable::default(),
        );

        assert_eq!(result.points["t2"], 0);
        assert_eq!(result.placements["t2"], NO_PLACEMENT);
    }

    #[test]
    fn custom_table_changes_awarded_points() {
        let table = ScoringTable::new(
            ScoringConfig {
                first: 10,
                second: 7,
                third: 5,
                fourth: 2,
            },
            ScoringConfig2P::default(),
        );
        let result = score_game(
            &placements(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]),
            &roster(&[("t1", &["A", "B"]), ("t2", &["C", "D"])]),
            &table,
        );

        assert_eq!(result.points["t1"], 17);
        assert_eq!(result.points["t2"], 7);
    }

    #[test]
    fn player_points_sum_matches_table_over_placements() {
        let input = placements(&[("A", 1), ("B", 2), ("C", 2), ("D", 7)]);
        let table = ScoringTable::default();
        let result = score_game(&input, &roster(&[("t1", &["A", "B", "C", "D"])]), &table);

        let expected: i64 = input
            .values()
            .map(|&pos| table.points_for(pos, input.len()))
            .sum();
        let actual: i64 = result.player_points.values().sum();
        assert_eq!(actual, expected);
    }

    #[test]
    fn entrant_key_formats() {
        let scoped = EntrantKey::TeamScoped {
            team_id: "t1",
            name: "Alex",
        };
        assert_eq!(scoped.storage_key(), "t1::Alex");
        assert_eq!(EntrantKey::Bare("Alex").storage_key(), "Alex");
    }
}
