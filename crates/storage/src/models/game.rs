use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recorded game within a session. All mappings are computed when the
/// game is created and frozen afterward; later scoring-config changes do
/// not touch them.
///
/// Entrant keys in `player_placements` and `player_points` are either a
/// bare player name or a `"<team_id>::<player_name>"` composite when the
/// same name appears on more than one team.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Game {
    pub id: String,
    pub session_id: String,
    pub name: String,
    /// Entrant key -> finishing position (1 = best).
    pub player_placements: HashMap<String, i64>,
    /// Entrant key -> points awarded for that placement.
    pub player_points: HashMap<String, i64>,
    /// Team id -> player names on that team for this game.
    pub team_player_map: HashMap<String, Vec<String>>,
    /// Team id -> summed points of the team's entrants.
    pub points: HashMap<String, i64>,
    /// Team id -> best (minimum) placement among the team's entrants.
    pub placements: HashMap<String, i64>,
}
