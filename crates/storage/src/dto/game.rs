use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;
use crate::models::Game;

/// Request payload for recording a game in a session.
///
/// Placement keys are entrant keys: a bare player name, or a
/// `"<team_id>::<player_name>"` composite when two teams field a player
/// with the same name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGameRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub player_placements: HashMap<String, i64>,

    pub team_player_map: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameResponse {
    pub id: String,
    pub session_id: String,
    pub name: String,
    pub player_placements: HashMap<String, i64>,
    pub player_points: HashMap<String, i64>,
    pub team_player_map: HashMap<String, Vec<String>>,
    pub points: HashMap<String, i64>,
    pub placements: HashMap<String, i64>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            session_id: game.session_id,
            name: game.name,
            player_placements: game.player_placements,
            player_points: game.player_points,
            team_player_map: game.team_player_map,
            points: game.points,
            placements: game.placements,
        }
    }
}
