use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;
use crate::models::Team;

/// Request payload for creating a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default)]
    pub players: Vec<String>,

    pub color: Option<String>,

    #[validate(length(max = 4, message = "Tag must be at most 4 characters"))]
    pub tag: Option<String>,
}

/// Request payload for replacing a team's fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default)]
    pub players: Vec<String>,

    pub color: Option<String>,

    #[validate(length(max = 4, message = "Tag must be at most 4 characters"))]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub players: Vec<String>,
    pub color: Option<String>,
    pub tag: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            players: team.players,
            color: team.color,
            tag: team.tag,
            created_at: team.created_at,
        }
    }
}
