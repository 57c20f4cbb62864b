use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::game::GameResponse;
use super::penalty::PenaltyResponse;
use super::validate_not_blank;
use crate::models::{
    Game, Penalty, SESSION_STATUS_ACTIVE, SESSION_STATUS_COMPLETED, Session,
};

/// Request payload for creating a new session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSessionRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, message = "A session needs at least one team"))]
    pub team_ids: Vec<String>,
}

/// Request payload for renaming a session or moving it between statuses
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSessionRequest {
    pub name: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Session summary without its games and penalties, used for listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionSummaryResponse {
    pub id: String,
    pub name: String,
    pub date: chrono::NaiveDateTime,
    pub team_ids: Vec<String>,
    pub status: String,
}

/// Full session detail including its games and penalties
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub id: String,
    pub name: String,
    pub date: chrono::NaiveDateTime,
    pub team_ids: Vec<String>,
    pub status: String,
    pub games: Vec<GameResponse>,
    pub penalties: Vec<PenaltyResponse>,
}

/// Query parameters accepted by the session listing endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct SessionFilter {
    pub status: Option<String>,
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if status == SESSION_STATUS_ACTIVE || status == SESSION_STATUS_COMPLETED {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

impl From<Session> for SessionSummaryResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            name: session.name,
            date: session.date,
            team_ids: session.team_ids,
            status: session.status,
        }
    }
}

impl SessionResponse {
    pub fn from_parts(session: Session, games: Vec<Game>, penalties: Vec<Penalty>) -> Self {
        Self {
            id: session.id,
            name: session.name,
            date: session.date,
            team_ids: session.team_ids,
            status: session.status,
            games: games.into_iter().map(GameResponse::from).collect(),
            penalties: penalties.into_iter().map(PenaltyResponse::from).collect(),
        }
    }
}
