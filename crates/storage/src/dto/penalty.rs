use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Penalty;

/// Request payload for recording a penalty against a team
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePenaltyRequest {
    pub team_id: String,
    pub value: i64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PenaltyResponse {
    pub id: String,
    pub session_id: String,
    pub team_id: String,
    pub value: i64,
    pub reason: String,
}

impl From<Penalty> for PenaltyResponse {
    fn from(penalty: Penalty) -> Self {
        Self {
            id: penalty.id,
            session_id: penalty.session_id,
            team_id: penalty.team_id,
            value: penalty.value,
            reason: penalty.reason,
        }
    }
}
