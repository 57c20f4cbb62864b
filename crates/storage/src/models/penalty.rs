use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point adjustment against one team within a session. The value is
/// signed and typically negative.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Penalty {
    pub id: String,
    pub session_id: String,
    pub team_id: String,
    pub value: i64,
    pub reason: String,
}
