use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SESSION_STATUS_ACTIVE: &str = "active";
pub const SESSION_STATUS_COMPLETED: &str = "completed";

/// A bounded block of play involving a fixed set of teams. Games and
/// penalties belong to exactly one session and are deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub date: chrono::NaiveDateTime,
    pub team_ids: Vec<String>,
    pub status: String,
}
