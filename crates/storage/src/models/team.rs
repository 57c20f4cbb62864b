use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Display names of the team's players, in roster order.
    pub players: Vec<String>,
    pub color: Option<String>,
    /// Short label shown next to the team name, at most 4 characters.
    pub tag: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
