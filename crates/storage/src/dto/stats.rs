use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a session's score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionScoreEntry {
    pub team_id: String,
    pub game_points: i64,
    pub penalty_points: i64,
    pub total: i64,
}

/// One row of the league-wide leaderboard over completed sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub team_id: String,
    pub total_points: i64,
    pub wins: i64,
    pub sessions: i64,
}
