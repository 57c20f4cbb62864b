use axum::{Json, extract::State};
use storage::{Database, dto::stats::LeaderboardEntry};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats/leaderboard",
    responses(
        (status = 200, description = "Cumulative standings over completed sessions", body = Vec<LeaderboardEntry>)
    ),
    tag = "stats"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
) -> Result<Json<Vec<LeaderboardEntry>>, WebError> {
    let leaderboard = services::get_leaderboard(db.pool()).await?;

    Ok(Json(leaderboard))
}
