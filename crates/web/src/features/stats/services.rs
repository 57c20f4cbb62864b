use sqlx::SqlitePool;
use storage::{
    dto::stats::LeaderboardEntry,
    error::Result,
    models::SESSION_STATUS_COMPLETED,
    repository::{
        game::GameRepository, penalty::PenaltyRepository, session::SessionRepository,
    },
    services::standings,
};

/// Compute the leaderboard over all completed sessions. Active sessions
/// do not contribute.
pub async fn get_leaderboard(pool: &SqlitePool) -> Result<Vec<LeaderboardEntry>> {
    let sessions = SessionRepository::new(pool)
        .list(Some(SESSION_STATUS_COMPLETED))
        .await?;

    let mut snapshots = Vec::with_capacity(sessions.len());
    for session in sessions {
        let games = GameRepository::new(pool).list_for_session(&session.id).await?;
        let penalties = PenaltyRepository::new(pool)
            .list_for_session(&session.id)
            .await?;
        snapshots.push((session, games, penalties));
    }

    Ok(standings::leaderboard(&snapshots))
}
