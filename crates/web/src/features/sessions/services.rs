use sqlx::SqlitePool;
use storage::{
    dto::session::{CreateSessionRequest, SessionResponse, UpdateSessionRequest},
    error::{Result, StorageError},
    models::Session,
    repository::{
        game::GameRepository, penalty::PenaltyRepository, session::SessionRepository,
        team::TeamRepository,
    },
};

/// List session summaries, optionally filtered by status
pub async fn list_sessions(pool: &SqlitePool, status: Option<&str>) -> Result<Vec<Session>> {
    let repo = SessionRepository::new(pool);
    repo.list(status).await
}

/// Get a session together with its games and penalties
pub async fn get_session(pool: &SqlitePool, session_id: &str) -> Result<SessionResponse> {
    let session = SessionRepository::new(pool).find_by_id(session_id).await?;
    let games = GameRepository::new(pool).list_for_session(session_id).await?;
    let penalties = PenaltyRepository::new(pool)
        .list_for_session(session_id)
        .await?;

    Ok(SessionResponse::from_parts(session, games, penalties))
}

/// Create a session. Every referenced team must already exist; dangling
/// ids are rejected before anything is written.
pub async fn create_session(pool: &SqlitePool, request: &CreateSessionRequest) -> Result<Session> {
    let teams = TeamRepository::new(pool);
    for team_id in &request.team_ids {
        if !teams.exists(team_id).await? {
            return Err(StorageError::validation(format!(
                "Unknown team '{team_id}'"
            )));
        }
    }

    let repo = SessionRepository::new(pool);
    repo.create(&request.name, &request.team_ids).await
}

/// Rename a session and/or move it between statuses
pub async fn update_session(
    pool: &SqlitePool,
    session_id: &str,
    request: &UpdateSessionRequest,
) -> Result<Session> {
    let repo = SessionRepository::new(pool);
    repo.update(
        session_id,
        request.name.as_deref(),
        request.status.as_deref(),
    )
    .await
}

/// Delete a session along with its games and penalties
pub async fn delete_session(pool: &SqlitePool, session_id: &str) -> Result<()> {
    let repo = SessionRepository::new(pool);
    repo.delete(session_id).await
}
