use sqlx::SqlitePool;
use storage::{
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::Team,
    repository::team::TeamRepository,
};

/// List all teams
pub async fn list_teams(pool: &SqlitePool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

/// Get a team by id
pub async fn get_team(pool: &SqlitePool, team_id: &str) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(team_id).await
}

/// Create a new team
pub async fn create_team(pool: &SqlitePool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.create(request).await
}

/// Replace a team's fields
pub async fn update_team(
    pool: &SqlitePool,
    team_id: &str,
    request: &UpdateTeamRequest,
) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.update(team_id, request).await
}

/// Delete a team. Sessions that reference it are left untouched.
pub async fn delete_team(pool: &SqlitePool, team_id: &str) -> Result<()> {
    let repo = TeamRepository::new(pool);
    repo.delete(team_id).await
}
