use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List all teams", body = Vec<TeamResponse>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Json<Vec<TeamResponse>>, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    let response: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(team_id): Path<String>,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), &team_id).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 404, description = "Team not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(db): State<Database>,
    Path(team_id): Path<String>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::update_team(db.pool(), &team_id, &req).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Path(team_id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_team(db.pool(), &team_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
