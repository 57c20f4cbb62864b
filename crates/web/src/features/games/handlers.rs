use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        game::{CreateGameRequest, GameResponse},
        penalty::{CreatePenaltyRequest, PenaltyResponse},
        stats::SessionScoreEntry,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/games",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game recorded with frozen points", body = GameResponse),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "games"
)]
pub async fn add_game(
    State(db): State<Database>,
    Path(session_id): Path<String>,
    Json(req): Json<CreateGameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let game = services::add_game(db.pool(), &session_id, &req).await?;

    Ok((StatusCode::CREATED, Json(GameResponse::from(game))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}/games/{game_id}",
    params(
        ("session_id" = String, Path, description = "Session id"),
        ("game_id" = String, Path, description = "Game id")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn remove_game(
    State(db): State<Database>,
    Path((session_id, game_id)): Path<(String, String)>,
) -> Result<Response, WebError> {
    services::remove_game(db.pool(), &session_id, &game_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/penalties",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    request_body = CreatePenaltyRequest,
    responses(
        (status = 201, description = "Penalty recorded", body = PenaltyResponse),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "penalties"
)]
pub async fn add_penalty(
    State(db): State<Database>,
    Path(session_id): Path<String>,
    Json(req): Json<CreatePenaltyRequest>,
) -> Result<Response, WebError> {
    let penalty = services::add_penalty(db.pool(), &session_id, &req).await?;

    Ok((StatusCode::CREATED, Json(PenaltyResponse::from(penalty))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}/penalties/{penalty_id}",
    params(
        ("session_id" = String, Path, description = "Session id"),
        ("penalty_id" = String, Path, description = "Penalty id")
    ),
    responses(
        (status = 204, description = "Penalty deleted"),
        (status = 404, description = "Penalty not found")
    ),
    tag = "penalties"
)]
pub async fn remove_penalty(
    State(db): State<Database>,
    Path((session_id, penalty_id)): Path<(String, String)>,
) -> Result<Response, WebError> {
    services::remove_penalty(db.pool(), &session_id, &penalty_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/scores",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session score table, best total first", body = Vec<SessionScoreEntry>),
        (status = 404, description = "Session not found")
    ),
    tag = "games"
)]
pub async fn get_session_scores(
    State(db): State<Database>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<SessionScoreEntry>>, WebError> {
    let scores = services::get_session_scores(db.pool(), &session_id).await?;

    Ok(Json(scores))
}
