use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::session::{
        CreateSessionRequest, SessionFilter, SessionResponse, SessionSummaryResponse,
        UpdateSessionRequest,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/sessions",
    params(SessionFilter),
    responses(
        (status = 200, description = "List sessions", body = Vec<SessionSummaryResponse>)
    ),
    tag = "sessions"
)]
pub async fn list_sessions(
    State(db): State<Database>,
    Query(filter): Query<SessionFilter>,
) -> Result<Json<Vec<SessionSummaryResponse>>, WebError> {
    let sessions = services::list_sessions(db.pool(), filter.status.as_deref()).await?;

    let response: Vec<SessionSummaryResponse> = sessions
        .into_iter()
        .map(SessionSummaryResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session with its games and penalties", body = SessionResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn get_session(
    State(db): State<Database>,
    Path(session_id): Path<String>,
) -> Result<Response, WebError> {
    let session = services::get_session(db.pool(), &session_id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "sessions"
)]
pub async fn create_session(
    State(db): State<Database>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let session = services::create_session(db.pool(), &req).await?;
    let response = SessionResponse::from_parts(session, vec![], vec![]);

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    request_body = UpdateSessionRequest,
    responses(
        (status = 200, description = "Session updated", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "sessions"
)]
pub async fn update_session(
    State(db): State<Database>,
    Path(session_id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_session(db.pool(), &session_id, &req).await?;
    let session = services::get_session(db.pool(), &session_id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    responses(
        (status = 204, description = "Session deleted along with its games and penalties"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn delete_session(
    State(db): State<Database>,
    Path(session_id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_session(db.pool(), &session_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
