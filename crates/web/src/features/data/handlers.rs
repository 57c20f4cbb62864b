use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::data::{DataSnapshot, ImportSummary},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Full snapshot of teams, sessions and settings", body = DataSnapshot)
    ),
    tag = "data"
)]
pub async fn export_data(State(db): State<Database>) -> Result<Json<DataSnapshot>, WebError> {
    let snapshot = services::export_data(db.pool()).await?;

    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/api/import",
    request_body = DataSnapshot,
    responses(
        (status = 201, description = "Snapshot imported", body = ImportSummary),
        (status = 422, description = "Empty snapshot or unknown team reference; nothing imported")
    ),
    tag = "data"
)]
pub async fn import_data(
    State(db): State<Database>,
    Json(snapshot): Json<DataSnapshot>,
) -> Result<Response, WebError> {
    let imported = services::import_data(db.pool(), &snapshot).await?;

    Ok((StatusCode::CREATED, Json(ImportSummary { imported })).into_response())
}
