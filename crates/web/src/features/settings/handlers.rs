use axum::{Json, extract::State};
use storage::{
    Database,
    dto::settings::{SettingsResponse, SettingsUpdate},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "League settings with defaults applied", body = SettingsResponse)
    ),
    tag = "settings"
)]
pub async fn get_settings(State(db): State<Database>) -> Result<Json<SettingsResponse>, WebError> {
    let settings = services::get_settings(db.pool()).await?;

    Ok(Json(settings))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = SettingsUpdate,
    responses(
        (status = 200, description = "Settings updated; omitted fields are preserved", body = SettingsResponse)
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(db): State<Database>,
    Json(req): Json<SettingsUpdate>,
) -> Result<Json<SettingsResponse>, WebError> {
    let settings = services::update_settings(db.pool(), &req).await?;

    Ok(Json(settings))
}
