use sqlx::SqlitePool;
use storage::{
    dto::settings::{
        KEY_DESCRIPTION, KEY_LEAGUE_NAME, KEY_SCORING, KEY_SCORING_2P, KEY_SEASON,
        SettingsResponse, SettingsUpdate,
    },
    error::Result,
    repository::settings::SettingsRepository,
};

/// Read the structured settings, applying defaults for anything unset
pub async fn get_settings(pool: &SqlitePool) -> Result<SettingsResponse> {
    let raw = SettingsRepository::new(pool).all().await?;
    Ok(SettingsResponse::from_raw(&raw))
}

/// Write the provided fields and return the merged settings. Omitted
/// fields keep their stored values.
pub async fn update_settings(
    pool: &SqlitePool,
    update: &SettingsUpdate,
) -> Result<SettingsResponse> {
    let repo = SettingsRepository::new(pool);

    if let Some(league_name) = &update.league_name {
        repo.set(KEY_LEAGUE_NAME, league_name).await?;
    }
    if let Some(season) = &update.season {
        repo.set(KEY_SEASON, season).await?;
    }
    if let Some(description) = &update.description {
        repo.set(KEY_DESCRIPTION, description).await?;
    }
    if let Some(scoring) = &update.scoring {
        repo.set(KEY_SCORING, &serde_json::to_string(scoring)?).await?;
    }
    if let Some(scoring_2p) = &update.scoring_2p {
        repo.set(KEY_SCORING_2P, &serde_json::to_string(scoring_2p)?)
            .await?;
    }

    let raw = repo.all().await?;
    Ok(SettingsResponse::from_raw(&raw))
}
