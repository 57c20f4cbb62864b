use axum::{Json, Router, routing::get};
use serde_json::json;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::create_team,
        features::teams::handlers::update_team,
        features::teams::handlers::delete_team,
        features::sessions::handlers::list_sessions,
        features::sessions::handlers::get_session,
        features::sessions::handlers::create_session,
        features::sessions::handlers::update_session,
        features::sessions::handlers::delete_session,
        features::games::handlers::add_game,
        features::games::handlers::remove_game,
        features::games::handlers::add_penalty,
        features::games::handlers::remove_penalty,
        features::games::handlers::get_session_scores,
        features::stats::handlers::get_leaderboard,
        features::settings::handlers::get_settings,
        features::settings::handlers::update_settings,
        features::data::handlers::export_data,
        features::data::handlers::import_data,
    ),
    components(
        schemas(
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::UpdateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::session::CreateSessionRequest,
            storage::dto::session::UpdateSessionRequest,
            storage::dto::session::SessionSummaryResponse,
            storage::dto::session::SessionResponse,
            storage::dto::game::CreateGameRequest,
            storage::dto::game::GameResponse,
            storage::dto::penalty::CreatePenaltyRequest,
            storage::dto::penalty::PenaltyResponse,
            storage::dto::stats::SessionScoreEntry,
            storage::dto::stats::LeaderboardEntry,
            storage::dto::settings::ScoringConfig,
            storage::dto::settings::ScoringConfig2P,
            storage::dto::settings::SettingsResponse,
            storage::dto::settings::SettingsUpdate,
            storage::dto::data::DataSnapshot,
            storage::dto::data::TeamRecord,
            storage::dto::data::SessionRecord,
            storage::dto::data::GameRecord,
            storage::dto::data::PenaltyRecord,
            storage::dto::data::ImportCounts,
            storage::dto::data::ImportSummary,
            storage::models::Team,
            storage::models::Session,
            storage::models::Game,
            storage::models::Penalty,
        )
    ),
    tags(
        (name = "teams", description = "Team management"),
        (name = "sessions", description = "Play sessions"),
        (name = "games", description = "Games and session scores"),
        (name = "penalties", description = "Penalties"),
        (name = "stats", description = "League standings"),
        (name = "settings", description = "League settings and scoring tables"),
        (name = "data", description = "Export and import"),
    )
)]
pub struct ApiDoc;

/// Builds the full application router over the given database handle.
pub fn app(db: Database) -> Router {
    let api = Router::new()
        .nest("/teams", features::teams::routes())
        .nest(
            "/sessions",
            features::sessions::routes().merge(features::games::routes()),
        )
        .nest("/stats", features::stats::routes())
        .merge(features::settings::routes())
        .merge(features::data::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Tournament Tracker API" }))
}
