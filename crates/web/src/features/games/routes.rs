use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{add_game, add_penalty, get_session_scores, remove_game, remove_penalty};

/// Routes for a session's games, penalties and score table; nested under
/// the same `/sessions` prefix as the session routes.
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:session_id/games", post(add_game))
        .route("/:session_id/games/:game_id", delete(remove_game))
        .route("/:session_id/penalties", post(add_penalty))
        .route("/:session_id/penalties/:penalty_id", delete(remove_penalty))
        .route("/:session_id/scores", get(get_session_scores))
}
