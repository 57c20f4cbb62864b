use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_session, delete_session, get_session, list_sessions, update_session};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route(
            "/:session_id",
            get(get_session).put(update_session).delete(delete_session),
        )
}
