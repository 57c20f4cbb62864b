use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_settings, update_settings};

pub fn routes() -> Router<Database> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
