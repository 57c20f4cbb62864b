use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{export_data, import_data};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/export", get(export_data))
        .route("/import", post(import_data))
}
