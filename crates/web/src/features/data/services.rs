use sqlx::SqlitePool;
use storage::{
    dto::data::{DataSnapshot, ImportCounts},
    error::Result,
    services::transfer,
};

/// Export the whole store as one snapshot
pub async fn export_data(pool: &SqlitePool) -> Result<DataSnapshot> {
    transfer::export_snapshot(pool).await
}

/// Import a snapshot; everything is upserted in one transaction
pub async fn import_data(pool: &SqlitePool, snapshot: &DataSnapshot) -> Result<ImportCounts> {
    transfer::import_snapshot(pool, snapshot).await
}
