use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use crate::error::Result;

#[derive(FromRow)]
struct SettingRow {
    key: String,
    value: String,
}

/// Repository for the key-value settings store
pub struct SettingsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All settings as a key-value map
    pub async fn all(&self) -> Result<HashMap<String, String>> {
        let rows: Vec<SettingRow> = sqlx::query_as("SELECT key, value FROM settings")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
