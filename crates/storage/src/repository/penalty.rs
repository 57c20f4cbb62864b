use sqlx::{FromRow, SqlitePool};

use crate::dto::penalty::CreatePenaltyRequest;
use crate::error::{Result, StorageError};
use crate::models::{Penalty, generate_id};

#[derive(FromRow)]
struct PenaltyRow {
    id: String,
    session_id: String,
    team_id: String,
    value: i64,
    reason: String,
}

impl PenaltyRow {
    fn into_penalty(self) -> Penalty {
        Penalty {
            id: self.id,
            session_id: self.session_id,
            team_id: self.team_id,
            value: self.value,
            reason: self.reason,
        }
    }
}

/// Repository for Penalty database operations
pub struct PenaltyRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PenaltyRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_for_session(&self, session_id: &str) -> Result<Vec<Penalty>> {
        let rows: Vec<PenaltyRow> = sqlx::query_as(
            r#"
            SELECT id, session_id, team_id, value, reason
            FROM penalties
            WHERE session_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PenaltyRow::into_penalty).collect())
    }

    pub async fn create(&self, session_id: &str, req: &CreatePenaltyRequest) -> Result<Penalty> {
        let penalty = Penalty {
            id: generate_id(),
            session_id: session_id.to_string(),
            team_id: req.team_id.clone(),
            value: req.value,
            reason: req.reason.clone(),
        };

        sqlx::query(
            r#"
            INSERT INTO penalties (id, session_id, team_id, value, reason)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&penalty.id)
        .bind(&penalty.session_id)
        .bind(&penalty.team_id)
        .bind(penalty.value)
        .bind(&penalty.reason)
        .execute(self.pool)
        .await?;

        Ok(penalty)
    }

    pub async fn delete(&self, session_id: &str, penalty_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM penalties WHERE session_id = ?1 AND id = ?2")
            .bind(session_id)
            .bind(penalty_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
