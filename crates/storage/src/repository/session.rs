use chrono::Utc;
use sqlx::{FromRow, QueryBuilder, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::{SESSION_STATUS_ACTIVE, Session, generate_id};

#[derive(FromRow)]
struct SessionRow {
    id: String,
    name: String,
    date: chrono::NaiveDateTime,
    team_ids: String,
    status: String,
}

impl SessionRow {
    fn into_session(self) -> Result<Session> {
        Ok(Session {
            id: self.id,
            name: self.name,
            date: self.date,
            team_ids: serde_json::from_str(&self.team_ids)?,
            status: self.status,
        })
    }
}

/// Repository for Session database operations
pub struct SessionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SessionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List sessions, newest-created last, optionally filtered by status
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Session>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT id, name, date, team_ids, status
            FROM sessions
            WHERE 1=1
            "#,
        );

        if let Some(status) = status {
            query.push(" AND status = ");
            query.push_bind(status);
        }

        query.push(" ORDER BY date, id");

        let rows: Vec<SessionRow> = query.build_query_as().fetch_all(self.pool).await?;
        rows.into_iter().map(SessionRow::into_session).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Session> {
        let row: SessionRow = sqlx::query_as(
            r#"
            SELECT id, name, date, team_ids, status
            FROM sessions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        row.into_session()
    }

    pub async fn create(&self, name: &str, team_ids: &[String]) -> Result<Session> {
        let session = Session {
            id: generate_id(),
            name: name.trim().to_string(),
            date: Utc::now().naive_utc(),
            team_ids: team_ids.to_vec(),
            status: SESSION_STATUS_ACTIVE.to_string(),
        };

        sqlx::query(
            r#"
            INSERT INTO sessions (id, name, date, team_ids, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&session.id)
        .bind(&session.name)
        .bind(session.date)
        .bind(serde_json::to_string(&session.team_ids)?)
        .bind(&session.status)
        .execute(self.pool)
        .await?;

        Ok(session)
    }

    /// Update a session's name and/or status; omitted fields are kept
    pub async fn update(
        &self,
        id: &str,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<Session> {
        let mut session = self.find_by_id(id).await?;

        if let Some(name) = name {
            session.name = name.trim().to_string();
        }
        if let Some(status) = status {
            session.status = status.to_string();
        }

        sqlx::query(
            r#"
            UPDATE sessions
            SET name = ?2, status = ?3
            WHERE id = ?1
            "#,
        )
        .bind(&session.id)
        .bind(&session.name)
        .bind(&session.status)
        .execute(self.pool)
        .await?;

        Ok(session)
    }

    /// Delete a session; its games and penalties go with it
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
