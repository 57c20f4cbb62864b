use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::{Team, generate_id};

/// Teams are stored with their player list JSON-encoded; this row type is
/// the raw shape, decoded into [`Team`] on the way out.
#[derive(FromRow)]
struct TeamRow {
    id: String,
    name: String,
    players: String,
    color: Option<String>,
    tag: Option<String>,
    created_at: chrono::NaiveDateTime,
}

impl TeamRow {
    fn into_team(self) -> Result<Team> {
        Ok(Team {
            id: self.id,
            name: self.name,
            players: serde_json::from_str(&self.players)?,
            color: self.color,
            tag: self.tag,
            created_at: self.created_at,
        })
    }
}

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all teams in creation order
    pub async fn list(&self) -> Result<Vec<Team>> {
        let rows: Vec<TeamRow> = sqlx::query_as(
            r#"
            SELECT id, name, players, color, tag, created_at
            FROM teams
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TeamRow::into_team).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Team> {
        let row: TeamRow = sqlx::query_as(
            r#"
            SELECT id, name, players, color, tag, created_at
            FROM teams
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        row.into_team()
    }

    pub async fn exists(&self, id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE id = ?1")
            .bind(id)
            .fetch_one(self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Create a new team, trimming the name and dropping blank player
    /// entries.
    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = Team {
            id: generate_id(),
            name: req.name.trim().to_string(),
            players: clean_players(&req.players),
            color: req.color.clone(),
            tag: clean_tag(req.tag.as_deref()),
            created_at: Utc::now().naive_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, players, color, tag, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&team.id)
        .bind(&team.name)
        .bind(serde_json::to_string(&team.players)?)
        .bind(&team.color)
        .bind(&team.tag)
        .bind(team.created_at)
        .execute(self.pool)
        .await?;

        Ok(team)
    }

    /// Replace a team's fields, keeping its id and creation time
    pub async fn update(&self, id: &str, req: &UpdateTeamRequest) -> Result<Team> {
        let existing = self.find_by_id(id).await?;

        let team = Team {
            id: existing.id,
            name: req.name.trim().to_string(),
            players: clean_players(&req.players),
            color: req.color.clone(),
            tag: clean_tag(req.tag.as_deref()),
            created_at: existing.created_at,
        };

        sqlx::query(
            r#"
            UPDATE teams
            SET name = ?2, players = ?3, color = ?4, tag = ?5
            WHERE id = ?1
            "#,
        )
        .bind(&team.id)
        .bind(&team.name)
        .bind(serde_json::to_string(&team.players)?)
        .bind(&team.color)
        .bind(&team.tag)
        .execute(self.pool)
        .await?;

        Ok(team)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Fill in a missing color and/or tag without touching fields that are
    /// already set. Used by the startup identity backfill.
    pub async fn set_identity(
        &self,
        id: &str,
        color: Option<&str>,
        tag: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE teams
            SET color = COALESCE(?2, color), tag = COALESCE(?3, tag)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(color)
        .bind(tag)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

fn clean_players(players: &[String]) -> Vec<String> {
    players
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_tag(tag: Option<&str>) -> Option<String> {
    tag.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
