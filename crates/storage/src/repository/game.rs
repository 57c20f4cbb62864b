use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::{Game, generate_id};
use crate::services::scoring::GamePoints;

#[derive(FromRow)]
struct GameRow {
    id: String,
    session_id: String,
    name: String,
    player_placements: String,
    player_points: String,
    team_player_map: String,
    points: String,
    placements: String,
}

impl GameRow {
    fn into_game(self) -> Result<Game> {
        Ok(Game {
            id: self.id,
            session_id: self.session_id,
            name: self.name,
            player_placements: serde_json::from_str(&self.player_placements)?,
            player_points: serde_json::from_str(&self.player_points)?,
            team_player_map: serde_json::from_str(&self.team_player_map)?,
            points: serde_json::from_str(&self.points)?,
            placements: serde_json::from_str(&self.placements)?,
        })
    }
}

/// Repository for Game database operations
pub struct GameRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GameRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a session's games in recording order
    pub async fn list_for_session(&self, session_id: &str) -> Result<Vec<Game>> {
        let rows: Vec<GameRow> = sqlx::query_as(
            r#"
            SELECT id, session_id, name, player_placements, player_points,
                   team_player_map, points, placements
            FROM games
            WHERE session_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(GameRow::into_game).collect()
    }

    /// Persist a freshly scored game. The computed aggregates are frozen
    /// here; nothing recomputes them later.
    pub async fn create(
        &self,
        session_id: &str,
        name: &str,
        player_placements: &HashMap<String, i64>,
        team_player_map: &HashMap<String, Vec<String>>,
        computed: GamePoints,
    ) -> Result<Game> {
        let game = Game {
            id: generate_id(),
            session_id: session_id.to_string(),
            name: name.trim().to_string(),
            player_placements: player_placements.clone(),
            player_points: computed.player_points,
            team_player_map: team_player_map.clone(),
            points: computed.points,
            placements: computed.placements,
        };

        sqlx::query(
            r#"
            INSERT INTO games (
                id, session_id, name, player_placements, player_points,
                team_player_map, points, placements
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&game.id)
        .bind(&game.session_id)
        .bind(&game.name)
        .bind(serde_json::to_string(&game.player_placements)?)
        .bind(serde_json::to_string(&game.player_points)?)
        .bind(serde_json::to_string(&game.team_player_map)?)
        .bind(serde_json::to_string(&game.points)?)
        .bind(serde_json::to_string(&game.placements)?)
        .execute(self.pool)
        .await?;

        Ok(game)
    }

    pub async fn delete(&self, session_id: &str, game_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM games WHERE session_id = ?1 AND id = ?2")
            .bind(session_id)
            .bind(game_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
