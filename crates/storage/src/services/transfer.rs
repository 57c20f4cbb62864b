//! Whole-store export and import.
//!
//! Export produces a snapshot of teams, sessions (with their frozen games
//! and penalties) and raw settings. Import upserts a snapshot inside one
//! transaction; any validation failure rolls the whole import back.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::SqlitePool;

use crate::dto::data::{DataSnapshot, ImportCounts, SessionRecord, TeamRecord};
use crate::error::{Result, StorageError};
use crate::models::generate_id;
use crate::repository::game::GameRepository;
use crate::repository::penalty::PenaltyRepository;
use crate::repository::session::SessionRepository;
use crate::repository::settings::SettingsRepository;
use crate::repository::team::TeamRepository;

pub async fn export_snapshot(pool: &SqlitePool) -> Result<DataSnapshot> {
    let teams = TeamRepository::new(pool).list().await?;
    let sessions = SessionRepository::new(pool).list(None).await?;

    let mut session_records = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let games = GameRepository::new(pool).list_for_session(&session.id).await?;
        let penalties = PenaltyRepository::new(pool)
            .list_for_session(&session.id)
            .await?;
        session_records.push(SessionRecord::from_parts(session, &games, &penalties));
    }

    Ok(DataSnapshot {
        teams: teams.iter().map(TeamRecord::from).collect(),
        sessions: session_records,
        settings: SettingsRepository::new(pool).all().await?,
    })
}

/// Upserts the snapshot. Sessions may reference teams created earlier in
/// the same snapshot; a session naming a team id that exists nowhere
/// aborts the import with nothing written.
pub async fn import_snapshot(pool: &SqlitePool, snapshot: &DataSnapshot) -> Result<ImportCounts> {
    if snapshot.teams.is_empty() && snapshot.sessions.is_empty() {
        return Err(StorageError::validation("No data to import"));
    }

    let mut tx = pool.begin().await?;

    for team in &snapshot.teams {
        let id = team.id.clone().unwrap_or_else(generate_id);
        let players = serde_json::to_string(&team.players)?;
        let created_at = parse_timestamp(team.created_at.as_deref())?;
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, players, color, tag, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                players = excluded.players,
                color = excluded.color,
                tag = excluded.tag,
                created_at = excluded.created_at
            "#,
        )
        .bind(&id)
        .bind(&team.name)
        .bind(&players)
        .bind(&team.color)
        .bind(&team.tag)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }

    for session in &snapshot.sessions {
        for team_id in &session.team_ids {
            let known: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE id = ?1")
                .bind(team_id)
                .fetch_one(&mut *tx)
                .await?;
            if known == 0 {
                return Err(StorageError::validation(format!(
                    "Session '{}' references unknown team '{}'",
                    session.name, team_id
                )));
            }
        }

        let session_id = session.id.clone().unwrap_or_else(generate_id);
        let team_ids = serde_json::to_string(&session.team_ids)?;
        let date = parse_timestamp(session.date.as_deref())?;
        sqlx::query(
            r#"
            INSERT INTO sessions (id, name, date, team_ids, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                date = excluded.date,
                team_ids = excluded.team_ids,
                status = excluded.status
            "#,
        )
        .bind(&session_id)
        .bind(&session.name)
        .bind(date)
        .bind(&team_ids)
        .bind(&session.status)
        .execute(&mut *tx)
        .await?;

        for game in &session.games {
            sqlx::query(
                r#"
                INSERT INTO games (
                    id, session_id, name, player_placements, player_points,
                    team_player_map, points, placements
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                ON CONFLICT (id) DO UPDATE SET
                    session_id = excluded.session_id,
                    name = excluded.name,
                    player_placements = excluded.player_placements,
                    player_points = excluded.player_points,
                    team_player_map = excluded.team_player_map,
                    points = excluded.points,
                    placements = excluded.placements
                "#,
            )
            .bind(game.id.clone().unwrap_or_else(generate_id))
            .bind(&session_id)
            .bind(&game.name)
            .bind(serde_json::to_string(&game.player_placements)?)
            .bind(serde_json::to_string(&game.player_points)?)
            .bind(serde_json::to_string(&game.team_player_map)?)
            .bind(serde_json::to_string(&game.points)?)
            .bind(serde_json::to_string(&game.placements)?)
            .execute(&mut *tx)
            .await?;
        }

        for penalty in &session.penalties {
            sqlx::query(
                r#"
                INSERT INTO penalties (id, session_id, team_id, value, reason)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT (id) DO UPDATE SET
                    session_id = excluded.session_id,
                    team_id = excluded.team_id,
                    value = excluded.value,
                    reason = excluded.reason
                "#,
            )
            .bind(penalty.id.clone().unwrap_or_else(generate_id))
            .bind(&session_id)
            .bind(&penalty.team_id)
            .bind(penalty.value)
            .bind(&penalty.reason)
            .execute(&mut *tx)
            .await?;
        }
    }

    for (key, value) in &snapshot.settings {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(ImportCounts {
        teams: snapshot.teams.len(),
        sessions: snapshot.sessions.len(),
    })
}

fn parse_timestamp(value: Option<&str>) -> Result<NaiveDateTime> {
    match value {
        None => Ok(Utc::now().naive_utc()),
        Some(raw) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
                return Ok(dt.naive_utc());
            }
            raw.parse::<NaiveDateTime>()
                .map_err(|_| StorageError::validation(format!("Invalid timestamp: {raw}")))
        }
    }
}
