use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Game, Penalty, Session, Team};

fn default_status() -> String {
    crate::models::SESSION_STATUS_ACTIVE.to_string()
}

/// Full store snapshot used by both export and import. Field names are
/// camelCased on the wire, matching the frontend's localStorage backup
/// format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DataSnapshot {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub team_ids: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub penalties: Vec<PenaltyRecord>,
}

/// Games are exported with their frozen aggregates and re-imported as-is;
/// nothing is recomputed on import.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub player_placements: HashMap<String, i64>,
    #[serde(default)]
    pub player_points: HashMap<String, i64>,
    #[serde(default)]
    pub team_player_map: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub points: HashMap<String, i64>,
    #[serde(default)]
    pub placements: HashMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportCounts {
    pub teams: usize,
    pub sessions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    pub imported: ImportCounts,
}

impl From<&Team> for TeamRecord {
    fn from(team: &Team) -> Self {
        Self {
            id: Some(team.id.clone()),
            name: team.name.clone(),
            players: team.players.clone(),
            color: team.color.clone(),
            tag: team.tag.clone(),
            created_at: Some(team.created_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        }
    }
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: Some(game.id.clone()),
            name: game.name.clone(),
            player_placements: game.player_placements.clone(),
            player_points: game.player_points.clone(),
            team_player_map: game.team_player_map.clone(),
            points: game.points.clone(),
            placements: game.placements.clone(),
        }
    }
}

impl From<&Penalty> for PenaltyRecord {
    fn from(penalty: &Penalty) -> Self {
        Self {
            id: Some(penalty.id.clone()),
            team_id: penalty.team_id.clone(),
            value: penalty.value,
            reason: penalty.reason.clone(),
        }
    }
}

impl SessionRecord {
    pub fn from_parts(session: &Session, games: &[Game], penalties: &[Penalty]) -> Self {
        Self {
            id: Some(session.id.clone()),
            name: session.name.clone(),
            date: Some(session.date.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            team_ids: session.team_ids.clone(),
            status: session.status.clone(),
            games: games.iter().map(GameRecord::from).collect(),
            penalties: penalties.iter().map(PenaltyRecord::from).collect(),
        }
    }
}
