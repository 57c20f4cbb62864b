use std::collections::HashMap;

use storage::Database;
use storage::dto::data::DataSnapshot;
use storage::dto::penalty::CreatePenaltyRequest;
use storage::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use storage::error::StorageError;
use storage::repository::game::GameRepository;
use storage::repository::penalty::PenaltyRepository;
use storage::repository::session::SessionRepository;
use storage::repository::settings::SettingsRepository;
use storage::repository::team::TeamRepository;
use storage::services::scoring::{ScoringTable, score_game};
use storage::services::team_identity::{TEAM_COLOR_PALETTE, backfill_team_identities};
use storage::services::transfer::{export_snapshot, import_snapshot};

async fn test_db() -> Database {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");
    db
}

fn team_request(name: &str, players: &[&str]) -> CreateTeamRequest {
    CreateTeamRequest {
        name: name.to_string(),
        players: players.iter().map(|p| p.to_string()).collect(),
        color: None,
        tag: None,
    }
}

#[tokio::test]
async fn team_crud_roundtrip() {
    let db = test_db().await;
    let repo = TeamRepository::new(db.pool());

    let created = repo
        .create(&team_request("  Alpha  ", &["Alice", " Bob ", ""]))
        .await
        .unwrap();
    assert_eq!(created.name, "Alpha");
    assert_eq!(created.players, vec!["Alice", "Bob"]);

    let fetched = repo.find_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.name, "Alpha");
    assert_eq!(fetched.players, created.players);

    let updated = repo
        .update(
            &created.id,
            &UpdateTeamRequest {
                name: "Alpha v2".to_string(),
                players: vec!["Alice".to_string()],
                color: Some("#123456".to_string()),
                tag: Some("AL".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Alpha v2");
    assert_eq!(updated.color.as_deref(), Some("#123456"));
    assert_eq!(updated.created_at, created.created_at);

    repo.delete(&created.id).await.unwrap();
    assert!(matches!(
        repo.find_by_id(&created.id).await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn missing_team_lookups_are_not_found() {
    let db = test_db().await;
    let repo = TeamRepository::new(db.pool());

    assert!(matches!(
        repo.find_by_id("nonexistent").await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(
        repo.delete("nonexistent").await,
        Err(StorageError::NotFound)
    ));
    assert!(!repo.exists("nonexistent").await.unwrap());
}

#[tokio::test]
async fn session_lifecycle_and_status_filter() {
    let db = test_db().await;
    let repo = SessionRepository::new(db.pool());

    let active = repo
        .create("Round 1", &["t1".to_string(), "t2".to_string()])
        .await
        .unwrap();
    assert_eq!(active.status, "active");
    assert_eq!(active.team_ids, vec!["t1", "t2"]);

    let done = repo.create("Round 2", &["t1".to_string()]).await.unwrap();
    repo.update(&done.id, None, Some("completed")).await.unwrap();

    let all = repo.list(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let completed = repo.list(Some("completed")).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "Round 2");

    let renamed = repo.update(&active.id, Some("Opening Round"), None).await.unwrap();
    assert_eq!(renamed.name, "Opening Round");
    assert_eq!(renamed.status, "active");
}

#[tokio::test]
async fn deleting_a_session_cascades_to_games_and_penalties() {
    let db = test_db().await;
    let sessions = SessionRepository::new(db.pool());
    let games = GameRepository::new(db.pool());
    let penalties = PenaltyRepository::new(db.pool());

    let session = sessions
        .create("Round 1", &["t1".to_string()])
        .await
        .unwrap();

    let placements = HashMap::from([("Alice".to_string(), 1i64)]);
    let roster = HashMap::from([("t1".to_string(), vec!["Alice".to_string()])]);
    let computed = score_game(&placements, &roster, &ScoringTable::default());
    games
        .create(&session.id, "G1", &placements, &roster, computed)
        .await
        .unwrap();
    penalties
        .create(
            &session.id,
            &CreatePenaltyRequest {
                team_id: "t1".to_string(),
                value: -1,
                reason: "Late".to_string(),
            },
        )
        .await
        .unwrap();

    sessions.delete(&session.id).await.unwrap();

    assert!(games.list_for_session(&session.id).await.unwrap().is_empty());
    assert!(
        penalties
            .list_for_session(&session.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn stored_games_keep_their_frozen_mappings() {
    let db = test_db().await;
    let sessions = SessionRepository::new(db.pool());
    let games = GameRepository::new(db.pool());

    let session = sessions
        .create("Round 1", &["t1".to_string(), "t2".to_string()])
        .await
        .unwrap();

    let placements = HashMap::from([
        ("Alice".to_string(), 1i64),
        ("Bob".to_string(), 2i64),
        ("Carol".to_string(), 3i64),
        ("Dave".to_string(), 4i64),
    ]);
    let roster = HashMap::from([
        ("t1".to_string(), vec!["Alice".to_string(), "Bob".to_string()]),
        ("t2".to_string(), vec!["Carol".to_string(), "Dave".to_string()]),
    ]);
    let computed = score_game(&placements, &roster, &ScoringTable::default());
    let created = games
        .create(&session.id, "G1", &placements, &roster, computed)
        .await
        .unwrap();

    let stored = games.list_for_session(&session.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created.id);
    assert_eq!(stored[0].points["t1"], 7);
    assert_eq!(stored[0].points["t2"], 3);
    assert_eq!(stored[0].placements["t1"], 1);
    assert_eq!(stored[0].player_placements, placements);
}

#[tokio::test]
async fn settings_upsert_and_read_back() {
    let db = test_db().await;
    let repo = SettingsRepository::new(db.pool());

    assert!(repo.all().await.unwrap().is_empty());

    repo.set("league_name", "My League").await.unwrap();
    repo.set("league_name", "Renamed League").await.unwrap();
    repo.set("season", "Season 9").await.unwrap();

    let raw = repo.all().await.unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw["league_name"], "Renamed League");
    assert_eq!(raw["season"], "Season 9");
}

#[tokio::test]
async fn identity_backfill_is_deterministic_and_idempotent() {
    let db = test_db().await;
    let repo = TeamRepository::new(db.pool());

    repo.create(&team_request("Red Rocket Racers", &[]))
        .await
        .unwrap();
    repo.create(&team_request("ace", &[])).await.unwrap();

    let first_pass = backfill_team_identities(db.pool()).await.unwrap();
    assert_eq!(first_pass, 2);

    let teams = repo.list().await.unwrap();
    assert_eq!(teams[0].color.as_deref(), Some(TEAM_COLOR_PALETTE[0]));
    assert_eq!(teams[0].tag.as_deref(), Some("RRR"));
    assert_eq!(teams[1].color.as_deref(), Some(TEAM_COLOR_PALETTE[1]));
    assert_eq!(teams[1].tag.as_deref(), Some("ACE"));

    let second_pass = backfill_team_identities(db.pool()).await.unwrap();
    assert_eq!(second_pass, 0);
}

#[tokio::test]
async fn export_import_roundtrip_preserves_identity() {
    let source = test_db().await;
    let teams = TeamRepository::new(source.pool());
    let sessions = SessionRepository::new(source.pool());
    let games = GameRepository::new(source.pool());
    let penalties = PenaltyRepository::new(source.pool());
    let settings = SettingsRepository::new(source.pool());

    let team = teams
        .create(&CreateTeamRequest {
            name: "Alpha".to_string(),
            players: vec!["Alice".to_string()],
            color: Some("#4caf50".to_string()),
            tag: Some("ALP".to_string()),
        })
        .await
        .unwrap();
    let session = sessions
        .create("Round 1", &[team.id.clone()])
        .await
        .unwrap();

    let placements = HashMap::from([("Alice".to_string(), 1i64)]);
    let roster = HashMap::from([(team.id.clone(), vec!["Alice".to_string()])]);
    let computed = score_game(&placements, &roster, &ScoringTable::default());
    games
        .create(&session.id, "G1", &placements, &roster, computed)
        .await
        .unwrap();
    penalties
        .create(
            &session.id,
            &CreatePenaltyRequest {
                team_id: team.id.clone(),
                value: -2,
                reason: "Late".to_string(),
            },
        )
        .await
        .unwrap();
    settings.set("league_name", "Exported League").await.unwrap();

    let exported = export_snapshot(source.pool()).await.unwrap();

    let target = test_db().await;
    let counts = import_snapshot(target.pool(), &exported).await.unwrap();
    assert_eq!(counts.teams, 1);
    assert_eq!(counts.sessions, 1);

    let reexported = export_snapshot(target.pool()).await.unwrap();
    assert_eq!(
        serde_json::to_value(&exported).unwrap(),
        serde_json::to_value(&reexported).unwrap()
    );
}

#[tokio::test]
async fn empty_import_is_rejected() {
    let db = test_db().await;
    let result = import_snapshot(db.pool(), &DataSnapshot::default()).await;
    assert!(matches!(result, Err(StorageError::Validation(_))));
}

#[tokio::test]
async fn import_with_unknown_team_rolls_back_entirely() {
    let db = test_db().await;

    let snapshot: DataSnapshot = serde_json::from_value(serde_json::json!({
        "teams": [
            {"id": "t1", "name": "Alpha", "players": ["Alice"]}
        ],
        "sessions": [
            {
                "id": "s1",
                "name": "Broken",
                "teamIds": ["t1", "ghost"],
                "status": "active"
            }
        ]
    }))
    .unwrap();

    let result = import_snapshot(db.pool(), &snapshot).await;
    assert!(matches!(result, Err(StorageError::Validation(_))));

    // the team upserted before the failure must not survive the rollback
    let teams = TeamRepository::new(db.pool()).list().await.unwrap();
    assert!(teams.is_empty());
}
