use sqlx::SqlitePool;
use storage::{
    dto::{game::CreateGameRequest, penalty::CreatePenaltyRequest, stats::SessionScoreEntry},
    error::{Result, StorageError},
    models::{Game, Penalty, Session},
    repository::{
        game::GameRepository, penalty::PenaltyRepository, session::SessionRepository,
    },
    services::{scoring, standings},
};

/// Record a game in a session.
///
/// The scoring tables are read fresh from settings for every game, so a
/// config change applies from the next recorded game onward while the
/// points of already-stored games stay frozen.
pub async fn add_game(
    pool: &SqlitePool,
    session_id: &str,
    request: &CreateGameRequest,
) -> Result<Game> {
    let session = SessionRepository::new(pool).find_by_id(session_id).await?;
    validate_game_request(&session, request)?;

    let table = scoring::load_scoring_table(pool).await?;
    let computed = scoring::score_game(&request.player_placements, &request.team_player_map, &table);

    let repo = GameRepository::new(pool);
    repo.create(
        session_id,
        &request.name,
        &request.player_placements,
        &request.team_player_map,
        computed,
    )
    .await
}

/// Remove a game from a session
pub async fn remove_game(pool: &SqlitePool, session_id: &str, game_id: &str) -> Result<()> {
    let repo = GameRepository::new(pool);
    repo.delete(session_id, game_id).await
}

/// Record a penalty against a team in a session
pub async fn add_penalty(
    pool: &SqlitePool,
    session_id: &str,
    request: &CreatePenaltyRequest,
) -> Result<Penalty> {
    let session = SessionRepository::new(pool).find_by_id(session_id).await?;
    if !session.team_ids.contains(&request.team_id) {
        return Err(StorageError::validation(format!(
            "Team '{}' is not part of this session",
            request.team_id
        )));
    }

    let repo = PenaltyRepository::new(pool);
    repo.create(session_id, request).await
}

/// Remove a penalty from a session
pub async fn remove_penalty(pool: &SqlitePool, session_id: &str, penalty_id: &str) -> Result<()> {
    let repo = PenaltyRepository::new(pool);
    repo.delete(session_id, penalty_id).await
}

/// Compute the session's score table from its stored games and penalties
pub async fn get_session_scores(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<SessionScoreEntry>> {
    let session = SessionRepository::new(pool).find_by_id(session_id).await?;
    let games = GameRepository::new(pool).list_for_session(session_id).await?;
    let penalties = PenaltyRepository::new(pool)
        .list_for_session(session_id)
        .await?;

    Ok(standings::session_scores(&session.team_ids, &games, &penalties))
}

/// All failure cases are checked before anything is written.
fn validate_game_request(session: &Session, request: &CreateGameRequest) -> Result<()> {
    if request.player_placements.is_empty() {
        return Err(StorageError::validation(
            "A game needs at least one placement",
        ));
    }
    if let Some((entrant, position)) = request
        .player_placements
        .iter()
        .find(|&(_, &position)| position < 1)
    {
        return Err(StorageError::validation(format!(
            "Placement for '{entrant}' must be at least 1, got {position}"
        )));
    }
    if request.team_player_map.is_empty() {
        return Err(StorageError::validation("A game needs at least one team"));
    }
    for (team_id, players) in &request.team_player_map {
        if players.is_empty() {
            return Err(StorageError::validation(format!(
                "Team '{team_id}' has an empty roster"
            )));
        }
        if !session.team_ids.contains(team_id) {
            return Err(StorageError::validation(format!(
                "Team '{team_id}' is not part of this session"
            )));
        }
    }
    Ok(())
}
