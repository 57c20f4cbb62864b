//! Startup backfill that gives every team a display color and short tag.
//!
//! Runs once per process start, before the server accepts requests. Teams
//! that already carry both fields are never touched, so the pass is
//! idempotent and the assignment stays deterministic in team creation
//! order.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Team;
use crate::repository::team::TeamRepository;

/// Accent colors cycled through when assigning defaults.
pub const TEAM_COLOR_PALETTE: [&str; 8] = [
    "#4caf50", "#ff7043", "#ab47bc", "#42a5f5", "#ffc107", "#26c6da", "#ec407a", "#8d6e63",
];

/// Fields to fill in for one team; `None` means the stored value stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPatch {
    pub team_id: String,
    pub color: Option<String>,
    pub tag: Option<String>,
}

/// Derives a short tag from a team name: short names are uppercased whole,
/// multi-word names become initials (up to 4), anything else keeps its
/// first 3 characters.
pub fn derive_tag(name: &str) -> String {
    let name = name.trim();
    if name.chars().count() <= 4 {
        return name.to_uppercase();
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() >= 2 {
        words
            .iter()
            .take(4)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    } else {
        name.chars().take(3).collect::<String>().to_uppercase()
    }
}

/// Computes the patches for a creation-time-ordered snapshot of teams.
///
/// Palette cycling starts after the teams that were already colored, so
/// re-running over a grown roster continues the sequence instead of
/// restarting it.
pub fn identity_defaults(teams: &[Team]) -> Vec<IdentityPatch> {
    let already_colored = teams.iter().filter(|t| t.color.is_some()).count();

    let mut patches = Vec::new();
    let mut assigned_colors = 0;
    for team in teams {
        let needs_color = team.color.is_none();
        let needs_tag = team.tag.is_none();
        if !needs_color && !needs_tag {
            continue;
        }

        let color = needs_color.then(|| {
            let index = (already_colored + assigned_colors) % TEAM_COLOR_PALETTE.len();
            assigned_colors += 1;
            TEAM_COLOR_PALETTE[index].to_string()
        });
        let tag = needs_tag.then(|| derive_tag(&team.name));

        patches.push(IdentityPatch {
            team_id: team.id.clone(),
            color,
            tag,
        });
    }
    patches
}

/// Applies identity defaults to every stored team that is missing them.
/// Returns the number of teams updated.
pub async fn backfill_team_identities(pool: &SqlitePool) -> Result<u64> {
    let repo = TeamRepository::new(pool);
    let teams = repo.list().await?;
    let patches = identity_defaults(&teams);

    let mut updated = 0u64;
    for patch in &patches {
        repo.set_identity(&patch.team_id, patch.color.as_deref(), patch.tag.as_deref())
            .await?;
        updated += 1;
    }

    if updated > 0 {
        tracing::info!(updated, "assigned default team colors and tags");
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str, color: Option<&str>, tag: Option<&str>) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            players: vec![],
            color: color.map(str::to_string),
            tag: tag.map(str::to_string),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn short_names_become_uppercase_tags() {
        assert_eq!(derive_tag("ace"), "ACE");
        assert_eq!(derive_tag("Wolf"), "WOLF");
        assert_eq!(derive_tag("  gg  "), "GG");
    }

    #[test]
    fn multi_word_names_become_initials() {
        assert_eq!(derive_tag("Red Rocket Racers"), "RRR");
        assert_eq!(derive_tag("the quick brown fox jumps"), "TQBF");
    }

    #[test]
    fn long_single_words_keep_first_three_characters() {
        assert_eq!(derive_tag("Underdogs"), "UND");
    }

    #[test]
    fn palette_cycles_in_creation_order() {
        let teams = vec![
            team("a", "Alpha", None, None),
            team("b", "Beta", None, None),
            team("c", "Gamma", None, None),
        ];

        let patches = identity_defaults(&teams);
        assert_eq!(patches.len(), 3);
        assert_eq!(patches[0].color.as_deref(), Some(TEAM_COLOR_PALETTE[0]));
        assert_eq!(patches[1].color.as_deref(), Some(TEAM_COLOR_PALETTE[1]));
        assert_eq!(patches[2].color.as_deref(), Some(TEAM_COLOR_PALETTE[2]));
    }

    #[test]
    fn cycling_starts_after_already_colored_teams() {
        let teams = vec![
            team("a", "Alpha", Some("#111111"), Some("A")),
            team("b", "Beta", Some("#222222"), Some("B")),
            team("c", "Gamma", None, None),
        ];

        let patches = identity_defaults(&teams);
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].color.as_deref(), Some(TEAM_COLOR_PALETTE[2]));
    }

    #[test]
    fn complete_teams_are_left_alone() {
        let teams = vec![team("a", "Alpha", Some("#111111"), Some("ALP"))];
        assert!(identity_defaults(&teams).is_empty());
    }

    #[test]
    fn partial_teams_only_get_the_missing_field() {
        let teams = vec![
            team("a", "Alpha", Some("#111111"), None),
            team("b", "Beta Blockers", None, Some("BB")),
        ];

        let patches = identity_defaults(&teams);
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0].color, None);
        assert_eq!(patches[0].tag.as_deref(), Some("ALP"));
        // "a" already had a color, so "b" takes the next palette slot
        assert_eq!(patches[1].color.as_deref(), Some(TEAM_COLOR_PALETTE[1]));
        assert_eq!(patches[1].tag, None);
    }

    #[test]
    fn palette_wraps_around() {
        let teams: Vec<Team> = (0..10)
            .map(|i| team(&format!("t{i}"), "Longname", None, None))
            .collect();

        let patches = identity_defaults(&teams);
        assert_eq!(patches[8].color.as_deref(), Some(TEAM_COLOR_PALETTE[0]));
        assert_eq!(patches[9].color.as_deref(), Some(TEAM_COLOR_PALETTE[1]));
    }
}
