use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const KEY_LEAGUE_NAME: &str = "league_name";
pub const KEY_SEASON: &str = "season";
pub const KEY_DESCRIPTION: &str = "description";
pub const KEY_SCORING: &str = "scoring";
pub const KEY_SCORING_2P: &str = "scoring_2p";

const DEFAULT_LEAGUE_NAME: &str = "Pro League";
const DEFAULT_SEASON: &str = "Season 4";

/// Points awarded per finishing position in games with more than two
/// entrants. Positions beyond fourth fall back to the fourth-place value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoringConfig {
    pub first: i64,
    pub second: i64,
    pub third: i64,
    pub fourth: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            first: 4,
            second: 3,
            third: 2,
            fourth: 1,
        }
    }
}

/// Points for head-to-head games (two or fewer entrants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoringConfig2P {
    pub first: i64,
    pub second: i64,
}

impl Default for ScoringConfig2P {
    fn default() -> Self {
        Self { first: 4, second: 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponse {
    pub league_name: String,
    pub season: String,
    pub description: String,
    pub scoring: ScoringConfig,
    pub scoring_2p: ScoringConfig2P,
}

/// Partial settings update; only the provided fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SettingsUpdate {
    pub league_name: Option<String>,
    pub season: Option<String>,
    pub description: Option<String>,
    pub scoring: Option<ScoringConfig>,
    pub scoring_2p: Option<ScoringConfig2P>,
}

impl SettingsResponse {
    /// Builds the structured settings view from raw key-value rows,
    /// applying defaults for anything missing or unparseable.
    pub fn from_raw(raw: &HashMap<String, String>) -> Self {
        let scoring = raw
            .get(KEY_SCORING)
            .and_then(|v| serde_json::from_str(v).ok())
            .unwrap_or_default();
        let scoring_2p = raw
            .get(KEY_SCORING_2P)
            .and_then(|v| serde_json::from_str(v).ok())
            .unwrap_or_default();

        Self {
            league_name: raw
                .get(KEY_LEAGUE_NAME)
                .cloned()
                .unwrap_or_else(|| DEFAULT_LEAGUE_NAME.to_string()),
            season: raw
                .get(KEY_SEASON)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SEASON.to_string()),
            description: raw.get(KEY_DESCRIPTION).cloned().unwrap_or_default(),
            scoring,
            scoring_2p,
        }
    }
}
