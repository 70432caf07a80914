use serde::{Deserialize, Serialize};

/// One row of the league statistics table.
///
/// Stat values stay raw text: the source table uses placeholders for
/// missing numbers and the bot only ever redisplays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name, the matching key
    pub name: String,
    /// Full team name
    pub team: String,
    /// Short team code
    pub team_abbr: String,
    /// Raw single-letter position code from the source
    pub position: String,
    pub points: String,
    pub goals: String,
    pub assists: String,
    pub games_played: String,
    pub plus_minus: String,
    // Optional columns: empty string when the source row has no cell for them
    #[serde(default)]
    pub penalty_minutes: String,
    #[serde(default)]
    pub faceoff_wins: String,
    #[serde(default)]
    pub faceoff_pct: String,
    #[serde(default)]
    pub time_on_ice: String,
    /// Absolute profile URL, empty when unavailable
    #[serde(default)]
    pub profile_url: String,
}

/// A scored candidate produced for one query
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMatch {
    /// Similarity in [0, 1]; exact substring containment pins 0.99
    pub score: f64,
    pub player: PlayerRecord,
}
