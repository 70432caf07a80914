//! Query service: cache, matcher and formatter glued behind the single
//! entry point the transport calls per incoming message.

use tracing::{error, warn};

use crate::collector::{PlayerCache, PlayerSource};
use crate::domain::PlayerMatch;
use crate::error::Result;
use crate::format::format_player_card;
use crate::matcher::find_best_matches;

/// Queries shorter than this cannot identify a player
const MIN_QUERY_CHARS: usize = 2;

/// Reply to the /start command
pub const GREETING: &str =
    "Привет! Напиши ФИО игрока КХЛ — пришлю статистику сезона 2025/26 (регулярка) и команду.";

const PROMPT_REPLY: &str = "Введи ФИО, напр.: «Стефан Да Коста».";
const NO_DATA_REPLY: &str = "Не удалось получить таблицу. Попробуй позже.";
const FETCH_FAILED_REPLY: &str = "Не удалось получить статистику. Попробуй позже.";
const NOT_FOUND_REPLY: &str = "Не нашёл игрока в текущем сезоне.";

pub struct StatsService<S> {
    cache: PlayerCache<S>,
    limit: usize,
}

impl<S: PlayerSource> StatsService<S> {
    pub fn new(cache: PlayerCache<S>, limit: usize) -> Self {
        Self { cache, limit }
    }

    /// Ranked, deduplicated matches for a free-text query.
    ///
    /// Triggers a table refresh when the cache is stale; fetch errors
    /// propagate unmodified.
    pub async fn lookup(&self, query: &str) -> Result<Vec<PlayerMatch>> {
        let players = self.cache.players().await?;
        Ok(find_best_matches(query, &players, self.limit))
    }

    /// Full reply text for one incoming message.
    ///
    /// Validation happens here, before the cache or matcher is touched.
    /// A failed refresh is reported to the chat as a retry suggestion;
    /// an empty table and an empty match set get their own replies.
    pub async fn lookup_reply(&self, query: &str) -> String {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return PROMPT_REPLY.to_string();
        }

        let players = match self.cache.players().await {
            Ok(players) => players,
            Err(e) => {
                error!("Stats refresh failed: {}", e);
                return FETCH_FAILED_REPLY.to_string();
            }
        };
        if players.is_empty() {
            warn!("Stats table parsed to zero rows");
            return NO_DATA_REPLY.to_string();
        }

        let matches = find_best_matches(query, &players, self.limit);
        if matches.is_empty() {
            return NOT_FOUND_REPLY.to_string();
        }

        matches
            .iter()
            .map(|m| format_player_card(&m.player))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
