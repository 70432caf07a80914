//! Time-bounded memoization of the fetched player table

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::domain::PlayerRecord;
use crate::error::Result;

/// Anything that can produce the full player table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>>;
}

struct CacheSlot {
    fetched_at: Instant,
    players: Arc<Vec<PlayerRecord>>,
}

/// TTL cache around the expensive fetch+parse.
///
/// The slot lock is held across a refresh, so concurrent callers that all
/// observe a stale entry wait for one in-flight fetch instead of dogpiling
/// the source.
pub struct PlayerCache<S> {
    source: S,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl<S: PlayerSource> PlayerCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached table, refreshing it first when older than the TTL.
    ///
    /// A failed refresh leaves the previous entry and its timestamp in place
    /// and returns the error, so the next call attempts another fetch.
    pub async fn players(&self) -> Result<Arc<Vec<PlayerRecord>>> {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&entry.players));
            }
        }

        let players = Arc::new(self.source.fetch_players().await?);
        debug!("Player table refreshed: {} rows", players.len());
        *slot = Some(CacheSlot {
            fetched_at: Instant::now(),
            players: Arc::clone(&players),
        });

        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuckbotError;
    use mockall::Sequence;

    fn player(name: &str) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            team: "СКА".to_string(),
            team_abbr: "СКА".to_string(),
            position: "Н".to_string(),
            points: "35".to_string(),
            goals: "14".to_string(),
            assists: "21".to_string(),
            games_played: "42".to_string(),
            plus_minus: "5".to_string(),
            penalty_minutes: String::new(),
            faceoff_wins: String::new(),
            faceoff_pct: String::new(),
            time_on_ice: String::new(),
            profile_url: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn serves_cached_rows_within_the_ttl() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .times(1)
            .returning(|| Ok(vec![player("Alexander Radulov")]));

        let cache = PlayerCache::new(source, Duration::from_secs(60));
        let first = cache.players().await.unwrap();
        tokio::time::advance(Duration::from_secs(59)).await;
        let second = cache.players().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_once_after_the_ttl_expires() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .times(2)
            .returning(|| Ok(vec![player("Alexander Radulov")]));

        let cache = PlayerCache::new(source, Duration::from_secs(60));
        cache.players().await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        cache.players().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_keeps_the_slot_stale_and_retries_next_call() {
        let mut seq = Sequence::new();
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![player("Первый Состав")]));
        source
            .expect_fetch_players()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(PuckbotError::Fetch("503 Service Unavailable".to_string())));
        source
            .expect_fetch_players()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![player("Второй Состав")]));

        let cache = PlayerCache::new(source, Duration::from_secs(60));
        assert_eq!(cache.players().await.unwrap()[0].name, "Первый Состав");

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(cache.players().await.is_err());

        // the failure did not advance the timestamp: the very next call fetches
        assert_eq!(cache.players().await.unwrap()[0].name, "Второй Состав");
    }

    #[tokio::test(start_paused = true)]
    async fn error_propagates_when_the_first_fetch_fails() {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .times(1)
            .returning(|| Err(PuckbotError::Fetch("timeout".to_string())));

        let cache = PlayerCache::new(source, Duration::from_secs(60));
        assert!(cache.players().await.is_err());
    }
}
