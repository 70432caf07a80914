//! End-to-end query flow over a stubbed source: cache, matcher, formatter.

use async_trait::async_trait;
use puckbot::collector::{PlayerCache, PlayerSource};
use puckbot::domain::PlayerRecord;
use puckbot::error::Result;
use puckbot::format::format_player_card;
use puckbot::services::StatsService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::time::Duration;

struct FixedSource {
    players: Vec<PlayerRecord>,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl PlayerSource for FixedSource {
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.players.clone())
    }
}

fn radulov() -> PlayerRecord {
    PlayerRecord {
        name: "Alexander Radulov".to_string(),
        team: "Ак Барс".to_string(),
        team_abbr: "АКБ".to_string(),
        position: "Н".to_string(),
        points: "35".to_string(),
        goals: "14".to_string(),
        assists: "21".to_string(),
        games_played: "42".to_string(),
        plus_minus: "5".to_string(),
        penalty_minutes: "12".to_string(),
        faceoff_wins: String::new(),
        faceoff_pct: String::new(),
        time_on_ice: "18:37".to_string(),
        profile_url: "https://allhockey.ru/stat/player/17".to_string(),
    }
}

fn service_over(
    players: Vec<PlayerRecord>,
) -> (StatsService<FixedSource>, Arc<AtomicUsize>) {
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = FixedSource {
        players,
        fetches: Arc::clone(&fetches),
    };
    let cache = PlayerCache::new(source, Duration::from_secs(60));
    (StatsService::new(cache, 3), fetches)
}

#[tokio::test]
async fn last_name_query_yields_one_substring_match_and_a_full_card() {
    let (service, _) = service_over(vec![radulov()]);

    let matches = service.lookup("Radulov").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].score, 0.99);

    let card = format_player_card(&matches[0].player);
    assert!(card.contains("<b>Alexander Radulov</b>"));
    assert!(card.contains("И: 42  Ш: 14  А: 21  О: 35  +/-: 5"));
    assert!(card.contains("Штр: 12 | Ср.время: 18:37"));
    assert!(card.contains("<a href=\"https://allhockey.ru/stat/player/17\">Профиль на Allhockey</a>"));
}

#[tokio::test]
async fn queries_inside_the_ttl_share_a_single_fetch() {
    let (service, fetches) = service_over(vec![radulov()]);

    service.lookup("Radulov").await.unwrap();
    service.lookup("Радулов").await.unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn short_query_reply_never_touches_the_source() {
    let (service, fetches) = service_over(vec![radulov()]);

    let reply = service.lookup_reply("x").await;

    assert!(reply.contains("Введи ФИО"));
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}
