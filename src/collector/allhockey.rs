//! HTTP client for the allhockey.ru statistics page

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::collector::cache::PlayerSource;
use crate::collector::extract::extract_players;
use crate::config::SourceConfig;
use crate::domain::PlayerRecord;
use crate::error::{PuckbotError, Result};

/// Fetches and parses the skater statistics table
#[derive(Debug, Clone)]
pub struct AllhockeyClient {
    client: Client,
    url: String,
    /// scheme://host of the source, for rewriting root-relative profile links
    origin: String,
}

impl AllhockeyClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let origin = Url::parse(&config.url)?.origin().ascii_serialization();

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            origin,
        })
    }
}

#[async_trait]
impl PlayerSource for AllhockeyClient {
    /// One full fetch+parse of the statistics table. No retries here;
    /// the calling layer decides what a failure means.
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PuckbotError::Fetch(format!("{} from {}", status, self.url)));
        }

        let body = response.text().await?;
        let extraction = extract_players(&body, &self.origin);
        debug!(
            "Extracted {} players ({} rows skipped)",
            extraction.players.len(),
            extraction.skipped_rows
        );

        Ok(extraction.players)
    }
}
