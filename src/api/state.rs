use std::sync::Arc;

use crate::adapters::TelegramClient;
use crate::collector::AllhockeyClient;
use crate::services::StatsService;

/// Shared application state for webhook handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StatsService<AllhockeyClient>>,
    pub telegram: TelegramClient,
    pub webhook_secret: String,
}

impl AppState {
    pub fn new(
        service: Arc<StatsService<AllhockeyClient>>,
        telegram: TelegramClient,
        webhook_secret: String,
    ) -> Self {
        Self {
            service,
            telegram,
            webhook_secret,
        }
    }
}
