//! Outbound Telegram Bot API client
//!
//! Covers the two calls the bot needs: sending HTML-formatted replies and
//! registering the webhook at startup.

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::TelegramConfig;
use crate::error::{PuckbotError, Result};

const API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API client
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Serialize)]
struct SetWebhook<'a> {
    url: &'a str,
    secret_token: &'a str,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            base: format!("{}/bot{}", API_BASE, config.bot_token),
        }
    }

    /// Send an HTML-formatted message to a chat
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let payload = SendMessage {
            chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(format!("{}/sendMessage", self.base))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PuckbotError::Telegram(format!(
                "sendMessage: {} - {}",
                status, body
            )));
        }

        debug!("Reply delivered to chat {}", chat_id);
        Ok(())
    }

    /// Register the webhook endpoint with Telegram
    pub async fn set_webhook(&self, url: &str, secret_token: &str) -> Result<()> {
        let payload = SetWebhook { url, secret_token };

        let response = self
            .client
            .post(format!("{}/setWebhook", self.base))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PuckbotError::Telegram(format!(
                "setWebhook: {} - {}",
                status, body
            )));
        }

        info!("Webhook registered at {}", url);
        Ok(())
    }
}
