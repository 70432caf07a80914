//! Webhook and health handlers.
//!
//! The webhook handler is the last line of defense: after the secret check
//! it always acknowledges the update with 200, and only logs delivery
//! failures, so one bad message can never take the serving loop down.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::{error, warn};

use crate::api::state::AppState;
use crate::api::types::Update;
use crate::services::stats::GREETING;

const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

pub async fn telegram_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> StatusCode {
    let provided = headers
        .get(SECRET_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if provided != Some(state.webhook_secret.as_str()) {
        warn!("Webhook call with missing or wrong secret token");
        return StatusCode::UNAUTHORIZED;
    }

    if let Some((chat_id, reply)) = reply_for_update(&state, update).await {
        if let Err(e) = state.telegram.send_message(chat_id, &reply).await {
            error!("Failed to deliver reply to chat {}: {}", chat_id, e);
        }
    }

    StatusCode::OK
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Decide the reply for one update, if any.
///
/// Updates without a text message and bot commands other than /start are
/// acknowledged silently.
async fn reply_for_update(state: &AppState, update: Update) -> Option<(i64, String)> {
    let message = update.message?;
    let chat_id = message.chat.id;
    let text = message.text?;
    let text = text.trim();

    let reply = if text == "/start" {
        GREETING.to_string()
    } else if text.starts_with('/') {
        return None;
    } else {
        state.service.lookup_reply(text).await
    };

    Some((chat_id, reply))
}
