use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers;
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tg", post(handlers::telegram_webhook))
        .route("/health", get(handlers::health))
        .with_state(state)
}
