//! HTTP surface for line-bridge: webhook callback, liveness check, and the
//! history API.

mod api_error;
mod blocking;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use line_bridge_service::EventService;
use line_bridge_storage::Storage;

pub use api_error::ApiError;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Channel secret used to validate webhook signatures.
    pub channel_secret: String,
    pub storage: Storage,
    pub events: EventService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/callback", post(handlers::webhook::callback))
        .route(
            "/history/{user_id}",
            get(handlers::history::get_history).delete(handlers::history::delete_history),
        )
        .with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}
