use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use line_bridge_messaging::{parse_events, validate_signature};

use crate::{ApiError, AppState};

/// `POST /callback` — inbound webhook.
///
/// Validates the signature over the raw body before any parsing. The fixed
/// `"OK"` ack is returned regardless of how many events the batch carried
/// or how many were recognized.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let signature = headers
        .get("X-Line-Signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !validate_signature(&state.channel_secret, &body, signature) {
        tracing::warn!(
            "webhook signature verification failed (signature: {})",
            if signature.is_empty() { "missing" } else { "invalid" }
        );
        return Err(ApiError::BadRequest("invalid signature".to_owned()));
    }

    for event in parse_events(&body) {
        state.events.handle_event(event).await?;
    }

    Ok("OK")
}
