use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use crate::blocking::blocking_json;
use crate::response_types::{DeleteResponse, HistoryItem};
use crate::{ApiError, AppState};

/// `GET /history/{user_id}` — every logged message for the user, in
/// insertion order. No pagination; any caller may read any user's log.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<HistoryItem>>, ApiError> {
    let storage = state.storage.clone();
    blocking_json(move || {
        let entries = storage.history(&user_id)?;
        Ok(entries
            .into_iter()
            .map(|e| HistoryItem {
                id: e.id,
                message: e.message,
            })
            .collect())
    })
    .await
}

/// `DELETE /history/{user_id}` — bulk delete; succeeds even when nothing
/// matched.
pub async fn delete_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let storage = state.storage.clone();
    blocking_json(move || {
        let deleted = storage.delete_history(&user_id)?;
        tracing::debug!("deleted {deleted} history rows for {user_id}");
        Ok(DeleteResponse { status: "success" })
    })
    .await
}
