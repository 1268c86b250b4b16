//! Helpers for running the synchronous storage layer in async handlers.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use line_bridge_storage::StorageError;

use crate::ApiError;

/// Runs a blocking storage closure and wraps the result in `Json`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Serialize + Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task join: {e}")))?
        .map(Json)
        .map_err(ApiError::from)
}
