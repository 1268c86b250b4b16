//! Response types (Serialize)

use serde::Serialize;

/// History API item. `user_id` is intentionally omitted — it is the path
/// segment the caller queried with.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}
