use serde::Serialize;

/// Sentinel user id under which AI-generated replies are logged.
///
/// Shares the `user_id` column with real platform sender ids.
pub const BOT_USER_ID: &str = "bot";

/// One row of the message log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: String,
    pub message: String,
}
