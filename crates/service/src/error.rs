//! Typed error enum for the handler layer.

use line_bridge_messaging::MessagingError;
use line_bridge_storage::StorageError;
use thiserror::Error;

/// Handler-layer error.
///
/// AI completion failures never appear here: they are caught per call and
/// demoted to a fixed apology reply. What remains — storage, reply
/// delivery, and task-join failures — aborts the event.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    #[error("reply delivery: {0}")]
    Messaging(#[from] MessagingError),

    #[error("blocking task join: {0}")]
    Join(#[from] tokio::task::JoinError),
}
