//! Handler set: one procedure per inbound message kind.

mod error;
mod event_service;

pub use error::ServiceError;
pub use event_service::{
    COMPLETION_FAILURE_REPLY, EventService, SENTIMENT_FAILURE_REPLY, SENTIMENT_PREFIX,
};
