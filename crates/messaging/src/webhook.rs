//! Webhook payload parsing.
//!
//! The platform delivers a batch of events per callback. Only message
//! events of a kind this bot handles are returned; everything else is
//! skipped without logging.

use line_bridge_core::{InboundEvent, MessageKind};
use serde::Deserialize;

#[derive(Deserialize)]
struct WebhookPayload {
    #[serde(default)]
    events: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct MessageEvent {
    #[serde(rename = "replyToken")]
    reply_token: String,
    source: Source,
    message: MessageContent,
}

#[derive(Deserialize)]
struct Source {
    // absent for group/room sources, which this bot does not serve
    #[serde(rename = "userId")]
    user_id: String,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum MessageContent {
    Text {
        text: String,
    },
    Image,
    Sticker {
        #[serde(rename = "packageId")]
        package_id: String,
        #[serde(rename = "stickerId")]
        sticker_id: String,
    },
    Video,
    Location {
        #[serde(default)]
        address: String,
        latitude: f64,
        longitude: f64,
    },
}

impl From<MessageEvent> for InboundEvent {
    fn from(event: MessageEvent) -> Self {
        let kind = match event.message {
            MessageContent::Text { text } => MessageKind::Text { text },
            MessageContent::Image => MessageKind::Image,
            MessageContent::Sticker {
                package_id,
                sticker_id,
            } => MessageKind::Sticker {
                package_id,
                sticker_id,
            },
            MessageContent::Video => MessageKind::Video,
            MessageContent::Location {
                address,
                latitude,
                longitude,
            } => MessageKind::Location {
                address,
                latitude,
                longitude,
            },
        };
        Self {
            reply_token: event.reply_token,
            user_id: event.source.user_id,
            kind,
        }
    }
}

/// Parses the raw webhook body into the events this bot handles.
///
/// Non-message events and unrecognized message kinds are dropped silently;
/// the router acks the batch regardless of how much of it was parseable.
#[must_use]
pub fn parse_events(body: &[u8]) -> Vec<InboundEvent> {
    let Ok(payload) = serde_json::from_slice::<WebhookPayload>(body) else {
        return Vec::new();
    };

    payload
        .events
        .into_iter()
        .filter(|event| event.get("type").and_then(|t| t.as_str()) == Some("message"))
        .filter_map(|event| serde_json::from_value::<MessageEvent>(event).ok())
        .map(InboundEvent::from)
        .collect()
}
