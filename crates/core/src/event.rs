/// One inbound message notification from the messaging platform.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    /// Single-use handle required to send a response to this event.
    pub reply_token: String,
    /// Sender id as reported by the platform. Not validated against any
    /// identity system.
    pub user_id: String,
    pub kind: MessageKind,
}

/// Message payload of an inbound event.
///
/// Closed set: kinds the platform sends but this bot does not handle are
/// dropped during webhook parsing and never reach the handler set.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    Text {
        text: String,
    },
    Image,
    Sticker {
        package_id: String,
        sticker_id: String,
    },
    Video,
    Location {
        address: String,
        latitude: f64,
        longitude: f64,
    },
}
