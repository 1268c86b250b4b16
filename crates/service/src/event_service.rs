//! One handling function per inbound message kind.

use std::sync::Arc;

use line_bridge_core::{BOT_USER_ID, InboundEvent, MessageKind};
use line_bridge_llm::LlmClient;
use line_bridge_messaging::{ReplyClient, ReplyMessage};
use line_bridge_storage::Storage;
use tokio::task::spawn_blocking;

use crate::ServiceError;

/// Command prefix that routes a text message to sentiment analysis.
pub const SENTIMENT_PREFIX: &str = "分析情緒:";
/// Fixed reply when sentiment analysis fails.
pub const SENTIMENT_FAILURE_REPLY: &str = "情緒分析失敗，請稍後再試。";
/// Fixed reply when free-form completion fails.
pub const COMPLETION_FAILURE_REPLY: &str = "無法生成回覆，請稍後再試。";

const IMAGE_PLACEHOLDER: &str = "[圖片消息]";
const VIDEO_PLACEHOLDER: &str = "[影片消息]";
const LOCATION_PLACEHOLDER: &str = "[位置消息]";

const IMAGE_ACK_REPLY: &str = "很棒的照片喔！";
const VIDEO_ACK_REPLY: &str = "已收到影片！";

const DEMO_IMAGE_URL: &str =
    "https://drive.google.com/uc?export=view&id=1CHpVo2aLucZOhCj68vNFEzMB7r70jgGW";
const DEMO_VIDEO_URL: &str =
    "https://drive.google.com/uc?export=download&id=1BlxpTOvWku4Xy8Wh85lxdH9G9cBESMSR";
const DEMO_VIDEO_PREVIEW_URL: &str =
    "https://drive.google.com/uc?export=view&id=1CQZuufQ7jVxA1MWtc470iedbQ-U1ruMa";

const REPLY_STICKER_PACKAGE_ID: &str = "11537";
const REPLY_STICKER_ID: &str = "52002734";

const DEMO_LOCATION_TITLE: &str = "國立臺灣大學";
const DEMO_LOCATION_ADDRESS: &str = "台北市大安區羅斯福路四段1號";
const DEMO_LOCATION_LATITUDE: f64 = 25.0173405;
const DEMO_LOCATION_LONGITUDE: f64 = 121.5397518;

/// Handler set over the three collaborators.
pub struct EventService {
    storage: Storage,
    llm: Arc<LlmClient>,
    reply: Arc<ReplyClient>,
}

impl EventService {
    pub fn new(storage: Storage, llm: Arc<LlmClient>, reply: Arc<ReplyClient>) -> Self {
        Self { storage, llm, reply }
    }

    /// Handles one inbound event to completion.
    ///
    /// # Errors
    /// Propagates storage and reply-delivery failures. AI failures are
    /// converted to fixed apology replies and do not error.
    pub async fn handle_event(&self, event: InboundEvent) -> Result<(), ServiceError> {
        let InboundEvent {
            reply_token,
            user_id,
            kind,
        } = event;

        match kind {
            MessageKind::Text { text } => self.handle_text(&reply_token, &user_id, &text).await,
            MessageKind::Image => self.handle_image(&reply_token, &user_id).await,
            MessageKind::Sticker { .. } => self.handle_sticker(&reply_token).await,
            MessageKind::Video => self.handle_video(&reply_token, &user_id).await,
            MessageKind::Location { address, .. } => {
                self.handle_location(&reply_token, &user_id, &address).await
            }
        }
    }

    async fn handle_text(
        &self,
        reply_token: &str,
        user_id: &str,
        text: &str,
    ) -> Result<(), ServiceError> {
        self.append(user_id, text).await?;

        if let Some(rest) = text.strip_prefix(SENTIMENT_PREFIX) {
            let to_analyze = rest.trim();
            let reply_text = match self.llm.complete(&sentiment_prompt(to_analyze)).await {
                Ok(analysis) => analysis,
                Err(e) => {
                    tracing::error!("sentiment analysis failed: {e}");
                    SENTIMENT_FAILURE_REPLY.to_owned()
                }
            };
            // Analysis results are not logged to history
            return self.send_text(reply_token, reply_text).await;
        }

        if text.eq_ignore_ascii_case("image") {
            let message = ReplyMessage::Image {
                original_content_url: DEMO_IMAGE_URL.to_owned(),
                preview_image_url: DEMO_IMAGE_URL.to_owned(),
            };
            return Ok(self.reply.reply(reply_token, &[message]).await?);
        }

        if text.eq_ignore_ascii_case("video") {
            let message = ReplyMessage::Video {
                original_content_url: DEMO_VIDEO_URL.to_owned(),
                preview_image_url: DEMO_VIDEO_PREVIEW_URL.to_owned(),
            };
            return Ok(self.reply.reply(reply_token, &[message]).await?);
        }

        let reply_text = match self.llm.complete(text).await {
            Ok(completion) => {
                self.append(BOT_USER_ID, &completion).await?;
                completion
            }
            Err(e) => {
                tracing::error!("completion failed: {e}");
                COMPLETION_FAILURE_REPLY.to_owned()
            }
        };
        self.send_text(reply_token, reply_text).await
    }

    async fn handle_image(&self, reply_token: &str, user_id: &str) -> Result<(), ServiceError> {
        self.append(user_id, IMAGE_PLACEHOLDER).await?;
        self.send_text(reply_token, IMAGE_ACK_REPLY.to_owned()).await
    }

    async fn handle_sticker(&self, reply_token: &str) -> Result<(), ServiceError> {
        // Fixed sticker, not an echo of the one received; nothing persisted
        let message = ReplyMessage::Sticker {
            package_id: REPLY_STICKER_PACKAGE_ID.to_owned(),
            sticker_id: REPLY_STICKER_ID.to_owned(),
        };
        Ok(self.reply.reply(reply_token, &[message]).await?)
    }

    async fn handle_video(&self, reply_token: &str, user_id: &str) -> Result<(), ServiceError> {
        self.append(user_id, VIDEO_PLACEHOLDER).await?;
        self.send_text(reply_token, VIDEO_ACK_REPLY.to_owned()).await
    }

    async fn handle_location(
        &self,
        reply_token: &str,
        user_id: &str,
        address: &str,
    ) -> Result<(), ServiceError> {
        self.append(user_id, &format!("{LOCATION_PLACEHOLDER} {address}"))
            .await?;

        // Demonstration payload, unrelated to the received coordinates
        let message = ReplyMessage::Location {
            title: DEMO_LOCATION_TITLE.to_owned(),
            address: DEMO_LOCATION_ADDRESS.to_owned(),
            latitude: DEMO_LOCATION_LATITUDE,
            longitude: DEMO_LOCATION_LONGITUDE,
        };
        Ok(self.reply.reply(reply_token, &[message]).await?)
    }

    async fn send_text(&self, reply_token: &str, text: String) -> Result<(), ServiceError> {
        Ok(self
            .reply
            .reply(reply_token, &[ReplyMessage::Text { text }])
            .await?)
    }

    /// Runs the synchronous store on the blocking pool.
    async fn append(&self, user_id: &str, message: &str) -> Result<i64, ServiceError> {
        let storage = self.storage.clone();
        let user_id = user_id.to_owned();
        let message = message.to_owned();
        Ok(spawn_blocking(move || storage.append(&user_id, &message)).await??)
    }
}

fn sentiment_prompt(text: &str) -> String {
    format!(
        "請分析以下文本的情緒，分為「正面」、「中性」或「負面」。\n\
         並簡短說明原因（限 50 字內）。\n\
         \n\
         文本：{text}\n\
         ---\n\
         情緒分析結果："
    )
}
