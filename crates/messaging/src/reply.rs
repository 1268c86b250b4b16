//! Reply delivery client.

use serde::Serialize;

use crate::error::MessagingError;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Outbound reply payload in the platform wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplyMessage {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
    Sticker {
        #[serde(rename = "packageId")]
        package_id: String,
        #[serde(rename = "stickerId")]
        sticker_id: String,
    },
    Video {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
    Location {
        title: String,
        address: String,
        latitude: f64,
        longitude: f64,
    },
}

#[derive(Serialize)]
struct ReplyRequest<'a> {
    #[serde(rename = "replyToken")]
    reply_token: &'a str,
    messages: &'a [ReplyMessage],
}

/// Client for the platform reply endpoint.
pub struct ReplyClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl std::fmt::Debug for ReplyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyClient")
            .field("access_token", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ReplyClient {
    /// Creates a new client with the given channel access token and API
    /// base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(access_token: String, base_url: String) -> Result<Self, MessagingError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MessagingError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            access_token,
            base_url,
        })
    }

    /// Sends `messages` in response to the event that carried `reply_token`.
    ///
    /// Reply tokens are single-use; a delivery failure cannot be retried
    /// with the same token.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or the API returns a
    /// non-success status.
    pub async fn reply(
        &self,
        reply_token: &str,
        messages: &[ReplyMessage],
    ) -> Result<(), MessagingError> {
        let request = ReplyRequest {
            reply_token,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/v2/bot/message/reply", self.base_url))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(MessagingError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
