//! Startup configuration loaded from the environment.

use std::path::PathBuf;

use thiserror::Error;

/// Default completion model, matching the service the bot was built around.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
/// Default base URL of the OpenAI-compatible completion endpoint.
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
/// Default base URL of the messaging platform API.
pub const DEFAULT_LINE_BASE_URL: &str = "https://api.line.me";

/// Configuration failure at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Everything the bridge needs at startup.
///
/// Constructed once in the binary and passed down explicitly; never ambient
/// global state.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Shared secret for webhook signature validation.
    pub channel_secret: String,
    /// Access token for the platform reply API.
    pub channel_token: String,
    /// API key for the completion service.
    pub ai_api_key: String,
    pub ai_base_url: String,
    pub model: String,
    pub line_base_url: String,
    pub db_path: PathBuf,
}

impl BridgeConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingVar` if any required secret is absent
    /// or empty; the binary treats this as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            channel_secret: require("LINE_CHANNEL_SECRET")?,
            channel_token: require("LINE_CHANNEL_ACCESS_TOKEN")?,
            ai_api_key: require("GEMINI_API_KEY")?,
            ai_base_url: env_or("LINE_BRIDGE_AI_URL", DEFAULT_AI_BASE_URL),
            model: env_or("LINE_BRIDGE_MODEL", DEFAULT_MODEL),
            line_base_url: env_or("LINE_BRIDGE_LINE_URL", DEFAULT_LINE_BASE_URL),
            db_path: db_path_from_env(),
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

fn env_or(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_owned(),
    }
}

/// Database location: `LINE_BRIDGE_DB` if set, otherwise
/// `<data_local_dir>/line-bridge/chat_history.db`.
///
/// Exposed separately from [`BridgeConfig::from_env`] so maintenance
/// subcommands can open the store without requiring the API secrets.
pub fn db_path_from_env() -> PathBuf {
    if let Ok(p) = std::env::var("LINE_BRIDGE_DB") {
        if !p.is_empty() {
            return PathBuf::from(p);
        }
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("line-bridge")
        .join("chat_history.db")
}
