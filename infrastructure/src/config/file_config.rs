//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Webhook delivery settings
    pub webhook: FileWebhookConfig,
    /// Chat behavior settings
    pub chat: FileChatConfig,
    /// Transcript logging settings
    pub log: FileLogConfig,
}

/// `[webhook]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    /// Endpoint the completed trip details are POSTed to.
    /// Delivery is skipped (with a notice) when unset.
    pub url: Option<String>,
}

/// `[chat]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Artificial "thinking" delay before each assistant reply.
    pub reply_delay_ms: u64,
    /// Override for the greeting seeded at session start.
    pub greeting: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            greeting: None,
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path of the JSONL conversation log. Disabled when unset.
    pub conversation_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = FileConfig::default();
        assert!(config.webhook.url.is_none());
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert!(config.chat.greeting.is_none());
        assert!(config.log.conversation_file.is_none());
    }

    #[test]
    fn parses_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [webhook]
            url = "https://example.com/webhook/travel"

            [chat]
            reply_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://example.com/webhook/travel")
        );
        assert_eq!(config.chat.reply_delay_ms, 250);
        assert!(config.log.conversation_file.is_none());
    }
}
