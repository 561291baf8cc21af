//! Configuration loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileLogConfig, FileWebhookConfig};
pub use loader::ConfigLoader;
