//! Infrastructure layer for travelwize
//!
//! Adapters for the application ports: HTTP webhook delivery, TOML
//! configuration loading, and JSONL transcript logging.

pub mod config;
pub mod logging;
pub mod webhook;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use webhook::HttpDeliverySink;
