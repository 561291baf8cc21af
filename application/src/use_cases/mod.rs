//! Application use cases.

pub mod run_chat;

pub use run_chat::{DEFAULT_REPLY_DELAY, DeliveryNotice, RunChatUseCase, TurnOutcome};
