//! Application layer for travelwize
//!
//! This crate contains the conversation-driving use case and the ports it
//! depends on (webhook delivery, transcript logging). Infrastructure
//! implements the ports; presentation calls the use case.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    ConversationEvent, ConversationLogger, DeliveryError, DeliverySink, NoConversationLogger,
    NoDeliverySink,
};
pub use use_cases::{DEFAULT_REPLY_DELAY, DeliveryNotice, RunChatUseCase, TurnOutcome};
