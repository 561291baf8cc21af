//! Ports (interfaces) the application layer depends on.

pub mod conversation_logger;
pub mod delivery_sink;

pub use conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
pub use delivery_sink::{DeliveryError, DeliverySink, NoDeliverySink};
