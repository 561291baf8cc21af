//! Domain layer for travelwize
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A planning session walks a fixed, ordered catalog of questions
//! ([`ConversationStep`]). Each user submission records one answer field,
//! advances the step pointer one position, and selects the canned prompt for
//! the new step. The pointer clamps at the terminal step.
//!
//! ## Itinerary
//!
//! Once the answer set ([`TripDetails`]) is complete, the [`itinerary`]
//! module renders it into a fixed narrative template. Pure text substitution,
//! no I/O.

pub mod conversation;
pub mod itinerary;
pub mod webhook;

// Re-export commonly used types
pub use conversation::{
    entities::{Conversation, Message, PendingReply},
    step::{ConversationStep, FALLBACK_PROMPT, GREETING},
    trip_details::TripDetails,
};
pub use webhook::{ChatInput, PayloadBody, WebhookPayload};
