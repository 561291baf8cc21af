//! Conversation domain.
//!
//! - [`step::ConversationStep`] — the fixed ordered question catalog
//! - [`trip_details::TripDetails`] — the accumulated answer set
//! - [`entities::Conversation`] — a session with its transcript and pointer

pub mod entities;
pub mod step;
pub mod trip_details;
