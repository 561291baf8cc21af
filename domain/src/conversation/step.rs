//! Conversation step catalog.
//!
//! The planning conversation walks a fixed, ordered sequence of questions.
//! [`ConversationStep`] enumerates every position in that sequence; the
//! catalog order is the only valid advancement order.

use serde::{Deserialize, Serialize};

/// One position in the fixed conversation catalog.
///
/// Each non-terminal step is associated with exactly one [`TripDetails`]
/// field and one canned prompt. The pointer only ever moves forward one
/// position per user submission, clamping at [`ConversationStep::Itinerary`].
///
/// [`TripDetails`]: super::trip_details::TripDetails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversationStep {
    Greeting,
    Destination,
    CurrentCity,
    Dates,
    Duration,
    Budget,
    Transport,
    Travelers,
    Preferences,
    Pace,
    Email,
    Itinerary,
}

/// Filler response for steps with no canned prompt.
pub const FALLBACK_PROMPT: &str = "I'm here to help you plan your perfect trip!";

/// Greeting pre-seeded as the first assistant message of every session.
pub const GREETING: &str = "Hi 👋, I'm your AI Travel Planner! Let's plan your \
perfect trip. May I know your destination and travel dates?";

impl ConversationStep {
    /// The full catalog, in advancement order.
    pub const CATALOG: [ConversationStep; 12] = [
        ConversationStep::Greeting,
        ConversationStep::Destination,
        ConversationStep::CurrentCity,
        ConversationStep::Dates,
        ConversationStep::Duration,
        ConversationStep::Budget,
        ConversationStep::Transport,
        ConversationStep::Travelers,
        ConversationStep::Preferences,
        ConversationStep::Pace,
        ConversationStep::Email,
        ConversationStep::Itinerary,
    ];

    /// Position of this step within the catalog.
    pub fn index(self) -> usize {
        Self::CATALOG
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Self::CATALOG.len() - 1)
    }

    /// The step that follows this one, clamped at the terminal step.
    ///
    /// Advancing past the end of the catalog is a no-op.
    pub fn next(self) -> ConversationStep {
        Self::CATALOG
            .get(self.index() + 1)
            .copied()
            .unwrap_or(ConversationStep::Itinerary)
    }

    /// Whether this is the terminal step of the conversation.
    pub fn is_terminal(self) -> bool {
        self == ConversationStep::Itinerary
    }

    /// The canned prompt the assistant sends when this step becomes current.
    ///
    /// `None` for the greeting (seeded separately at session start) and for
    /// the terminal step (whose response is the synthesized itinerary).
    /// Callers fall back to [`FALLBACK_PROMPT`] for unmapped steps.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            ConversationStep::Greeting => None,
            ConversationStep::Destination => {
                Some("May I know your destination? Where would you like to go?")
            }
            ConversationStep::CurrentCity => {
                Some("Great choice! What's your current city or starting point?")
            }
            ConversationStep::Dates => Some(
                "Perfect! When are you planning to travel? Please share your travel dates.",
            ),
            ConversationStep::Duration => {
                Some("Excellent! How many days/nights will your trip be?")
            }
            ConversationStep::Budget => Some(
                "Got it! What's your approximate budget for this trip? \
                 (e.g., $1000-2000, luxury, budget-friendly)",
            ),
            ConversationStep::Transport => Some(
                "Wonderful! What's your preferred mode of transport? \
                 (flight, train, car, bus, etc.)",
            ),
            ConversationStep::Travelers => {
                Some("Perfect! How many people will be traveling?")
            }
            ConversationStep::Preferences => Some(
                "Great! Any specific preferences? (adventure, culture, relaxation, \
                 food, shopping, nightlife, beaches, mountains, historical sites, etc.)",
            ),
            ConversationStep::Pace => Some(
                "Awesome! What's your preferred travel pace? \
                 (slow and relaxed, moderate, fast-paced/packed schedule)",
            ),
            ConversationStep::Email => Some(
                "Perfect! What's your email address so I can send you the itinerary?",
            ),
            ConversationStep::Itinerary => None,
        }
    }

    /// Short human-readable label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            ConversationStep::Greeting => "greeting",
            ConversationStep::Destination => "destination",
            ConversationStep::CurrentCity => "starting point",
            ConversationStep::Dates => "travel dates",
            ConversationStep::Duration => "duration",
            ConversationStep::Budget => "budget",
            ConversationStep::Transport => "transport",
            ConversationStep::Travelers => "travelers",
            ConversationStep::Preferences => "preferences",
            ConversationStep::Pace => "pace",
            ConversationStep::Email => "email",
            ConversationStep::Itinerary => "itinerary",
        }
    }

    /// Emoji icon shown next to the step label.
    pub fn icon(self) -> &'static str {
        match self {
            ConversationStep::Greeting | ConversationStep::Preferences => "❤️",
            ConversationStep::Destination
            | ConversationStep::CurrentCity
            | ConversationStep::Transport
            | ConversationStep::Itinerary => "📍",
            ConversationStep::Dates
            | ConversationStep::Duration
            | ConversationStep::Pace => "📅",
            ConversationStep::Budget => "💲",
            ConversationStep::Travelers => "👥",
            ConversationStep::Email => "✉️",
        }
    }
}

impl std::fmt::Display for ConversationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_starts_with_greeting_and_ends_with_itinerary() {
        assert_eq!(ConversationStep::CATALOG[0], ConversationStep::Greeting);
        assert_eq!(
            *ConversationStep::CATALOG.last().unwrap(),
            ConversationStep::Itinerary
        );
    }

    #[test]
    fn next_walks_the_catalog_in_order() {
        assert_eq!(
            ConversationStep::Greeting.next(),
            ConversationStep::Destination
        );
        assert_eq!(
            ConversationStep::Destination.next(),
            ConversationStep::CurrentCity
        );
        assert_eq!(ConversationStep::Email.next(), ConversationStep::Itinerary);
    }

    #[test]
    fn next_clamps_at_terminal_step() {
        assert_eq!(
            ConversationStep::Itinerary.next(),
            ConversationStep::Itinerary
        );
    }

    #[test]
    fn only_itinerary_is_terminal() {
        for step in ConversationStep::CATALOG {
            assert_eq!(step.is_terminal(), step == ConversationStep::Itinerary);
        }
    }

    #[test]
    fn every_question_step_has_a_prompt() {
        for step in ConversationStep::CATALOG {
            match step {
                ConversationStep::Greeting | ConversationStep::Itinerary => {
                    assert!(step.prompt().is_none())
                }
                _ => assert!(step.prompt().is_some(), "missing prompt for {step:?}"),
            }
        }
    }
}
