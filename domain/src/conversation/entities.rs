//! Conversation session entities.

use super::step::{ConversationStep, FALLBACK_PROMPT, GREETING};
use super::trip_details::TripDetails;
use crate::itinerary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message in the transcript (Entity).
///
/// Messages are immutable once appended and are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

/// An assistant reply computed by [`Conversation::submit`] but not yet
/// appended to the transcript.
///
/// The split mirrors the user-facing flow: the user message lands in the
/// transcript immediately, the reply lands after an artificial "thinking"
/// delay owned by the caller.
#[derive(Debug, Clone)]
pub struct PendingReply {
    /// The assistant's response text.
    pub text: String,
    /// The step that became current with this submission.
    pub step: ConversationStep,
    /// True exactly when this submission moved the conversation into the
    /// terminal step, completing the trip details.
    pub completed: bool,
}

/// A planning conversation session (Entity).
///
/// Owns the append-only transcript, the current step pointer, and the
/// [`TripDetails`] accumulator. Each session is independent; there is no
/// shared state across sessions.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    current: ConversationStep,
    details: TripDetails,
    next_message_id: u64,
}

impl Conversation {
    /// Start a session with the default greeting pre-seeded as the first
    /// assistant message. The pointer starts at the destination step.
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    /// Start a session with a custom greeting text.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            current: ConversationStep::Destination,
            details: TripDetails::default(),
            next_message_id: 1,
        };
        conversation.append(greeting.into(), false);
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn current_step(&self) -> ConversationStep {
        self.current
    }

    pub fn details(&self) -> &TripDetails {
        &self.details
    }

    /// Whether the conversation has reached the terminal step.
    pub fn is_complete(&self) -> bool {
        self.current.is_terminal()
    }

    /// Process one user submission.
    ///
    /// Empty or whitespace-only input is silently ignored: no message is
    /// recorded, no field written, no step advanced, and `None` is returned.
    ///
    /// Otherwise the input is recorded against the current step's field, the
    /// pointer advances one position (clamping at the terminal step), the
    /// user message is appended, and the assistant's reply for the new step
    /// is returned as a [`PendingReply`] for the caller to commit via
    /// [`commit_reply`](Self::commit_reply).
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let was_complete = self.current.is_terminal();
        self.details.record(self.current, input);
        self.current = self.current.next();
        self.append(input.to_string(), true);

        let text = if self.current.is_terminal() {
            itinerary::generate(&self.details)
        } else {
            self.current.prompt().unwrap_or(FALLBACK_PROMPT).to_string()
        };

        Some(PendingReply {
            text,
            step: self.current,
            completed: !was_complete && self.current.is_terminal(),
        })
    }

    /// Append a pending assistant reply to the transcript.
    pub fn commit_reply(&mut self, reply: &PendingReply) -> &Message {
        self.append(reply.text.clone(), false);
        self.messages.last().expect("reply was just appended")
    }

    fn append(&mut self, content: String, is_user: bool) {
        let message = Message {
            id: self.next_message_id,
            content,
            is_user,
            timestamp: Utc::now(),
        };
        self.next_message_id += 1;
        self.messages.push(message);
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(conversation: &mut Conversation, input: &str) -> PendingReply {
        let reply = conversation.submit(input).expect("non-empty input");
        conversation.commit_reply(&reply);
        reply
    }

    #[test]
    fn session_starts_with_one_assistant_message() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.messages()[0].is_user);
        assert_eq!(conversation.messages()[0].content, GREETING);
        assert_eq!(
            conversation.current_step(),
            ConversationStep::Destination
        );
    }

    #[test]
    fn blank_input_changes_nothing() {
        let mut conversation = Conversation::new();
        for input in ["", "   ", "\t\n"] {
            assert!(conversation.submit(input).is_none());
        }
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.current_step(), ConversationStep::Destination);
        assert_eq!(*conversation.details(), TripDetails::default());
    }

    #[test]
    fn pointer_is_monotonic_and_clamps() {
        let mut conversation = Conversation::new();
        let mut last = conversation.current_step().index();
        for i in 0..20 {
            drive(&mut conversation, &format!("answer {i}"));
            let index = conversation.current_step().index();
            assert!(index >= last);
            last = index;
        }
        assert_eq!(conversation.current_step(), ConversationStep::Itinerary);
    }

    #[test]
    fn full_run_produces_one_pair_per_step() {
        let mut conversation = Conversation::new();
        let answers = [
            "Paris",
            "Berlin",
            "2024-05-01 to 2024-05-05",
            "5 days",
            "$1000-2000",
            "flight",
            "2",
            "food, history",
            "moderate",
            "ana@example.com",
        ];
        let mut completions = 0;
        for answer in answers {
            if drive(&mut conversation, answer).completed {
                completions += 1;
            }
        }
        // greeting + one user/assistant pair per non-terminal step
        assert_eq!(conversation.messages().len(), 1 + 2 * answers.len());
        assert_eq!(completions, 1);
        assert!(conversation.is_complete());

        let last = conversation.messages().last().unwrap();
        assert!(!last.is_user);
        assert_eq!(last.content, itinerary::generate(conversation.details()));
    }

    #[test]
    fn submissions_past_terminal_do_not_redeliver() {
        let mut conversation = Conversation::new();
        for answer in ["a", "b", "c", "d", "e", "f", "1", "g", "h", "i"] {
            drive(&mut conversation, answer);
        }
        assert!(conversation.is_complete());
        let details_before = conversation.details().clone();

        let reply = drive(&mut conversation, "thanks!");
        assert!(!reply.completed);
        assert_eq!(reply.step, ConversationStep::Itinerary);
        assert_eq!(*conversation.details(), details_before);
    }

    #[test]
    fn message_ids_are_monotonic() {
        let mut conversation = Conversation::new();
        drive(&mut conversation, "Lisbon");
        drive(&mut conversation, "Porto");
        let ids: Vec<u64> = conversation.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
