//! Run Chat use case.
//!
//! Drives one planning conversation: records each submission against the
//! current step, advances the pointer, commits the assistant's reply after an
//! artificial "thinking" delay, and triggers the one-shot webhook delivery
//! when the conversation completes.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::delivery_sink::DeliverySink;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use travelwize_domain::{Conversation, ConversationStep, WebhookPayload};

/// Default artificial delay before the assistant's reply is committed.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Outcome of the one-shot delivery at conversation completion.
///
/// Presentation-only information: whichever variant comes back, the
/// transcript and trip details are already final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryNotice {
    /// The sink accepted the payload.
    Saved,
    /// Delivery failed (network error, non-2xx, or no endpoint configured).
    Failed(String),
}

/// Result of one processed submission.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The assistant reply appended to the transcript.
    pub reply: String,
    /// The step that is now current.
    pub step: ConversationStep,
    /// True exactly when this submission completed the conversation.
    pub completed: bool,
    /// Present only on the completing submission.
    pub delivery: Option<DeliveryNotice>,
}

/// Use case for driving a planning conversation.
///
/// Holds the injected delivery sink and conversation logger; the
/// [`Conversation`] itself is owned by the caller so each session stays
/// independent of the use case wiring.
pub struct RunChatUseCase {
    sink: Arc<dyn DeliverySink>,
    conversation_logger: Arc<dyn ConversationLogger>,
    reply_delay: Duration,
}

impl RunChatUseCase {
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self {
            sink,
            conversation_logger: Arc::new(NoConversationLogger),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    /// Set the artificial reply delay (zero disables it).
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Process one user submission.
    ///
    /// Returns `None` for empty or whitespace-only input, which leaves the
    /// conversation untouched. Otherwise waits out the reply delay, commits
    /// the assistant message, and on the completing submission performs the
    /// single fire-and-forget delivery.
    pub async fn submit(
        &self,
        conversation: &mut Conversation,
        input: &str,
    ) -> Option<TurnOutcome> {
        let answered_step = conversation.current_step();
        let pending = conversation.submit(input)?;

        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            json!({ "step": answered_step, "content": input.trim() }),
        ));
        debug!(step = %pending.step, "Submission recorded");

        if !self.reply_delay.is_zero() {
            sleep(self.reply_delay).await;
        }

        conversation.commit_reply(&pending);
        self.conversation_logger.log(ConversationEvent::new(
            "assistant_message",
            json!({ "step": pending.step, "content": pending.text }),
        ));

        let delivery = if pending.completed {
            Some(self.deliver(conversation).await)
        } else {
            None
        };

        Some(TurnOutcome {
            reply: pending.text,
            step: pending.step,
            completed: pending.completed,
            delivery,
        })
    }

    /// Perform the one-shot delivery. Failure never propagates past here.
    async fn deliver(&self, conversation: &Conversation) -> DeliveryNotice {
        let payload = WebhookPayload::from_details(conversation.details());

        let notice = match self.sink.deliver(&payload).await {
            Ok(()) => {
                info!("Trip details delivered to webhook");
                DeliveryNotice::Saved
            }
            Err(e) => {
                warn!("Webhook delivery failed: {e}");
                DeliveryNotice::Failed(e.to_string())
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            "delivery",
            json!({
                "ok": notice == DeliveryNotice::Saved,
                "payload": payload,
            }),
        ));

        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::delivery_sink::DeliveryError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use travelwize_domain::TripDetails;

    struct RecordingSink {
        payloads: Mutex<Vec<WebhookPayload>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                payloads: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn deliveries(&self) -> Vec<WebhookPayload> {
            self.payloads.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DeliverySink for RecordingSink {
        async fn deliver(&self, payload: &WebhookPayload) -> Result<(), DeliveryError> {
            self.payloads.lock().unwrap().push(payload.clone());
            if self.fail {
                Err(DeliveryError::Request("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    const ANSWERS: [&str; 10] = [
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

    fn use_case(sink: &Arc<RecordingSink>) -> RunChatUseCase {
        RunChatUseCase::new(sink.clone()).with_reply_delay(Duration::ZERO)
    }

    async fn run_to_completion(
        use_case: &RunChatUseCase,
        conversation: &mut Conversation,
    ) -> TurnOutcome {
        let mut last = None;
        for answer in ANSWERS {
            last = use_case.submit(conversation, answer).await;
        }
        last.expect("conversation ran")
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let sink = RecordingSink::new(false);
        let use_case = use_case(&sink);
        let mut conversation = Conversation::new();

        assert!(use_case.submit(&mut conversation, "   ").await.is_none());
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(*conversation.details(), TripDetails::default());
    }

    #[tokio::test]
    async fn completion_delivers_exactly_once() {
        let sink = RecordingSink::new(false);
        let use_case = use_case(&sink);
        let mut conversation = Conversation::new();

        let outcome = run_to_completion(&use_case, &mut conversation).await;
        assert!(outcome.completed);
        assert_eq!(outcome.delivery, Some(DeliveryNotice::Saved));

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 1);
        let chat_input = &deliveries[0].body.chat_input;
        assert_eq!(chat_input.destination, "Paris");
        assert_eq!(chat_input.departure, "Berlin");
        assert_eq!(chat_input.start_date, "2024-05-01");
        assert_eq!(chat_input.end_date, "2024-05-05");
        assert_eq!(chat_input.travelers, "2");
        assert_eq!(chat_input.preferences, "food, history");
        assert_eq!(chat_input.gmail, "ana@example.com");

        // Further submissions after completion never redeliver.
        let outcome = use_case.submit(&mut conversation, "thanks!").await.unwrap();
        assert!(!outcome.completed);
        assert!(outcome.delivery.is_none());
        assert_eq!(sink.deliveries().len(), 1);
    }

    #[tokio::test]
    async fn delivery_failure_is_a_notice_not_an_error() {
        let sink = RecordingSink::new(true);
        let use_case = use_case(&sink);
        let mut conversation = Conversation::new();

        let outcome = run_to_completion(&use_case, &mut conversation).await;
        assert!(outcome.completed);
        assert!(matches!(
            outcome.delivery,
            Some(DeliveryNotice::Failed(_))
        ));

        // Transcript and details are unaffected by the failure.
        assert_eq!(conversation.messages().len(), 1 + 2 * ANSWERS.len());
        assert_eq!(
            conversation.details().destination.as_deref(),
            Some("Paris")
        );
        assert!(conversation.is_complete());
    }

    #[tokio::test]
    async fn transcript_grows_by_one_pair_per_submission() {
        let sink = RecordingSink::new(false);
        let use_case = use_case(&sink);
        let mut conversation = Conversation::new();

        for (i, answer) in ANSWERS.iter().enumerate() {
            use_case.submit(&mut conversation, answer).await.unwrap();
            assert_eq!(conversation.messages().len(), 1 + 2 * (i + 1));
        }

        let last = conversation.messages().last().unwrap();
        assert!(!last.is_user);
        assert_eq!(
            last.content,
            travelwize_domain::itinerary::generate(conversation.details())
        );
    }
}
