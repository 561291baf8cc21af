//! Port for delivering the completed trip details to an external sink.
//!
//! The sink is an opaque HTTP endpoint (an automation webhook). Delivery is
//! fire-and-forget: the outcome is surfaced to the user as a notice but never
//! affects the conversation state, and there are no retries.

use async_trait::async_trait;
use thiserror::Error;
use travelwize_domain::WebhookPayload;

/// Errors a delivery attempt can produce.
///
/// All variants are terminal for the attempt; callers convert them into a
/// user-facing notice rather than propagating them.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("no webhook endpoint configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(String),

    #[error("endpoint returned status {0}")]
    Status(u16),
}

/// Port for the outbound webhook delivery.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    /// Deliver the payload once. No retries, no delivery confirmation.
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), DeliveryError>;
}

/// Sink used when no webhook endpoint is configured.
///
/// Always fails with [`DeliveryError::NotConfigured`], which the use case
/// converts into the same non-fatal notice as any other delivery failure.
pub struct NoDeliverySink;

#[async_trait]
impl DeliverySink for NoDeliverySink {
    async fn deliver(&self, _payload: &WebhookPayload) -> Result<(), DeliveryError> {
        Err(DeliveryError::NotConfigured)
    }
}
