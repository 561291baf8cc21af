//! HTTP implementation of the delivery sink.
//!
//! A single JSON POST to the configured webhook URL. Errors (malformed URL,
//! network failure, non-2xx status) map to [`DeliveryError`] and stop there;
//! the use case turns them into a user-facing notice.

use async_trait::async_trait;
use tracing::debug;
use travelwize_application::ports::delivery_sink::{DeliveryError, DeliverySink};
use travelwize_domain::WebhookPayload;

/// Delivery sink posting to a fixed webhook URL over HTTP.
pub struct HttpDeliverySink {
    client: reqwest::Client,
    url: String,
}

impl HttpDeliverySink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DeliverySink for HttpDeliverySink {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), DeliveryError> {
        debug!(url = %self.url, "Posting trip details to webhook");

        let response = self
            .client
            .post(&self.url)
            .header("User-Agent", "TravelWize/0.3 (Webhook Delivery)")
            .json(payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }

        Ok(())
    }
}
