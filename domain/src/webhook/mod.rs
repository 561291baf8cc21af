//! Webhook payload value object.
//!
//! The delivery sink receives the completed trip details as a JSON document
//! with a fixed shape: everything nested under `body.chatInput`, all values
//! serialized as strings. The shape matches what the downstream automation
//! workflow expects and is not negotiated.

use crate::conversation::trip_details::TripDetails;
use serde::{Deserialize, Serialize};

/// The complete outbound document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub body: PayloadBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadBody {
    #[serde(rename = "chatInput")]
    pub chat_input: ChatInput,
}

/// The flattened trip details, keyed the way the sink expects.
///
/// `Activity` intentionally duplicates `Preferences`; the downstream
/// workflow reads both keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInput {
    #[serde(rename = "Departure")]
    pub departure: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "StartDate")]
    pub start_date: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "Travelers")]
    pub travelers: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Preferences")]
    pub preferences: String,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Pace")]
    pub pace: String,
    #[serde(rename = "Gmail")]
    pub gmail: String,
}

impl WebhookPayload {
    /// Build the outbound document from a completed answer set.
    ///
    /// Missing fields serialize as empty strings; the traveler count
    /// defaults to "1"; the date range splits on a literal `" to "`.
    pub fn from_details(details: &TripDetails) -> Self {
        let (start_date, end_date) = details.date_range();
        let preferences = details.preferences_joined();

        Self {
            body: PayloadBody {
                chat_input: ChatInput {
                    departure: details.current_city.clone().unwrap_or_default(),
                    destination: details.destination.clone().unwrap_or_default(),
                    start_date,
                    end_date,
                    travelers: details.travelers.unwrap_or(1).to_string(),
                    budget: details.budget.clone().unwrap_or_default(),
                    preferences: preferences.clone(),
                    activity: preferences,
                    pace: details.pace.clone().unwrap_or_default(),
                    gmail: details.email.clone().unwrap_or_default(),
                },
            },
        }
    }
}
