//! Trip detail accumulator.

use super::step::ConversationStep;
use serde::{Deserialize, Serialize};

/// The accumulated answer set for a planning session.
///
/// Created empty at session start. Each field is written exactly once, when
/// its corresponding step is current at submission time; fields for steps
/// not yet reached stay absent. Once the conversation reaches the terminal
/// step the details are complete and only read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub destination: Option<String>,
    pub current_city: Option<String>,
    pub dates: Option<String>,
    pub duration: Option<String>,
    pub travelers: Option<u32>,
    pub budget: Option<String>,
    pub transport: Option<String>,
    pub preferences: Option<Vec<String>>,
    pub pace: Option<String>,
    pub email: Option<String>,
}

impl TripDetails {
    /// Record a user answer against the given step.
    ///
    /// Interpretation is per-field: traveler counts parse as an integer with
    /// a fallback of 1, preference lists split on commas and trim each entry,
    /// everything else is stored verbatim. The greeting and terminal steps
    /// carry no field and record nothing.
    pub fn record(&mut self, step: ConversationStep, input: &str) {
        match step {
            ConversationStep::Destination => self.destination = Some(input.to_string()),
            ConversationStep::CurrentCity => self.current_city = Some(input.to_string()),
            ConversationStep::Dates => self.dates = Some(input.to_string()),
            ConversationStep::Duration => self.duration = Some(input.to_string()),
            ConversationStep::Travelers => {
                self.travelers = Some(input.trim().parse().unwrap_or(1));
            }
            ConversationStep::Budget => self.budget = Some(input.to_string()),
            ConversationStep::Transport => self.transport = Some(input.to_string()),
            ConversationStep::Preferences => {
                self.preferences =
                    Some(input.split(',').map(|p| p.trim().to_string()).collect());
            }
            ConversationStep::Pace => self.pace = Some(input.to_string()),
            ConversationStep::Email => self.email = Some(input.to_string()),
            ConversationStep::Greeting | ConversationStep::Itinerary => {}
        }
    }

    /// The travel dates split into a (start, end) pair.
    ///
    /// A literal `" to "` separator denotes a range; without one the same
    /// value serves as both endpoints.
    pub fn date_range(&self) -> (String, String) {
        match &self.dates {
            Some(dates) => match dates.split_once(" to ") {
                Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
                None => (dates.clone(), dates.clone()),
            },
            None => (String::new(), String::new()),
        }
    }

    /// The preference list joined for display, empty when none were given.
    pub fn preferences_joined(&self) -> String {
        self.preferences
            .as_deref()
            .map(|p| p.join(", "))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travelers_parses_integer() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Travelers, "3");
        assert_eq!(details.travelers, Some(3));
    }

    #[test]
    fn travelers_falls_back_to_one_on_garbage() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Travelers, "abc");
        assert_eq!(details.travelers, Some(1));
    }

    #[test]
    fn preferences_split_and_trimmed() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Preferences, "beach, food , nightlife");
        assert_eq!(
            details.preferences,
            Some(vec![
                "beach".to_string(),
                "food".to_string(),
                "nightlife".to_string()
            ])
        );
    }

    #[test]
    fn greeting_and_itinerary_record_nothing() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Greeting, "hello");
        details.record(ConversationStep::Itinerary, "thanks");
        assert_eq!(details, TripDetails::default());
    }

    #[test]
    fn date_range_splits_on_to_separator() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Dates, "2024-05-01 to 2024-05-05");
        assert_eq!(
            details.date_range(),
            ("2024-05-01".to_string(), "2024-05-05".to_string())
        );
    }

    #[test]
    fn date_range_reuses_value_without_separator() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Dates, "next weekend");
        assert_eq!(
            details.date_range(),
            ("next weekend".to_string(), "next weekend".to_string())
        );
    }

    #[test]
    fn other_fields_stored_verbatim() {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Destination, "Paris");
        details.record(ConversationStep::Budget, "$1000-2000");
        assert_eq!(details.destination.as_deref(), Some("Paris"));
        assert_eq!(details.budget.as_deref(), Some("$1000-2000"));
    }
}
