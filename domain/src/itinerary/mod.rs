//! Itinerary synthesis.
//!
//! Pure text generation: the narrative skeleton is fixed, only the collected
//! trip details are interpolated. Deterministic for identical input; missing
//! fields render as empty segments rather than failing.

use crate::conversation::trip_details::TripDetails;

/// Render the itinerary text for a completed answer set.
pub fn generate(details: &TripDetails) -> String {
    let destination = details.destination.as_deref().unwrap_or_default();
    let current_city = details.current_city.as_deref().unwrap_or_default();
    let duration = details.duration.as_deref().unwrap_or_default();
    let budget = details.budget.as_deref().unwrap_or_default();
    let transport = details.transport.as_deref().unwrap_or_default();
    let travelers = details.travelers.unwrap_or(1);
    let people = if travelers == 1 { "person" } else { "people" };
    let preferences = details.preferences_joined();

    format!(
        r#"🎉 **Trip Overview**
A {duration} trip from {current_city} to {destination} for {travelers} {people} with {budget} budget using {transport}.

**Day-by-Day Itinerary**

**Day 1: Arrival & Initial Exploration**
• Arrive in {destination} via {transport}
• Check into accommodation and get settled
• Explore the main city center and local markets
• Try authentic local cuisine for dinner
• Evening: Rest and prepare for tomorrow's adventures

**Day 2: Cultural Discovery & Attractions**
• Morning: Visit historical landmarks and museums
• Afternoon: Local cultural experiences and guided tours
• Evening: Sunset viewing at popular scenic spots
• Dinner at recommended local restaurants

**Day 3: Adventure & Local Experiences**
• Outdoor activities based on your preferences: {preferences}
• Nature excursions or city exploration
• Local food experiences and shopping
• Departure preparations if final day

**Food & Dining Suggestions**
🍜 Try local specialties and street food
🥘 Visit traditional restaurants for authentic cuisine
☕ Experience local cafes and food markets
🍽️ Budget-friendly: Local eateries and food courts

**Travel & Transport Tips**
🚗 Local transport: Public buses, metro, or ride-sharing
🎫 Book transport tickets in advance for better prices
📱 Use local transport apps for easy navigation
🚶 Walking is great for exploring city centers

**Budget & Money-Saving Tips**
💰 Use local currency and avoid tourist traps
🎟️ Look for city tourist passes for multiple attractions
🏨 Book accommodations in advance for better rates
💳 Carry both cash and cards for different vendors

**Final Recommendations**
✈️ Check weather forecast and pack accordingly
📱 Download offline maps and translation apps
🏥 Keep emergency contacts and travel insurance handy
📸 Respect local customs and photography rules

Would you like me to save this itinerary and send it to your email? Your trip details are on their way to your inbox!"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::step::ConversationStep;

    fn sample_details() -> TripDetails {
        let mut details = TripDetails::default();
        details.record(ConversationStep::Destination, "Paris");
        details.record(ConversationStep::CurrentCity, "Berlin");
        details.record(ConversationStep::Dates, "2024-05-01 to 2024-05-05");
        details.record(ConversationStep::Duration, "5 days");
        details.record(ConversationStep::Travelers, "2");
        details.record(ConversationStep::Budget, "$1000-2000");
        details.record(ConversationStep::Transport, "train");
        details.record(ConversationStep::Preferences, "food,history");
        details
    }

    #[test]
    fn interpolates_collected_fields_verbatim() {
        let output = generate(&sample_details());
        for expected in ["Paris", "Berlin", "5 days", "$1000-2000", "train", "food, history"] {
            assert!(output.contains(expected), "missing {expected:?}");
        }
        assert!(output.contains("for 2 people"));
    }

    #[test]
    fn deterministic_for_identical_input() {
        let details = sample_details();
        assert_eq!(generate(&details), generate(&details));
    }

    #[test]
    fn singular_traveler_renders_person() {
        let mut details = sample_details();
        details.travelers = Some(1);
        assert!(generate(&details).contains("for 1 person"));
    }

    #[test]
    fn missing_fields_render_as_empty_segments() {
        let output = generate(&TripDetails::default());
        assert!(output.contains("Trip Overview"));
        assert!(output.contains("preferences: \n"));
    }
}
