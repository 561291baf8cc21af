//! Console output formatter for the chat session

use colored::Colorize;
use travelwize_application::DeliveryNotice;
use travelwize_domain::ConversationStep;

/// Formats chat messages and notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an assistant message with the step icon and label.
    pub fn assistant(step: ConversationStep, content: &str) -> String {
        format!(
            "{} {}\n{}",
            step.icon(),
            format!("TravelWize [{}]", step.label()).cyan().bold(),
            content
        )
    }

    /// Format the delivery notice shown once the itinerary is complete.
    ///
    /// The session is complete either way; a failed delivery is informational.
    pub fn delivery_notice(notice: &DeliveryNotice) -> String {
        match notice {
            DeliveryNotice::Saved => format!(
                "{} {}",
                "Trip Saved! 🎉".green().bold(),
                "Your travel plan has been saved and will be emailed to you shortly."
            ),
            DeliveryNotice::Failed(reason) => format!(
                "{} Trip details collected. Please check your webhook configuration. ({})",
                "Note:".red().bold(),
                reason
            ),
        }
    }

    /// The welcome banner printed before the first prompt.
    pub fn banner() -> String {
        [
            "",
            "╭─────────────────────────────────────────────╮",
            "│     TravelWize AI - Your Travel Planner     │",
            "╰─────────────────────────────────────────────╯",
            "",
            "Commands:",
            "  /help     - Show this help",
            "  /details  - Show the answers collected so far",
            "  /quit     - Exit",
            "",
        ]
        .join("\n")
    }
}
