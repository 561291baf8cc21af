//! Thinking indicator shown during the artificial reply delay

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner standing in for the assistant "typing" indicator.
pub struct ThinkingSpinner {
    bar: ProgressBar,
}

impl ThinkingSpinner {
    /// Start the spinner with its standard message.
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("static template is valid"),
        );
        bar.set_message("Planning your trip...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
