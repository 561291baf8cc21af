//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for travelwize
#[derive(Parser, Debug)]
#[command(name = "travelwize")]
#[command(author, version, about = "TravelWize AI - scripted travel planning chat")]
#[command(long_about = r#"
TravelWize walks you through a fixed sequence of trip-planning questions
(destination, dates, travelers, budget, ...), assembles your answers into a
text itinerary, and posts them to a webhook endpoint of your choice.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./travelwize.toml   Project-level config
3. ~/.config/travelwize/config.toml   Global config

Example:
  travelwize --webhook-url https://example.app.n8n.cloud/webhook/travel-agent
  travelwize --delay-ms 0 --quiet
"#)]
pub struct Cli {
    /// Webhook endpoint receiving the completed trip details
    #[arg(short, long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Artificial "thinking" delay before each assistant reply, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the thinking spinner and banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
