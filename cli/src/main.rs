//! CLI entrypoint for TravelWize
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use travelwize_application::{
    ConversationLogger, DeliverySink, NoConversationLogger, NoDeliverySink, RunChatUseCase,
};
use travelwize_infrastructure::{ConfigLoader, HttpDeliverySink, JsonlConversationLogger};
use travelwize_presentation::{ChatRepl, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting TravelWize");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // CLI flags override config file values
    let webhook_url = cli.webhook_url.or(config.webhook.url);
    let reply_delay =
        Duration::from_millis(cli.delay_ms.unwrap_or(config.chat.reply_delay_ms));

    // === Dependency Injection ===
    let sink: Arc<dyn DeliverySink> = match webhook_url {
        Some(url) => {
            info!("Delivering completed trips to {url}");
            Arc::new(HttpDeliverySink::new(url))
        }
        None => Arc::new(NoDeliverySink),
    };

    let logger: Arc<dyn ConversationLogger> = match &config.log.conversation_file {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(l) => Arc::new(l),
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let use_case = RunChatUseCase::new(sink)
        .with_reply_delay(reply_delay)
        .with_conversation_logger(logger);

    let repl = ChatRepl::new(use_case)
        .with_greeting(config.chat.greeting)
        .with_progress(!cli.quiet);

    repl.run().await?;

    Ok(())
}
