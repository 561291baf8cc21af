//! REPL (Read-Eval-Print Loop) for the planning chat

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ThinkingSpinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use travelwize_application::RunChatUseCase;
use travelwize_domain::{Conversation, ConversationStep};

/// Interactive planning chat REPL
pub struct ChatRepl {
    use_case: RunChatUseCase,
    greeting: Option<String>,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunChatUseCase) -> Self {
        Self {
            use_case,
            greeting: None,
            show_progress: true,
        }
    }

    /// Override the greeting seeded at session start
    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        self.greeting = greeting;
        self
    }

    /// Set whether to show the thinking spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("travelwize").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let mut conversation = match &self.greeting {
            Some(greeting) => Conversation::with_greeting(greeting.clone()),
            None => Conversation::new(),
        };

        if self.show_progress {
            println!("{}", ConsoleFormatter::banner());
        }
        println!(
            "{}\n",
            ConsoleFormatter::assistant(
                ConversationStep::Greeting,
                &conversation.messages()[0].content
            )
        );

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Empty input is silently ignored, per the driver contract
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line, &conversation) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_submission(&mut conversation, line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str, conversation: &Conversation) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /details         - Show the answers collected so far");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            "/details" => {
                let details = conversation.details();
                println!();
                println!("Collected so far (current step: {}):", conversation.current_step());
                println!("  destination: {}", details.destination.as_deref().unwrap_or("-"));
                println!("  from:        {}", details.current_city.as_deref().unwrap_or("-"));
                println!("  dates:       {}", details.dates.as_deref().unwrap_or("-"));
                println!("  duration:    {}", details.duration.as_deref().unwrap_or("-"));
                println!("  budget:      {}", details.budget.as_deref().unwrap_or("-"));
                println!("  transport:   {}", details.transport.as_deref().unwrap_or("-"));
                println!(
                    "  travelers:   {}",
                    details.travelers.map(|t| t.to_string()).as_deref().unwrap_or("-")
                );
                println!("  preferences: {}", details.preferences_joined());
                println!("  pace:        {}", details.pace.as_deref().unwrap_or("-"));
                println!("  email:       {}", details.email.as_deref().unwrap_or("-"));
                println!();
                false
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_submission(&self, conversation: &mut Conversation, input: &str) {
        let spinner = self.show_progress.then(ThinkingSpinner::start);

        let outcome = self.use_case.submit(conversation, input).await;

        if let Some(spinner) = spinner {
            spinner.finish();
        }

        let Some(outcome) = outcome else {
            return;
        };

        println!();
        println!("{}\n", ConsoleFormatter::assistant(outcome.step, &outcome.reply));

        if let Some(notice) = &outcome.delivery {
            println!("{}\n", ConsoleFormatter::delivery_notice(notice));
        }
    }
}
