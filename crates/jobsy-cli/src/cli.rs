//! Command handlers and the interactive chat loop
//!
//! One-shot commands (`ask`, `start`) run on the logical clock: they queue
//! the script and settle it at once. The chat loop instead drives the clock
//! from the tokio timer so scripted messages arrive with their real delays.
//!
//! ```text
//! stdin lines ─┐
//!              ├─▶ select! ─▶ Assistant ─▶ new messages ─▶ renderer
//! tick (100ms) ┘
//! ```
//!
//! A single task owns the assistant, so every mutation is serialized.

use std::time::Duration;

use anyhow::{Context, Result};
use jobsy_core::{
    display::{Settings, TrackedJobs},
    Assistant, Database, Flow, MessageId, Visibility,
};
use log::{debug, info};
use tokio::{
    io::{stdin, AsyncBufReadExt, BufReader},
    time::{interval, Instant, MissedTickBehavior},
};

use crate::renderer::TerminalRenderer;

/// How often the chat loop moves the assistant's clock.
const TICK: Duration = Duration::from_millis(100);

const CHAT_HELP: &str = "\
# Jobsy chat

Type to talk to Jobsy. Commands:

- `/N` choose suggestion N of the latest list
- `/start <flow>` start a flow (onboarding, job-adding, features, greeting, dashboard-help, tip, general)
- `/dismiss`, `/minimize`, `/restore` control the window
- `/visit <route>` navigate, e.g. `/visit /dashboard`
- `/login [name]`, `/logout` change the signed-in user
- `/status` show the assistant state
- `/quit` leave the chat
";

/// A line typed into the chat.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatInput {
    Say(String),
    Choose(usize),
    Start(Flow),
    Dismiss,
    Minimize,
    Restore,
    Visit(String),
    Login(Option<String>),
    Logout,
    Status,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl ChatInput {
    /// Plain text is said to the assistant; a leading `/` marks a command.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ChatInput::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return ChatInput::Say(line.to_string());
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
            return match name.parse() {
                Ok(position) => ChatInput::Choose(position),
                Err(_) => ChatInput::Invalid(format!("No suggestion {name}")),
            };
        }

        match name {
            "start" if rest.is_empty() => ChatInput::Invalid("Usage: /start <flow>".to_string()),
            "start" => rest.parse().map_or_else(ChatInput::Invalid, ChatInput::Start),
            "dismiss" | "close" => ChatInput::Dismiss,
            "minimize" | "min" => ChatInput::Minimize,
            "restore" | "open" => ChatInput::Restore,
            "visit" if rest.is_empty() => ChatInput::Invalid("Usage: /visit <route>".to_string()),
            "visit" => ChatInput::Visit(rest.to_string()),
            "login" => ChatInput::Login((!rest.is_empty()).then(|| rest.to_string())),
            "logout" => ChatInput::Logout,
            "status" => ChatInput::Status,
            "help" | "?" => ChatInput::Help,
            "quit" | "exit" | "q" => ChatInput::Quit,
            _ => ChatInput::Invalid(format!("Unknown command: /{name}")),
        }
    }
}

/// Drives an [`Assistant`] from the terminal.
pub struct Cli {
    assistant: Assistant,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(assistant: Assistant, renderer: TerminalRenderer) -> Self {
        Self {
            assistant,
            renderer,
        }
    }

    /// Starts `flow` (if any), says `text`, and prints the settled
    /// conversation.
    pub fn ask(mut self, text: &str, flow: Option<Flow>) -> Result<()> {
        if let Some(flow) = flow {
            self.assistant.start(flow);
        }
        self.assistant.submit(text);
        self.assistant.settle();
        self.renderer.render_conversation(self.assistant.messages())
    }

    /// Starts `flow` and prints its script up to the first question.
    pub fn start(mut self, flow: Flow) -> Result<()> {
        self.assistant.start(flow);
        self.assistant.settle();
        self.renderer.render_conversation(self.assistant.messages())
    }

    /// Prints the persisted bookkeeping flags, or forgets them.
    pub fn flags(mut database: Database, renderer: &TerminalRenderer, reset: bool) -> Result<()> {
        if reset {
            let removed = database
                .clear_settings()
                .context("Failed to clear flags")?;
            info!("Cleared {removed} bookkeeping flags");
            return renderer.render(&format!("Cleared {removed} flag(s).\n"));
        }

        let settings = database.list_settings().context("Failed to read flags")?;
        renderer.render(&format!("# Flags\n\n{}", Settings(settings)))
    }

    /// Prints tracked jobs, most recently added first.
    pub fn jobs(database: &Database, renderer: &TerminalRenderer) -> Result<()> {
        let jobs = TrackedJobs(database.list_jobs().context("Failed to list jobs")?);
        let title = if jobs.is_empty() {
            "# Tracked Jobs\n\n".to_string()
        } else {
            format!("# Tracked Jobs ({})\n\n", jobs.len())
        };
        renderer.render(&format!("{title}{jobs}"))
    }

    /// Runs the interactive chat until `/quit` or end of input.
    pub async fn chat(mut self, user: Option<String>, page: Option<String>) -> Result<()> {
        let started = Instant::now();
        let mut seen: Option<MessageId> = None;
        let mut window = self.assistant.visibility();

        self.renderer.render(CHAT_HELP)?;
        println!();

        if let Some(name) = user {
            self.assistant.set_authenticated(true, Some(name));
        }
        if let Some(route) = page {
            self.assistant.visit_page(&route);
        }

        let mut lines = BufReader::new(stdin()).lines();
        let mut ticker = interval(TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    self.assistant.advance_to(started.elapsed());
                    match line.context("Failed to read input")? {
                        Some(line) => {
                            if !self.handle(ChatInput::parse(&line))? {
                                break;
                            }
                        }
                        None => {
                            debug!("End of input, settling pending messages");
                            self.assistant.settle();
                            self.show_new(&mut seen, &mut window)?;
                            break;
                        }
                    }
                }
                _ = ticker.tick() => {
                    self.assistant.advance_to(started.elapsed());
                }
            }
            self.show_new(&mut seen, &mut window)?;
        }

        Ok(())
    }

    /// Applies one chat input. Returns `false` when the chat should end.
    fn handle(&mut self, input: ChatInput) -> Result<bool> {
        match input {
            ChatInput::Say(text) => {
                self.assistant.submit(&text);
            }
            ChatInput::Choose(position) => {
                if !self.assistant.select_option(position) {
                    self.renderer
                        .render(&format!("_No suggestion {position} to choose._\n"))?;
                }
            }
            ChatInput::Start(flow) => self.assistant.start(flow),
            ChatInput::Dismiss => self.assistant.dismiss(),
            ChatInput::Minimize => self.assistant.minimize(),
            ChatInput::Restore => self.assistant.restore(),
            ChatInput::Visit(route) => self.assistant.visit_page(&route),
            ChatInput::Login(name) => self.assistant.set_authenticated(true, name),
            ChatInput::Logout => self.assistant.set_authenticated(false, None),
            ChatInput::Status => self.renderer.render(&self.assistant.status().to_string())?,
            ChatInput::Help => self.renderer.render(CHAT_HELP)?,
            ChatInput::Quit => return Ok(false),
            ChatInput::Empty => {}
            ChatInput::Invalid(reason) => self.renderer.render(&format!("_{reason}_\n"))?,
        }
        Ok(true)
    }

    /// Prints assistant messages appended since `seen` and any change of
    /// window state.
    fn show_new(&self, seen: &mut Option<MessageId>, window: &mut Visibility) -> Result<()> {
        let fresh = self.assistant.messages_since(*seen);
        if let Some(last) = fresh.last() {
            *seen = Some(last.id);
            self.renderer
                .render_messages(fresh.iter().filter(|m| !m.is_from_user()))?;
        }

        let visibility = self.assistant.visibility();
        if visibility != *window {
            *window = visibility;
            self.renderer
                .render(&format!("_Jobsy is now {visibility}._\n"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_said() {
        assert_eq!(
            ChatInput::parse("  how do I prepare?  "),
            ChatInput::Say("how do I prepare?".to_string())
        );
        assert_eq!(ChatInput::parse("   "), ChatInput::Empty);
    }

    #[test]
    fn test_numbered_choice() {
        assert_eq!(ChatInput::parse("/2"), ChatInput::Choose(2));
        assert!(matches!(
            ChatInput::parse("/99999999999999999999999"),
            ChatInput::Invalid(_)
        ));
    }

    #[test]
    fn test_start_parses_flow() {
        assert_eq!(
            ChatInput::parse("/start job-adding"),
            ChatInput::Start(Flow::JobAdding)
        );
        assert_eq!(
            ChatInput::parse("/start features"),
            ChatInput::Start(Flow::FeatureExplanation)
        );
        assert!(matches!(ChatInput::parse("/start"), ChatInput::Invalid(_)));
        assert!(matches!(
            ChatInput::parse("/start nowhere"),
            ChatInput::Invalid(_)
        ));
    }

    #[test]
    fn test_window_and_session_commands() {
        assert_eq!(ChatInput::parse("/dismiss"), ChatInput::Dismiss);
        assert_eq!(ChatInput::parse("/minimize"), ChatInput::Minimize);
        assert_eq!(ChatInput::parse("/restore"), ChatInput::Restore);
        assert_eq!(
            ChatInput::parse("/visit /dashboard"),
            ChatInput::Visit("/dashboard".to_string())
        );
        assert!(matches!(ChatInput::parse("/visit"), ChatInput::Invalid(_)));
        assert_eq!(
            ChatInput::parse("/login Ada"),
            ChatInput::Login(Some("Ada".to_string()))
        );
        assert_eq!(ChatInput::parse("/login"), ChatInput::Login(None));
        assert_eq!(ChatInput::parse("/logout"), ChatInput::Logout);
        assert_eq!(ChatInput::parse("/status"), ChatInput::Status);
        assert_eq!(ChatInput::parse("/quit"), ChatInput::Quit);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ChatInput::parse("/dance"),
            ChatInput::Invalid("Unknown command: /dance".to_string())
        );
    }
}
