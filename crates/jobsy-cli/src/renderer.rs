//! Terminal rendering for assistant output
//!
//! Markdown goes through termimad unless colors are disabled, in which case
//! it is printed as is.

use anyhow::Result;
use jobsy_core::{display::Conversation, Message};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so sections stand out.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render messages as they arrive, each followed by a blank line.
    pub fn render_messages<'a>(
        &self,
        messages: impl IntoIterator<Item = &'a Message>,
    ) -> Result<()> {
        for message in messages {
            self.render(&message.to_string())?;
            println!();
        }
        Ok(())
    }

    /// Render a whole conversation.
    pub fn render_conversation(&self, messages: &[Message]) -> Result<()> {
        self.render(&Conversation(messages).to_string())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
