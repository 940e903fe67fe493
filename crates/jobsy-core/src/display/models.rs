//! Display implementations for domain models.
//!
//! Everything renders as markdown so the same text works in the terminal
//! renderer and in MCP tool results.

use std::{fmt, time::Duration};

use super::datetime::{Elapsed, LocalDateTime};
use crate::models::{AssistantStatus, Message, MessageKind, Sender, TrackedJob, Visibility};

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sender::Assistant => "Jobsy",
            Sender::User => "You",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MessageKind::FeatureHighlight => {
                writeln!(f, "**{}:** ✨ {}", self.sender, self.content)?
            }
            MessageKind::PlainText | MessageKind::SuggestionList => {
                writeln!(f, "**{}:** {}", self.sender, self.content)?
            }
        }

        // Numbered so a choice can be made by position.
        if !self.options().is_empty() {
            writeln!(f)?;
            for (i, option) in self.options().iter().enumerate() {
                writeln!(f, "{}. {option}", i + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match (self.visible, self.minimized) {
            (false, _) => "hidden",
            (true, true) => "minimized",
            (true, false) => "open",
        };
        write!(f, "{state}")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl fmt::Display for AssistantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Assistant")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Flow**: {} (generation {})",
            self.flow, self.generation
        )?;
        writeln!(f, "- **Window**: {}", self.visibility)?;
        writeln!(
            f,
            "- **Clock**: {}",
            Elapsed(Duration::from_millis(self.clock_ms))
        )?;
        writeln!(
            f,
            "- **Messages**: {} ({} pending)",
            self.messages, self.pending
        )?;

        match (self.authenticated, &self.display_name) {
            (true, Some(name)) => writeln!(f, "- **Signed in**: yes ({name})")?,
            (authenticated, _) => writeln!(f, "- **Signed in**: {}", yes_no(authenticated))?,
        }
        writeln!(
            f,
            "- **Page**: {}",
            self.route.as_deref().unwrap_or("none")
        )?;

        writeln!(f)?;
        writeln!(f, "### Bookkeeping")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Onboarding completed**: {}",
            yes_no(self.onboarding_completed)
        )?;
        writeln!(f, "- **Dashboard visits**: {}", self.dashboard_visits)?;
        writeln!(
            f,
            "- **Home greeting shown**: {}",
            yes_no(self.home_greeting_shown)
        )?;

        Ok(())
    }
}

impl fmt::Display for TrackedJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {} at {}", self.id, self.title, self.company)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        if !self.source.is_empty() {
            writeln!(f, "- **Source**: {}", self.source)?;
        }
        writeln!(f, "- **Applied**: {}", LocalDateTime(&self.applied_at))?;
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Flow, HandlerId, JobStatus, MessageId, Reply};

    fn message(sender: Sender, reply: Reply) -> Message {
        Message {
            id: MessageId(1),
            content: reply.content,
            sender,
            timestamp: Timestamp::now(),
            kind: reply.kind,
            suggestions: reply.suggestions,
            generation: 1,
        }
    }

    #[test]
    fn test_message_display_numbers_options() {
        let msg = message(
            Sender::Assistant,
            Reply::suggestions("Pick one", &["First", "Second"], HandlerId::General),
        );
        let output = msg.to_string();

        assert!(output.starts_with("**Jobsy:** Pick one"));
        assert!(output.contains("1. First\n"));
        assert!(output.contains("2. Second\n"));
    }

    #[test]
    fn test_message_display_user_and_highlight() {
        let user = message(Sender::User, Reply::text("Hello"));
        assert_eq!(user.to_string(), "**You:** Hello\n");

        let tip = message(Sender::Assistant, Reply::highlight("A tip"));
        assert_eq!(tip.to_string(), "**Jobsy:** ✨ A tip\n");
    }

    #[test]
    fn test_visibility_display() {
        let mut visibility = Visibility::default();
        assert_eq!(visibility.to_string(), "hidden");
        visibility.show();
        assert_eq!(visibility.to_string(), "open");
        visibility.minimize();
        assert_eq!(visibility.to_string(), "minimized");
    }

    #[test]
    fn test_status_display() {
        let status = AssistantStatus {
            flow: Flow::General,
            generation: 2,
            visibility: Visibility {
                visible: true,
                minimized: false,
            },
            clock_ms: 1500,
            messages: 3,
            pending: 1,
            authenticated: true,
            display_name: Some("Ada".to_string()),
            route: Some("/dashboard".to_string()),
            onboarding_completed: true,
            dashboard_visits: 2,
            home_greeting_shown: false,
        };
        let output = status.to_string();

        assert!(output.contains("- **Flow**: general (generation 2)"));
        assert!(output.contains("- **Window**: open"));
        assert!(output.contains("- **Clock**: 0:01.500"));
        assert!(output.contains("- **Signed in**: yes (Ada)"));
        assert!(output.contains("- **Dashboard visits**: 2"));
    }

    #[test]
    fn test_tracked_job_display() {
        let job = TrackedJob {
            id: 7,
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            source: "LinkedIn".to_string(),
            status: JobStatus::Applied,
            applied_at: Timestamp::now(),
        };
        let output = job.to_string();

        assert!(output.starts_with("## 7. Backend Engineer at Acme"));
        assert!(output.contains("- **Status**: applied"));
        assert!(output.contains("- **Source**: LinkedIn"));
    }
}
