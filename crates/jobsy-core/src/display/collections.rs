//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles its own empty case so callers can print the result
//! directly.

use std::fmt;

use crate::models::{Message, TrackedJob};

/// A conversation rendered message by message, separated by blank lines.
///
/// # Examples
///
/// ```rust
/// use jobsy_core::{AssistantBuilder, AssistantConfig, Flow, display::Conversation};
///
/// let mut assistant = AssistantBuilder::new()
///     .in_memory()
///     .with_config(AssistantConfig::immediate())
///     .build()
///     .unwrap();
/// assistant.start(Flow::General);
///
/// let output = Conversation(assistant.messages()).to_string();
/// assert!(output.starts_with("**Jobsy:**"));
/// ```
pub struct Conversation<'a>(pub &'a [Message]);

impl fmt::Display for Conversation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "_No messages yet._");
        }
        for (i, message) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

/// Jobs recorded by the tracker.
pub struct TrackedJobs(pub Vec<TrackedJob>);

impl TrackedJobs {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackedJob> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TrackedJobs {
    type Item = &'a TrackedJob;
    type IntoIter = std::slice::Iter<'a, TrackedJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TrackedJobs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No jobs tracked yet.")
        } else {
            for job in &self.0 {
                write!(f, "{job}")?;
            }
            Ok(())
        }
    }
}

/// Persisted key/value settings as a markdown list.
pub struct Settings(pub Vec<(String, String)>);

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No flags stored.");
        }
        for (key, value) in &self.0 {
            writeln!(f, "- `{key}` = `{value}`")?;
        }
        Ok(())
    }
}
