//! Messages exchanged between the user and the assistant.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::HandlerId;

/// Identifier assigned by the message log on append.
///
/// Identifiers increase monotonically for the lifetime of a log, across
/// clears, so two messages never share one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Assistant,
    User,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Assistant => "assistant",
            Sender::User => "user",
        }
    }
}

/// Presentation kind of a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    #[default]
    PlainText,
    SuggestionList,
    FeatureHighlight,
}

/// Ordered selectable options plus the handler that resolves them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionList {
    pub options: Vec<String>,
    pub handler: HandlerId,
}

/// Assistant message content before it is stamped by the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub kind: MessageKind,
    pub suggestions: Option<SuggestionList>,
}

impl Reply {
    /// A plain text reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: MessageKind::PlainText,
            suggestions: None,
        }
    }

    /// A reply that highlights a feature.
    pub fn highlight(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: MessageKind::FeatureHighlight,
            suggestions: None,
        }
    }

    /// A reply offering options resolved by `handler`.
    pub fn suggestions(content: impl Into<String>, options: &[&str], handler: HandlerId) -> Self {
        Self {
            content: content.into(),
            kind: MessageKind::SuggestionList,
            suggestions: Some(SuggestionList {
                options: options.iter().map(|o| (*o).to_string()).collect(),
                handler,
            }),
        }
    }

    /// The options offered, empty for plain replies.
    pub fn options(&self) -> &[String] {
        self.suggestions
            .as_ref()
            .map(|s| s.options.as_slice())
            .unwrap_or_default()
    }
}

/// A message in the log.
///
/// `suggestions` is present only when `kind` is
/// [`MessageKind::SuggestionList`]. `generation` records the flow generation
/// that was current when the message was appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<SuggestionList>,
    pub generation: u64,
}

impl Message {
    /// The options offered, empty for messages without suggestions.
    pub fn options(&self) -> &[String] {
        self.suggestions
            .as_ref()
            .map(|s| s.options.as_slice())
            .unwrap_or_default()
    }

    /// The handler bound to this message's options.
    pub fn handler(&self) -> Option<HandlerId> {
        self.suggestions.as_ref().map(|s| s.handler)
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
