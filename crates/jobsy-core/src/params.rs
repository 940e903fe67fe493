//! Parameter structures for assistant operations.
//!
//! These are shared by the interfaces that drive the assistant (CLI, MCP)
//! so each can add its own framework derives on top. JSON schema derives are
//! only compiled with the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Flow;

/// Parameters for starting a flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartFlow {
    /// Flow to start: onboarding, job-adding, feature-explanation,
    /// home-greeting, dashboard-help, inactivity-tip or general
    pub flow: Flow,
}

/// Parameters for sending free text to the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SendMessage {
    /// What the user typed
    pub text: String,
}

/// Parameters for choosing a suggestion.
///
/// A `choice` made only of digits picks that option (1-based) of the most
/// recent suggestion list. Anything else is taken as the option text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectSuggestion {
    /// Option text, or its 1-based position
    pub choice: String,
    /// Message offering the suggestion; defaults to the latest list
    #[serde(default)]
    pub message_id: Option<u64>,
}

/// Parameters for reporting navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VisitPage {
    /// Route of the page, e.g. `/dashboard`
    pub route: String,
}

/// Parameters for reporting the authentication status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetAuth {
    /// Whether the user is signed in
    pub authenticated: bool,
    /// Name used in greetings
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SelectSuggestion {
    /// The 1-based position named by `choice`, if it is a number.
    pub fn position(&self) -> Option<usize> {
        let trimmed = self.choice.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        trimmed.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(choice: &str) -> SelectSuggestion {
        SelectSuggestion {
            choice: choice.to_string(),
            message_id: None,
        }
    }

    #[test]
    fn test_select_position() {
        assert_eq!(select("2").position(), Some(2));
        assert_eq!(select(" 3 ").position(), Some(3));
        assert_eq!(select("Show me around!").position(), None);
        assert_eq!(select("").position(), None);
        assert_eq!(select("-1").position(), None);
    }

    #[test]
    fn test_params_deserialize() {
        let start: StartFlow =
            serde_json::from_str(r#"{"flow":"job-adding"}"#).expect("Failed to parse");
        assert_eq!(start.flow, Flow::JobAdding);

        let auth: SetAuth =
            serde_json::from_str(r#"{"authenticated":true}"#).expect("Failed to parse");
        assert!(auth.authenticated);
        assert_eq!(auth.display_name, None);
    }
}
