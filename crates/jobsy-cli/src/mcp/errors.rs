//! Error handling utilities for MCP server

use jobsy_core::AssistantError;
use rmcp::ErrorData;

/// Helper to convert assistant errors to MCP errors
pub fn to_mcp_error(message: &str, error: AssistantError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Rejection for a suggestion that no longer applies.
pub fn stale_suggestion(choice: &str) -> ErrorData {
    ErrorData::invalid_params(
        format!(
            "No current suggestion matches '{choice}'. The list may belong to an earlier \
             conversation; call show_conversation to see the latest one."
        ),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_includes_context() {
        let error = to_mcp_error(
            "Failed to list jobs",
            AssistantError::Configuration {
                message: "broken".to_string(),
            },
        );
        assert!(error.message.contains("Failed to list jobs"));
        assert!(error.message.contains("broken"));
    }

    #[test]
    fn test_stale_suggestion_names_choice() {
        let error = stale_suggestion("Maybe later");
        assert!(error.message.contains("Maybe later"));
    }
}
