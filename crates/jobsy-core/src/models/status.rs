//! Point-in-time summary of the assistant.

use serde::{Deserialize, Serialize};

use super::{Flow, Visibility};

/// What the assistant is doing and what its triggers know.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantStatus {
    /// Active flow, `none` when idle
    pub flow: Flow,
    /// Current flow generation
    pub generation: u64,
    pub visibility: Visibility,
    /// Logical clock in milliseconds
    pub clock_ms: u64,
    /// Messages currently in the log
    pub messages: usize,
    /// Scheduled callbacks, stale ones included
    pub pending: usize,
    pub authenticated: bool,
    pub display_name: Option<String>,
    pub route: Option<String>,
    pub onboarding_completed: bool,
    pub dashboard_visits: u32,
    pub home_greeting_shown: bool,
}
