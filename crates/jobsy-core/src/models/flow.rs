//! The closed set of scripted conversations.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named, linear scripted conversation the assistant can be in.
///
/// At most one flow is active at a time. [`Flow::None`] means the assistant
/// is idle: either nothing has started yet, the active script reached a
/// terminal message, or the assistant was dismissed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Flow {
    /// No scripted conversation is running
    #[default]
    None,
    /// First-login walkthrough
    Onboarding,
    /// Three-question job capture
    JobAdding,
    /// Tour of the platform's features
    FeatureExplanation,
    /// Welcome for visitors who are not signed in
    HomeGreeting,
    /// Help offered on dashboard visits
    DashboardHelp,
    /// Random tip surfaced after a period of inactivity
    InactivityTip,
    /// Open-ended help conversation
    General,
}

impl Flow {
    /// Every flow that can be started, in declaration order.
    pub const STARTABLE: [Flow; 7] = [
        Flow::Onboarding,
        Flow::JobAdding,
        Flow::FeatureExplanation,
        Flow::HomeGreeting,
        Flow::DashboardHelp,
        Flow::InactivityTip,
        Flow::General,
    ];

    /// Kebab-case identifier used on the command line and over MCP.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::None => "none",
            Flow::Onboarding => "onboarding",
            Flow::JobAdding => "job-adding",
            Flow::FeatureExplanation => "feature-explanation",
            Flow::HomeGreeting => "home-greeting",
            Flow::DashboardHelp => "dashboard-help",
            Flow::InactivityTip => "inactivity-tip",
            Flow::General => "general",
        }
    }

    /// Whether a scripted conversation is running.
    pub fn is_active(&self) -> bool {
        *self != Flow::None
    }
}

impl FromStr for Flow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "none" => Ok(Flow::None),
            "onboarding" => Ok(Flow::Onboarding),
            "job-adding" | "add-job" => Ok(Flow::JobAdding),
            "feature-explanation" | "features" => Ok(Flow::FeatureExplanation),
            "home-greeting" | "greeting" => Ok(Flow::HomeGreeting),
            "dashboard-help" => Ok(Flow::DashboardHelp),
            "inactivity-tip" | "tip" => Ok(Flow::InactivityTip),
            "general" => Ok(Flow::General),
            _ => Err(format!("Invalid flow: {s}")),
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
