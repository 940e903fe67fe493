//! Tagged continuations bound to suggestion lists.
//!
//! Messages never carry executable code. A suggestion-list message names the
//! [`HandlerId`] that owns its options; when one is chosen the suggestion
//! resolver turns the pair into a [`SuggestionAction`], which the flow
//! controller then performs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Flow;

/// Identifies the table that resolves a suggestion list's options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HandlerId {
    /// First onboarding question
    Onboarding,
    /// Second onboarding question, after the tour
    OnboardingNext,
    /// Dashboard help offer
    Dashboard,
    /// Catch-all help menu shared by several flows
    General,
    /// Options offered to visitors on the home greeting
    HomeGreeting,
    /// Feature tour topics
    Features,
}

impl HandlerId {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerId::Onboarding => "onboarding",
            HandlerId::OnboardingNext => "onboarding-next",
            HandlerId::Dashboard => "dashboard",
            HandlerId::General => "general",
            HandlerId::HomeGreeting => "home-greeting",
            HandlerId::Features => "features",
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scripted continuation that replies within the current flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NamedHandler {
    /// Explain the dashboard, then ask whether to add a first job
    OnboardingTour,
    /// Onboarding postponed; marks onboarding complete
    OnboardingDecline,
    /// Describe the AI tools; marks onboarding complete
    OnboardingAiFeatures,
    /// User wants to explore alone; marks onboarding complete
    OnboardingExplore,
    /// Walk through the dashboard areas
    DashboardFeatures,
    /// Dashboard help declined
    DashboardDecline,
    /// Summarize everything the platform offers
    PlatformFeatures,
    /// Share job search tips
    JobSearchTips,
    /// Say goodbye, then hide the assistant
    Farewell,
    /// Acknowledge a hesitant visitor, then minimize the assistant
    ThinkItOver,
    /// Describe job tracking
    JobTrackingDetail,
    /// Describe the cover letter generator
    CoverLetterDetail,
    /// Describe document management
    DocumentsDetail,
    /// Describe interview preparation
    InterviewDetail,
}

impl NamedHandler {
    /// Whether the handler's reply is the last scripted message of its flow.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            NamedHandler::OnboardingDecline
                | NamedHandler::OnboardingAiFeatures
                | NamedHandler::OnboardingExplore
                | NamedHandler::DashboardFeatures
                | NamedHandler::DashboardDecline
                | NamedHandler::Farewell
                | NamedHandler::ThinkItOver
        )
    }
}

/// Follow-up action selected by a suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", tag = "action", content = "target")]
pub enum SuggestionAction {
    /// Replace the active conversation with another flow
    StartFlow(Flow),
    /// Reply through a scripted continuation
    RunNamedHandler(NamedHandler),
    /// Hide the assistant
    Dismiss,
    /// Collapse the assistant without ending the flow
    Minimize,
}
