//! Resolution of chosen suggestions into follow-up actions.
//!
//! Each [`HandlerId`] owns a lookup table from option text to
//! [`SuggestionAction`]. Like free-text handling, resolution is total: text
//! that matches no entry lands on the table's default branch.

use crate::models::{Flow, HandlerId, NamedHandler, SuggestionAction};

/// The action for a chosen suggestion plus its bookkeeping side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub action: SuggestionAction,
    /// Choosing this option finishes onboarding for good.
    pub completes_onboarding: bool,
}

/// Resolves `choice` against the table owned by `handler`.
pub fn resolve(handler: HandlerId, choice: &str) -> Resolution {
    let action = match handler {
        HandlerId::Onboarding => onboarding(choice),
        HandlerId::OnboardingNext => onboarding_next(choice),
        HandlerId::Dashboard => dashboard(choice),
        HandlerId::General => general(choice),
        HandlerId::HomeGreeting => home_greeting(choice),
        HandlerId::Features => features(choice),
    };

    // Any answer to the second onboarding question ends onboarding, as does
    // declining the first one. Jumping straight to job-adding does not.
    let completes_onboarding = handler == HandlerId::OnboardingNext
        || action == SuggestionAction::RunNamedHandler(NamedHandler::OnboardingDecline);

    Resolution {
        action,
        completes_onboarding,
    }
}

fn onboarding(choice: &str) -> SuggestionAction {
    match choice {
        "Show me around!" => SuggestionAction::RunNamedHandler(NamedHandler::OnboardingTour),
        "Help me add a job" => SuggestionAction::StartFlow(Flow::JobAdding),
        _ => SuggestionAction::RunNamedHandler(NamedHandler::OnboardingDecline),
    }
}

fn onboarding_next(choice: &str) -> SuggestionAction {
    match choice {
        "Yes, let's do it!" => SuggestionAction::StartFlow(Flow::JobAdding),
        "Tell me about AI features" => {
            SuggestionAction::RunNamedHandler(NamedHandler::OnboardingAiFeatures)
        }
        _ => SuggestionAction::RunNamedHandler(NamedHandler::OnboardingExplore),
    }
}

fn dashboard(choice: &str) -> SuggestionAction {
    match choice {
        "Yes, add a job!" => SuggestionAction::StartFlow(Flow::JobAdding),
        "Show me dashboard features" => {
            SuggestionAction::RunNamedHandler(NamedHandler::DashboardFeatures)
        }
        _ => SuggestionAction::RunNamedHandler(NamedHandler::DashboardDecline),
    }
}

/// The shared help menu matches on fragments, case-sensitively, so the same
/// table serves every option list bound to it.
fn general(choice: &str) -> SuggestionAction {
    if choice.contains("job") || choice.contains("Add") {
        SuggestionAction::StartFlow(Flow::JobAdding)
    } else if choice.contains("features") || choice.contains("Explain") {
        SuggestionAction::RunNamedHandler(NamedHandler::PlatformFeatures)
    } else if choice.contains("tips") {
        SuggestionAction::RunNamedHandler(NamedHandler::JobSearchTips)
    } else if choice.contains("around") || choice.contains("Navigate") {
        SuggestionAction::StartFlow(Flow::Onboarding)
    } else {
        SuggestionAction::RunNamedHandler(NamedHandler::Farewell)
    }
}

fn home_greeting(choice: &str) -> SuggestionAction {
    match choice {
        "Tell me more" => SuggestionAction::StartFlow(Flow::FeatureExplanation),
        "Let me think about it" => SuggestionAction::RunNamedHandler(NamedHandler::ThinkItOver),
        "Remind me later" => SuggestionAction::Minimize,
        _ => SuggestionAction::Dismiss,
    }
}

fn features(choice: &str) -> SuggestionAction {
    match choice {
        "Job tracking" => SuggestionAction::RunNamedHandler(NamedHandler::JobTrackingDetail),
        "AI cover letters" => SuggestionAction::RunNamedHandler(NamedHandler::CoverLetterDetail),
        "Document management" => SuggestionAction::RunNamedHandler(NamedHandler::DocumentsDetail),
        "Interview tips" => SuggestionAction::RunNamedHandler(NamedHandler::InterviewDetail),
        _ => SuggestionAction::RunNamedHandler(NamedHandler::PlatformFeatures),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;

    fn action(handler: HandlerId, choice: &str) -> SuggestionAction {
        resolve(handler, choice).action
    }

    #[test]
    fn test_onboarding_choices() {
        assert_eq!(
            action(HandlerId::Onboarding, "Show me around!"),
            SuggestionAction::RunNamedHandler(NamedHandler::OnboardingTour)
        );
        assert_eq!(
            action(HandlerId::Onboarding, "Help me add a job"),
            SuggestionAction::StartFlow(Flow::JobAdding)
        );
        assert!(resolve(HandlerId::Onboarding, "Maybe later").completes_onboarding);
        assert!(!resolve(HandlerId::Onboarding, "Help me add a job").completes_onboarding);
        assert!(!resolve(HandlerId::Onboarding, "Show me around!").completes_onboarding);
    }

    #[test]
    fn test_every_onboarding_next_choice_completes_onboarding() {
        for choice in script::ONBOARDING_NEXT_OPTIONS {
            assert!(resolve(HandlerId::OnboardingNext, choice).completes_onboarding);
        }
        assert_eq!(
            action(HandlerId::OnboardingNext, "Yes, let's do it!"),
            SuggestionAction::StartFlow(Flow::JobAdding)
        );
    }

    #[test]
    fn test_general_menu_fragments() {
        let cases = [
            ("Add a job", SuggestionAction::StartFlow(Flow::JobAdding)),
            ("Add another job", SuggestionAction::StartFlow(Flow::JobAdding)),
            ("Add a job application", SuggestionAction::StartFlow(Flow::JobAdding)),
            (
                "Show me features",
                SuggestionAction::RunNamedHandler(NamedHandler::PlatformFeatures),
            ),
            (
                "Explain platform features",
                SuggestionAction::RunNamedHandler(NamedHandler::PlatformFeatures),
            ),
            (
                "Job search tips",
                SuggestionAction::RunNamedHandler(NamedHandler::JobSearchTips),
            ),
            ("Show me around", SuggestionAction::StartFlow(Flow::Onboarding)),
            ("Navigate the dashboard", SuggestionAction::StartFlow(Flow::Onboarding)),
            ("I'm all set", SuggestionAction::RunNamedHandler(NamedHandler::Farewell)),
            (
                "Thanks, I'm good!",
                SuggestionAction::RunNamedHandler(NamedHandler::Farewell),
            ),
        ];
        for (choice, expected) in cases {
            assert_eq!(action(HandlerId::General, choice), expected, "{choice}");
        }
    }

    #[test]
    fn test_home_greeting_choices() {
        assert_eq!(
            action(HandlerId::HomeGreeting, "Tell me more"),
            SuggestionAction::StartFlow(Flow::FeatureExplanation)
        );
        assert_eq!(
            action(HandlerId::HomeGreeting, "Remind me later"),
            SuggestionAction::Minimize
        );
        assert_eq!(
            action(HandlerId::HomeGreeting, "No thanks"),
            SuggestionAction::Dismiss
        );
    }

    #[test]
    fn test_unknown_choices_use_default_branch() {
        assert_eq!(
            action(HandlerId::Dashboard, "something else"),
            SuggestionAction::RunNamedHandler(NamedHandler::DashboardDecline)
        );
        assert_eq!(
            action(HandlerId::Features, "?"),
            SuggestionAction::RunNamedHandler(NamedHandler::PlatformFeatures)
        );
    }
}
