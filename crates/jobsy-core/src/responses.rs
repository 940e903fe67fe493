//! Keyword-driven replies to free text.
//!
//! [`respond`] is total: every `(flow, text)` pair maps to a reply or to a
//! flow hand-off, never to silence. Input is lower-cased and matched by
//! substring against ordered keyword tables; the first matching rule wins and
//! each flow context has a designated catch-all.

use crate::{
    models::{Flow, NamedHandler, Reply},
    script,
};

/// What the assistant does with a piece of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Append this assistant message
    Reply(Reply),
    /// Start another flow instead of replying
    StartFlow(Flow),
}

struct KeywordRule {
    keywords: &'static [&'static str],
    outcome: fn() -> Response,
}

impl KeywordRule {
    fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|k| input.contains(k))
    }
}

const GENERAL_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["interview"],
        outcome: || Response::Reply(script::interview_prep()),
    },
    KeywordRule {
        keywords: &["resume"],
        outcome: || Response::Reply(script::resume_tips()),
    },
    KeywordRule {
        keywords: &["cover letter"],
        outcome: || Response::Reply(script::cover_letter_structure()),
    },
    KeywordRule {
        keywords: &["help", "how"],
        outcome: || Response::Reply(script::help_menu()),
    },
    KeywordRule {
        keywords: &["job", "add"],
        outcome: || Response::StartFlow(Flow::JobAdding),
    },
    KeywordRule {
        keywords: &["feature", "tool"],
        outcome: || Response::Reply(script::platform_tools()),
    },
];

const FEATURE_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["dashboard"],
        outcome: || Response::Reply(script::named_reply(NamedHandler::DashboardFeatures)),
    },
    KeywordRule {
        keywords: &["track"],
        outcome: || Response::Reply(script::named_reply(NamedHandler::JobTrackingDetail)),
    },
    KeywordRule {
        keywords: &["cover letter"],
        outcome: || Response::Reply(script::named_reply(NamedHandler::CoverLetterDetail)),
    },
    KeywordRule {
        keywords: &["document"],
        outcome: || Response::Reply(script::named_reply(NamedHandler::DocumentsDetail)),
    },
    KeywordRule {
        keywords: &["analytics", "statistic"],
        outcome: || Response::Reply(script::analytics_detail()),
    },
    KeywordRule {
        keywords: &["interview"],
        outcome: || Response::Reply(script::named_reply(NamedHandler::InterviewDetail)),
    },
];

const GENERAL_TABLES: &[&[KeywordRule]] = &[GENERAL_RULES];
const FEATURE_TABLES: &[&[KeywordRule]] = &[FEATURE_RULES, GENERAL_RULES];

/// Maps free text typed during `flow` to the assistant's response.
pub fn respond(flow: Flow, text: &str) -> Response {
    let input = text.to_lowercase();

    let tables = match flow {
        Flow::FeatureExplanation => FEATURE_TABLES,
        _ => GENERAL_TABLES,
    };

    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|rule| rule.matches(&input))
        .map(|rule| (rule.outcome)())
        .unwrap_or_else(|| Response::Reply(fallback(flow)))
}

/// Catch-all reply for each flow context.
fn fallback(flow: Flow) -> Reply {
    match flow {
        Flow::FeatureExplanation => script::feature_overview(),
        _ => script::default_menu(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HandlerId, MessageKind};

    fn reply_content(response: Response) -> String {
        match response {
            Response::Reply(reply) => reply.content,
            Response::StartFlow(flow) => panic!("expected a reply, got start of {flow}"),
        }
    }

    #[test]
    fn test_interview_takes_precedence_over_help() {
        let content = reply_content(respond(Flow::General, "Can you help me with my interview"));
        assert_eq!(content, script::interview_prep().content);
        assert_ne!(content, script::default_menu().content);
        assert_ne!(content, script::help_menu().content);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let content = reply_content(respond(Flow::General, "My RESUME needs work"));
        assert_eq!(content, script::resume_tips().content);
    }

    #[test]
    fn test_job_keywords_hand_off_to_job_adding() {
        assert_eq!(
            respond(Flow::General, "I want to add something"),
            Response::StartFlow(Flow::JobAdding)
        );
        assert_eq!(
            respond(Flow::Onboarding, "new job"),
            Response::StartFlow(Flow::JobAdding)
        );
    }

    #[test]
    fn test_help_offers_suggestions() {
        match respond(Flow::None, "how does this work?") {
            Response::Reply(reply) => {
                assert_eq!(reply.kind, MessageKind::SuggestionList);
                assert_eq!(
                    reply.suggestions.map(|s| s.handler),
                    Some(HandlerId::General)
                );
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_unmatched_input_uses_default() {
        let content = reply_content(respond(Flow::General, "qwerty"));
        assert_eq!(content, script::default_menu().content);

        let content = reply_content(respond(Flow::InactivityTip, ""));
        assert_eq!(content, script::default_menu().content);
    }

    #[test]
    fn test_feature_explanation_has_own_table_and_default() {
        let content = reply_content(respond(Flow::FeatureExplanation, "tell me about documents"));
        assert_eq!(
            content,
            script::named_reply(NamedHandler::DocumentsDetail).content
        );

        let content = reply_content(respond(Flow::FeatureExplanation, "hmm"));
        assert_eq!(content, script::feature_overview().content);

        // Falls through to the general table before the catch-all
        let content = reply_content(respond(Flow::FeatureExplanation, "my resume"));
        assert_eq!(content, script::resume_tips().content);
    }

    #[test]
    fn test_every_flow_resolves() {
        for flow in Flow::STARTABLE.into_iter().chain([Flow::None]) {
            for text in ["", "   ", "?", "zzz", "interview", "job"] {
                match respond(flow, text) {
                    Response::Reply(reply) => {
                        assert!(
                            !reply.content.trim().is_empty(),
                            "empty reply to {text:?} in {flow}"
                        );
                    }
                    Response::StartFlow(target) => {
                        assert!(target.is_active(), "{text:?} in {flow} started no flow");
                    }
                }
            }
        }
    }
}
