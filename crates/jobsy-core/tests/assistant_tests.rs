mod common;

use std::time::Duration;

use common::{create_test_assistant, open_database};
use jobsy_core::{
    AssistantBuilder, AssistantConfig, Bookkeeping, Conversation, Flow, KeyValueStore,
    MessageKind, SelectSuggestion, display::TrackedJobs, script,
};

#[test]
fn test_completed_job_lands_in_database() {
    let (temp_dir, mut assistant) = create_test_assistant(AssistantConfig::immediate());

    assistant.start(Flow::JobAdding);
    for answer in ["Backend Engineer", "Acme", "LinkedIn"] {
        assistant.submit(answer);
    }

    let db = open_database(&temp_dir);
    let jobs = db.list_jobs().expect("Failed to list jobs");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Backend Engineer");
    assert_eq!(jobs[0].company, "Acme");
    assert_eq!(jobs[0].source, "LinkedIn");

    let listing = TrackedJobs(jobs).to_string();
    assert!(listing.contains("Backend Engineer at Acme"));
}

#[test]
fn test_abandoned_job_is_not_tracked() {
    let (temp_dir, mut assistant) = create_test_assistant(AssistantConfig::immediate());

    assistant.start(Flow::JobAdding);
    assistant.submit("Backend Engineer");
    assistant.submit("Acme");
    assistant.dismiss();
    assistant.submit("LinkedIn");

    let db = open_database(&temp_dir);
    assert!(db.list_jobs().expect("Failed to list jobs").is_empty());
}

#[test]
fn test_dashboard_visits_persist_across_restarts() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    {
        let mut db = jobsy_core::Database::new(&db_path).expect("Failed to open database");
        db.mark_onboarding_completed();
    }

    let mut shown = 0;
    for _ in 0..5 {
        let mut assistant = AssistantBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .expect("Failed to create assistant");
        assistant.set_authenticated(true, Some("Ada".to_string()));
        assistant.visit_page("/dashboard");
        assistant.settle();
        if assistant.active_flow() == Flow::DashboardHelp {
            shown += 1;
        }
    }

    assert_eq!(shown, 3);
    let db = jobsy_core::Database::new(&db_path).expect("Failed to open database");
    assert_eq!(
        db.get("jobsy-dashboard-visits").as_deref(),
        Some("3")
    );
}

#[test]
fn test_home_greeting_is_session_scoped() {
    let (temp_dir, mut assistant) = create_test_assistant(AssistantConfig::default());

    assistant.visit_page("/dashboard");
    assistant.settle();
    assert_eq!(assistant.active_flow(), Flow::HomeGreeting);

    // Never written to the persistent store.
    let db = open_database(&temp_dir);
    assert_eq!(db.get("jobsy-home-greeting"), None);
    drop(assistant);

    let (_other_dir, mut fresh) = create_test_assistant(AssistantConfig::default());
    fresh.visit_page("/dashboard");
    fresh.settle();
    assert_eq!(fresh.active_flow(), Flow::HomeGreeting);
}

#[test]
fn test_full_onboarding_walkthrough() {
    let (temp_dir, mut assistant) = create_test_assistant(AssistantConfig::default());

    assistant.set_authenticated(true, Some("Ada".to_string()));
    assistant.advance(Duration::from_secs(2));
    assert_eq!(assistant.active_flow(), Flow::Onboarding);

    assistant.settle();
    assert!(assistant.choose(&SelectSuggestion {
        choice: "1".to_string(),
        message_id: None,
    }));
    assistant.settle();

    assert!(assistant.select_suggestion("Yes, let's do it!"));
    assistant.settle();
    assert_eq!(assistant.active_flow(), Flow::JobAdding);
    assert_eq!(
        assistant.messages().last().map(|m| m.content.clone()),
        Some(script::job_prompt(jobsy_core::models::JobField::Title).content)
    );

    let db = open_database(&temp_dir);
    assert!(db.onboarding_completed());
}

#[test]
fn test_conversation_renders_as_markdown() {
    let (_temp_dir, mut assistant) = create_test_assistant(AssistantConfig::immediate());

    assistant.start(Flow::InactivityTip);
    let output = Conversation(assistant.messages()).to_string();

    assert_eq!(assistant.messages()[0].kind, MessageKind::FeatureHighlight);
    assert!(output.starts_with("**Jobsy:** ✨"));
    assert!(output.contains("1. Add a job\n"));
    assert!(output.contains("3. Thanks, I'm good!\n"));
}
