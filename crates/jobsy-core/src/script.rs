//! Scripted assistant wording.
//!
//! Every line the assistant can say lives here so the flow logic reads as
//! control flow only.

use crate::models::{HandlerId, JobField, NamedHandler, Reply};

// Onboarding
pub const ONBOARDING_OPTIONS: [&str; 3] = ["Show me around!", "Help me add a job", "Maybe later"];
pub const ONBOARDING_NEXT_OPTIONS: [&str; 3] = [
    "Yes, let's do it!",
    "Tell me about AI features",
    "I'll explore myself",
];

// Job adding
pub const JOB_COMPLETION_OPTIONS: [&str; 3] =
    ["Add another job", "Show me features", "I'm all set"];

// Dashboard help
pub const DASHBOARD_OPTIONS: [&str; 3] =
    ["Yes, add a job!", "Show me dashboard features", "Not now"];

// Inactivity tip
pub const INACTIVITY_OPTIONS: [&str; 3] = ["Add a job", "Show me features", "Thanks, I'm good!"];
pub const INACTIVITY_TIPS: [&str; 4] = [
    "💡 Did you know you can track interview dates and follow-up reminders for each job?",
    "📄 Pro tip: Upload different versions of your resume for different types of roles!",
    "✨ Use the AI Cover Letter tool to create personalized cover letters for each application!",
    "📊 Check your application statistics to see your success rate and identify patterns!",
];

// Home greeting
pub const HOME_GREETING_OPTIONS: [&str; 4] = [
    "Tell me more",
    "Let me think about it",
    "Remind me later",
    "No thanks",
];

// Feature explanation
pub const FEATURE_OPTIONS: [&str; 4] = [
    "Job tracking",
    "AI cover letters",
    "Document management",
    "Interview tips",
];

// General help menus
pub const GENERAL_OPTIONS: [&str; 4] = [
    "Add a job",
    "Explain features",
    "Job search tips",
    "Show me around",
];
pub const DEFAULT_OPTIONS: [&str; 4] = [
    "Add a job application",
    "Explain platform features",
    "Job search tips",
    "Navigate the dashboard",
];

pub fn onboarding_greeting(name: Option<&str>) -> Reply {
    let salutation = match name {
        Some(name) if !name.trim().is_empty() => format!("Hey there, {}! 👋", name.trim()),
        _ => "Hey there! 👋".to_string(),
    };
    Reply::text(format!(
        "{salutation} I'm Jobsy, your Job Journal assistant. Welcome to your new job tracking \
         companion! I'm here to help you master this platform and land your dream job."
    ))
}

pub fn onboarding_offer() -> Reply {
    Reply::suggestions(
        "Want me to show you around? I can explain how everything works and help you add your \
         first job application!",
        &ONBOARDING_OPTIONS,
        HandlerId::Onboarding,
    )
}

pub fn onboarding_first_job_offer() -> Reply {
    Reply::suggestions(
        "Ready to add your first job application?",
        &ONBOARDING_NEXT_OPTIONS,
        HandlerId::OnboardingNext,
    )
}

pub fn job_adding_intro() -> Reply {
    Reply::text(
        "Perfect! Let me help you add a job application quickly. I'll ask you a few simple \
         questions, and I'll handle the rest! 🚀",
    )
}

/// Question asked for each job field.
pub fn job_prompt(field: JobField) -> Reply {
    Reply::text(match field {
        JobField::Title => "First, what's the job title you applied for?",
        JobField::Company => "Great! Now, which company is this for?",
        JobField::Source => {
            "Perfect! Where did you find this job? (LinkedIn, Indeed, Company Website, etc.)"
        }
    })
}

/// Re-asked when answers must be non-empty and the user sent a blank one.
pub fn job_prompt_retry(field: JobField) -> Reply {
    Reply::text(format!("I didn't catch that. Could you tell me the {field} again?"))
}

pub fn job_added(title: &str, company: &str) -> Reply {
    Reply::text(format!(
        "Perfect! I've added \"{title}\" at \"{company}\" to your dashboard. You can find it in \
         your job list and update the status as you progress through the application process!"
    ))
}

pub fn job_adding_complete() -> Reply {
    Reply::suggestions(
        "Is there anything else I can help you with?",
        &JOB_COMPLETION_OPTIONS,
        HandlerId::General,
    )
}

pub fn dashboard_offer() -> Reply {
    Reply::suggestions(
        "I see you're on your dashboard! This is your command center for tracking all job \
         applications. Want me to help you add a new job in just 3 quick questions?",
        &DASHBOARD_OPTIONS,
        HandlerId::Dashboard,
    )
}

pub fn inactivity_tip(index: usize) -> Reply {
    Reply::highlight(INACTIVITY_TIPS[index % INACTIVITY_TIPS.len()])
}

pub fn inactivity_offer() -> Reply {
    Reply::suggestions(
        "Need help with anything? I'm here to assist!",
        &INACTIVITY_OPTIONS,
        HandlerId::General,
    )
}

pub fn home_greeting() -> Reply {
    Reply::text(
        "Welcome to Job Journal! 👋 I'm Jobsy. I help job seekers keep every application, \
         interview, and follow-up in one place.",
    )
}

pub fn home_greeting_offer() -> Reply {
    Reply::suggestions(
        "Curious how it works? Sign up and I'll walk you through adding your first job.",
        &HOME_GREETING_OPTIONS,
        HandlerId::HomeGreeting,
    )
}

pub fn feature_overview() -> Reply {
    Reply::suggestions(
        "Here's what Job Journal can do for you: track applications, write AI cover letters, \
         keep your documents organized, and prepare for interviews. Which one should I explain?",
        &FEATURE_OPTIONS,
        HandlerId::Features,
    )
}

pub fn general_opener() -> Reply {
    Reply::suggestions(
        "Hi! I'm Jobsy. What can I help you with today?",
        &GENERAL_OPTIONS,
        HandlerId::General,
    )
}

pub fn help_menu() -> Reply {
    Reply::suggestions(
        "I'm here to help! I can assist you with adding jobs, explaining features, navigating \
         the platform, and providing job search tips. What would you like to know?",
        &GENERAL_OPTIONS,
        HandlerId::General,
    )
}

pub fn default_menu() -> Reply {
    Reply::suggestions(
        "Thanks for your message! I'm designed to help you with job tracking and applications. \
         Here are some things I can help with:",
        &DEFAULT_OPTIONS,
        HandlerId::General,
    )
}

pub fn interview_prep() -> Reply {
    Reply::text(
        "Great! I can help you prepare for interviews. Here are some key tips:\n\n\
         1. Research the company thoroughly\n\
         2. Practice common interview questions\n\
         3. Prepare specific examples using the STAR method\n\
         4. Have thoughtful questions ready for the interviewer\n\
         5. Practice your elevator pitch",
    )
}

pub fn resume_tips() -> Reply {
    Reply::text(
        "I'd be happy to help optimize your resume! Here are some best practices:\n\n\
         • Use action verbs and quantify achievements\n\
         • Tailor your resume for each job application\n\
         • Keep it concise (1-2 pages)\n\
         • Include relevant keywords from the job description\n\
         • Ensure consistent formatting",
    )
}

pub fn cover_letter_structure() -> Reply {
    Reply::text(
        "Cover letters are a great way to stand out! Here's my recommended structure:\n\n\
         1. Opening: Hook the reader and mention the specific role\n\
         2. Body: Connect your experience to their needs\n\
         3. Closing: Express enthusiasm and next steps",
    )
}

pub fn platform_tools() -> Reply {
    Reply::highlight(
        "Great question! This platform has several powerful features: Job tracking dashboard, \
         AI-powered cover letter generator, document management, interview preparation tips, \
         and application analytics. Which one interests you most?",
    )
}

pub fn analytics_detail() -> Reply {
    Reply::highlight(
        "Statistics cards on your dashboard show how many applications you've sent, how many \
         are in interviews, and how many turned into offers.",
    )
}

/// The reply spoken by a named continuation.
pub fn named_reply(handler: NamedHandler) -> Reply {
    match handler {
        NamedHandler::OnboardingTour => Reply::text(
            "Great! Your dashboard shows all your job applications with their current status. \
             The sidebar on the left gives you access to AI tools like cover letter generation \
             and document management.",
        ),
        NamedHandler::OnboardingDecline => Reply::text(
            "No problem! I'll be here whenever you need help. Just click on me anytime! 😊",
        ),
        NamedHandler::OnboardingAiFeatures => Reply::highlight(
            "Our AI tools can help you create personalized cover letters, manage your documents, \
             and even provide interview tips! Check out the AI Assistant and AI Cover Letter \
             pages in the sidebar.",
        ),
        NamedHandler::OnboardingExplore => Reply::text(
            "Perfect! Feel free to explore. I'm always here if you need guidance!",
        ),
        NamedHandler::DashboardFeatures => Reply::highlight(
            "Your dashboard has several key areas: Statistics cards show your application \
             progress, the search bar helps you find specific jobs, and each job card displays \
             status, company, and next steps!",
        ),
        NamedHandler::DashboardDecline => Reply::text(
            "No worries! I'll be here when you're ready to add jobs or need any help! 👍",
        ),
        NamedHandler::PlatformFeatures => Reply::highlight(
            "Here's what you can do on this platform: Track job applications, generate AI cover \
             letters, manage documents, get interview tips, and view your application analytics! \
             Check out the sidebar for all features.",
        ),
        NamedHandler::JobSearchTips => Reply::text(
            "💡 Job Search Tips: Keep your application status updated, follow up within a week \
             of applying, tailor your resume for each role, and use the AI cover letter tool for \
             personalized applications!",
        ),
        NamedHandler::Farewell => Reply::text(
            "You're welcome! I'm always here when you need assistance. Happy job hunting! 🎯",
        ),
        NamedHandler::ThinkItOver => Reply::text(
            "Take your time! I'll tuck myself away in the corner. Click me whenever you want \
             to pick this up again.",
        ),
        NamedHandler::JobTrackingDetail => Reply::highlight(
            "Job tracking keeps every application in one place: status, source, contacts, \
             follow-up dates, and your notes on how it went.",
        ),
        NamedHandler::CoverLetterDetail => Reply::highlight(
            "The AI Cover Letter tool drafts a personalized letter from the job description and \
             your resume, ready for you to polish.",
        ),
        NamedHandler::DocumentsDetail => Reply::highlight(
            "My Documents stores every resume and cover letter version, so you always know which \
             one you sent to which company.",
        ),
        NamedHandler::InterviewDetail => Reply::highlight(
            "Interview preparation gives you common questions, STAR-method examples, and \
             reminders for each upcoming interview.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_greeting_personalized() {
        assert!(onboarding_greeting(Some("Ada")).content.starts_with("Hey there, Ada!"));
        assert!(onboarding_greeting(Some("  ")).content.starts_with("Hey there! 👋"));
        assert!(onboarding_greeting(None).content.starts_with("Hey there! 👋"));
    }

    #[test]
    fn test_job_added_embeds_title_and_company() {
        let reply = job_added("Backend Engineer", "Acme");
        assert!(reply.content.contains("\"Backend Engineer\""));
        assert!(reply.content.contains("\"Acme\""));
    }

    #[test]
    fn test_inactivity_tip_index_wraps() {
        assert_eq!(inactivity_tip(4).content, INACTIVITY_TIPS[0]);
    }
}
