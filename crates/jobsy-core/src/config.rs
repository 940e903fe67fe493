//! Assistant timing and behavior configuration.
//!
//! All delays are stored in milliseconds so the configuration reads naturally
//! as JSON. Presentation delays pace scripted messages; trigger delays and
//! the inactivity constants drive the trigger scheduler.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

/// Tunable constants for the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Pause between the onboarding greeting and its question
    pub onboarding_follow_up_ms: u64,
    /// Pause between the onboarding tour text and the next question
    pub tour_follow_up_ms: u64,
    /// Pause between the job-adding intro and the first question
    pub job_prompt_delay_ms: u64,
    /// Pause between an inactivity tip and the help offer
    pub tip_follow_up_ms: u64,
    /// Pause between the home greeting and its options
    pub greeting_follow_up_ms: u64,
    /// "Typing" pause before answering user input or a chosen suggestion
    pub reply_delay_ms: u64,
    /// Pause between a job confirmation and the follow-up options
    pub completion_delay_ms: u64,
    /// Pause after a farewell before the assistant hides
    pub auto_hide_ms: u64,
    /// Pause after "think about it" before the assistant minimizes
    pub auto_minimize_ms: u64,
    /// Delay before onboarding starts after first sign-in
    pub onboarding_trigger_ms: u64,
    /// Delay before greeting a visitor who is not signed in
    pub home_greeting_trigger_ms: u64,
    /// Delay before offering dashboard help
    pub dashboard_help_trigger_ms: u64,
    /// How often inactivity is checked
    pub inactivity_check_interval_ms: u64,
    /// Idle time after which a tip is shown
    pub inactivity_threshold_ms: u64,
    /// Dashboard visits that may still trigger help
    pub dashboard_visit_cap: u32,
    /// Route identifying the dashboard page
    pub dashboard_route: String,
    /// Re-ask job questions answered with blank text
    pub require_non_empty_answers: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            onboarding_follow_up_ms: 1500,
            tour_follow_up_ms: 2000,
            job_prompt_delay_ms: 1000,
            tip_follow_up_ms: 2000,
            greeting_follow_up_ms: 1500,
            reply_delay_ms: 1000,
            completion_delay_ms: 2000,
            auto_hide_ms: 2000,
            auto_minimize_ms: 4000,
            onboarding_trigger_ms: 2000,
            home_greeting_trigger_ms: 3000,
            dashboard_help_trigger_ms: 5000,
            inactivity_check_interval_ms: 60_000,
            inactivity_threshold_ms: 180_000,
            dashboard_visit_cap: 3,
            dashboard_route: "/dashboard".to_string(),
            require_non_empty_answers: false,
        }
    }
}

impl AssistantConfig {
    /// Configuration that appends every scripted message synchronously.
    ///
    /// Trigger delays and inactivity constants keep their defaults.
    pub fn immediate() -> Self {
        Self {
            onboarding_follow_up_ms: 0,
            tour_follow_up_ms: 0,
            job_prompt_delay_ms: 0,
            tip_follow_up_ms: 0,
            greeting_follow_up_ms: 0,
            reply_delay_ms: 0,
            completion_delay_ms: 0,
            auto_hide_ms: 0,
            auto_minimize_ms: 0,
            ..Self::default()
        }
    }

    /// Loads a JSON configuration file. Missing fields take their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| AssistantError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the scheduler cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.inactivity_check_interval_ms == 0 {
            return Err(AssistantError::Configuration {
                message: "inactivity_check_interval_ms must be greater than zero".to_string(),
            });
        }
        if self.dashboard_route.trim().is_empty() {
            return Err(AssistantError::invalid_input("dashboard_route")
                .with_reason("route must not be empty"));
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn inactivity_check_interval(&self) -> Duration {
        Duration::from_millis(self.inactivity_check_interval_ms)
    }

    pub fn inactivity_threshold(&self) -> Duration {
        Duration::from_millis(self.inactivity_threshold_ms)
    }
}
