//! Rules that surface the assistant without being asked.
//!
//! [`Triggers`] tracks the navigation, authentication and activity inputs fed
//! in by the host and decides which flow to start and after what delay. The
//! decisions are returned as [`Trigger`] values; the assistant queues them on
//! its timer. Bookkeeping flags are read and written through the injected
//! stores at decision time, so a rule never schedules twice for the same
//! condition.

use std::time::Duration;

use log::debug;

use crate::{
    config::AssistantConfig,
    models::Flow,
    store::{Bookkeeping, KeyValueStore},
};

/// A flow to start once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub flow: Flow,
    pub delay: Duration,
}

impl Trigger {
    fn after_ms(flow: Flow, delay_ms: u64) -> Self {
        Self {
            flow,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Host-provided inputs and the in-process state of the trigger rules.
#[derive(Debug, Default)]
pub struct Triggers {
    authenticated: bool,
    display_name: Option<String>,
    route: Option<String>,
    last_activity: Duration,
    onboarding_scheduled: bool,
}

impl Triggers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn last_activity(&self) -> Duration {
        self.last_activity
    }

    /// Records the authentication status.
    ///
    /// Becoming authenticated schedules onboarding unless it was completed
    /// earlier or already scheduled in this process.
    pub fn on_auth_change(
        &mut self,
        authenticated: bool,
        display_name: Option<String>,
        config: &AssistantConfig,
        store: &dyn KeyValueStore,
    ) -> Option<Trigger> {
        let became_authenticated = authenticated && !self.authenticated;
        self.authenticated = authenticated;
        self.display_name = if authenticated { display_name } else { None };

        if !became_authenticated || self.onboarding_scheduled {
            return None;
        }
        if store.onboarding_completed() {
            debug!("Onboarding already completed; not scheduling it");
            return None;
        }

        self.onboarding_scheduled = true;
        debug!("Scheduling onboarding in {}ms", config.onboarding_trigger_ms);
        Some(Trigger::after_ms(Flow::Onboarding, config.onboarding_trigger_ms))
    }

    /// Records a page visit and evaluates the dashboard rules.
    ///
    /// The home greeting and dashboard help rules are independent; both may
    /// fire for the same visit.
    pub fn on_page_visit(
        &mut self,
        route: &str,
        assistant_visible: bool,
        config: &AssistantConfig,
        store: &mut dyn KeyValueStore,
        session: &mut dyn KeyValueStore,
    ) -> Vec<Trigger> {
        self.route = Some(route.to_string());

        let mut triggers = Vec::new();
        if route != config.dashboard_route {
            return triggers;
        }

        if !self.authenticated && !session.home_greeting_shown() {
            // Marked at scheduling time so rapid navigation cannot queue a
            // second greeting.
            session.mark_home_greeting_shown();
            debug!("Scheduling home greeting in {}ms", config.home_greeting_trigger_ms);
            triggers.push(Trigger::after_ms(
                Flow::HomeGreeting,
                config.home_greeting_trigger_ms,
            ));
        }

        if store.onboarding_completed() && !assistant_visible {
            let visits = store.dashboard_visits();
            if visits < config.dashboard_visit_cap {
                store.set_dashboard_visits(visits + 1);
                debug!(
                    "Scheduling dashboard help in {}ms (visit {})",
                    config.dashboard_help_trigger_ms,
                    visits + 1
                );
                triggers.push(Trigger::after_ms(
                    Flow::DashboardHelp,
                    config.dashboard_help_trigger_ms,
                ));
            }
        }

        triggers
    }

    /// Refreshes the last-activity time.
    pub fn pulse(&mut self, now: Duration) {
        self.last_activity = now;
    }

    /// Periodic inactivity rule. Returns whether a tip should be shown now.
    ///
    /// A positive decision restarts the idle stretch so the same stretch
    /// cannot produce a second tip.
    pub fn on_inactivity_check(
        &mut self,
        now: Duration,
        assistant_visible: bool,
        config: &AssistantConfig,
        store: &dyn KeyValueStore,
    ) -> bool {
        let idle = now.saturating_sub(self.last_activity);
        if idle <= config.inactivity_threshold()
            || assistant_visible
            || !store.onboarding_completed()
        {
            return false;
        }

        debug!("Idle for {}s; showing a tip", idle.as_secs());
        self.last_activity = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, DASHBOARD_VISITS_KEY};

    fn completed_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.mark_onboarding_completed();
        store
    }

    #[test]
    fn test_onboarding_scheduled_once_on_first_auth() {
        let config = AssistantConfig::default();
        let store = MemoryStore::new();
        let mut triggers = Triggers::new();

        let trigger = triggers.on_auth_change(true, Some("Ada".to_string()), &config, &store);
        assert_eq!(
            trigger,
            Some(Trigger {
                flow: Flow::Onboarding,
                delay: Duration::from_secs(2)
            })
        );
        assert_eq!(triggers.display_name(), Some("Ada"));

        // Re-authenticating in the same process does not schedule again.
        assert_eq!(triggers.on_auth_change(false, None, &config, &store), None);
        assert_eq!(triggers.on_auth_change(true, None, &config, &store), None);
    }

    #[test]
    fn test_onboarding_skipped_when_completed() {
        let config = AssistantConfig::default();
        let store = completed_store();
        let mut triggers = Triggers::new();

        assert_eq!(triggers.on_auth_change(true, None, &config, &store), None);
        assert!(triggers.is_authenticated());
    }

    #[test]
    fn test_home_greeting_marks_session_when_scheduled() {
        let config = AssistantConfig::default();
        let mut store = MemoryStore::new();
        let mut session = MemoryStore::new();
        let mut triggers = Triggers::new();

        let first = triggers.on_page_visit("/dashboard", false, &config, &mut store, &mut session);
        assert_eq!(
            first,
            vec![Trigger {
                flow: Flow::HomeGreeting,
                delay: Duration::from_secs(3)
            }]
        );
        assert!(session.home_greeting_shown());

        let second = triggers.on_page_visit("/dashboard", false, &config, &mut store, &mut session);
        assert!(second.is_empty());
    }

    #[test]
    fn test_other_routes_do_nothing() {
        let config = AssistantConfig::default();
        let mut store = completed_store();
        let mut session = MemoryStore::new();
        let mut triggers = Triggers::new();

        let fired = triggers.on_page_visit("/profile", false, &config, &mut store, &mut session);
        assert!(fired.is_empty());
        assert_eq!(triggers.route(), Some("/profile"));
        assert_eq!(store.dashboard_visits(), 0);
    }

    #[test]
    fn test_dashboard_help_capped() {
        let config = AssistantConfig::default();
        let mut store = completed_store();
        let mut session = MemoryStore::new();
        let mut triggers = Triggers::new();
        triggers.on_auth_change(true, None, &config, &store);

        let mut scheduled = 0;
        for _ in 0..10 {
            let fired =
                triggers.on_page_visit("/dashboard", false, &config, &mut store, &mut session);
            scheduled += fired
                .iter()
                .filter(|t| t.flow == Flow::DashboardHelp)
                .count();
            assert!(store.dashboard_visits() <= config.dashboard_visit_cap);
        }

        assert_eq!(scheduled, 3);
        assert_eq!(store.get(DASHBOARD_VISITS_KEY).as_deref(), Some("3"));
    }

    #[test]
    fn test_dashboard_help_needs_hidden_assistant_and_onboarding() {
        let config = AssistantConfig::default();
        let mut session = MemoryStore::new();
        let mut triggers = Triggers::new();
        triggers.on_auth_change(true, None, &config, &MemoryStore::new());

        let mut fresh = MemoryStore::new();
        assert!(triggers
            .on_page_visit("/dashboard", false, &config, &mut fresh, &mut session)
            .is_empty());

        let mut store = completed_store();
        assert!(triggers
            .on_page_visit("/dashboard", true, &config, &mut store, &mut session)
            .is_empty());
        assert_eq!(store.dashboard_visits(), 0);
    }

    #[test]
    fn test_inactivity_rule() {
        let config = AssistantConfig::default();
        let store = completed_store();
        let mut triggers = Triggers::new();

        let threshold = config.inactivity_threshold();
        assert!(!triggers.on_inactivity_check(threshold, false, &config, &store));
        assert!(!triggers.on_inactivity_check(
            threshold + Duration::from_secs(1),
            true,
            &config,
            &store
        ));
        assert!(!triggers.on_inactivity_check(
            threshold + Duration::from_secs(1),
            false,
            &config,
            &MemoryStore::new()
        ));

        let now = threshold + Duration::from_secs(60);
        assert!(triggers.on_inactivity_check(now, false, &config, &store));
        assert_eq!(triggers.last_activity(), now);
        assert!(!triggers.on_inactivity_check(
            now + Duration::from_secs(60),
            false,
            &config,
            &store
        ));
    }

    #[test]
    fn test_pulse_postpones_tip() {
        let config = AssistantConfig::default();
        let store = completed_store();
        let mut triggers = Triggers::new();

        triggers.pulse(Duration::from_secs(150));
        assert!(!triggers.on_inactivity_check(Duration::from_secs(240), false, &config, &store));
        assert!(triggers.on_inactivity_check(Duration::from_secs(360), false, &config, &store));
    }
}
