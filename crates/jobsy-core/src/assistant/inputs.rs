//! Signals from the host application that feed the trigger rules.

use log::debug;

use super::{Assistant, Task};
use crate::{models::Flow, triggers::Trigger};

impl Assistant {
    /// Reports the authentication status and the user's display name.
    ///
    /// The first sign-in of an account that never finished onboarding
    /// schedules the onboarding flow.
    pub fn set_authenticated(&mut self, authenticated: bool, display_name: Option<String>) {
        let trigger = self.triggers.on_auth_change(
            authenticated,
            display_name,
            &self.config,
            self.store.as_ref(),
        );
        if let Some(trigger) = trigger {
            self.schedule_trigger(trigger);
        }
    }

    /// Reports navigation to `route`.
    pub fn visit_page(&mut self, route: &str) {
        let visible = self.visibility.visible;
        let triggers = self.triggers.on_page_visit(
            route,
            visible,
            &self.config,
            self.store.as_mut(),
            &mut self.session_store,
        );
        for trigger in triggers {
            self.schedule_trigger(trigger);
        }
    }

    /// Reports user activity (pointer, key, scroll or touch).
    pub fn activity_pulse(&mut self) {
        let now = self.now();
        self.triggers.pulse(now);
    }

    pub(super) fn check_inactivity(&mut self) {
        self.scheduler.schedule(
            self.config.inactivity_check_interval(),
            None,
            Task::InactivityCheck,
        );

        let now = self.now();
        let visible = self.visibility.visible;
        if self
            .triggers
            .on_inactivity_check(now, visible, &self.config, self.store.as_ref())
        {
            self.start(Flow::InactivityTip);
        }
    }

    /// Trigger starts are not bound to a generation: whichever start comes
    /// last wins.
    fn schedule_trigger(&mut self, trigger: Trigger) {
        debug!("Queued {} in {:?}", trigger.flow, trigger.delay);
        if trigger.delay.is_zero() {
            self.start(trigger.flow);
        } else {
            self.scheduler
                .schedule(trigger.delay, None, Task::StartFlow(trigger.flow));
        }
    }
}
