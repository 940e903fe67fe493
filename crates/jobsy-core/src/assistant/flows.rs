//! Flow lifecycle: start, dismiss and window state.

use log::{debug, info};

use super::{Assistant, Task};
use crate::{models::Flow, script};

impl Assistant {
    /// Replaces the active conversation with `flow`.
    ///
    /// Clears the log, advances the generation so pending callbacks of the
    /// previous flow become no-ops, shows the assistant and emits the flow's
    /// opener. Follow-up messages are queued after their configured delay.
    /// Starting [`Flow::None`] is the same as [`Assistant::dismiss`].
    pub fn start(&mut self, flow: Flow) {
        if !flow.is_active() {
            self.dismiss();
            return;
        }

        self.generation += 1;
        self.log.clear();
        self.session.reset();
        self.flow = flow;
        self.visibility.show();
        info!("Starting {flow} flow (generation {})", self.generation);

        match flow {
            Flow::Onboarding => {
                let greeting = script::onboarding_greeting(self.triggers.display_name());
                self.emit(greeting);
                self.after(
                    self.config.onboarding_follow_up_ms,
                    Task::Emit(script::onboarding_offer()),
                );
            }
            Flow::JobAdding => {
                self.emit(script::job_adding_intro());
                let field = self.session.start();
                self.after(
                    self.config.job_prompt_delay_ms,
                    Task::Emit(script::job_prompt(field)),
                );
            }
            Flow::FeatureExplanation => {
                self.emit(script::feature_overview());
            }
            Flow::HomeGreeting => {
                self.emit(script::home_greeting());
                self.after(
                    self.config.greeting_follow_up_ms,
                    Task::Emit(script::home_greeting_offer()),
                );
            }
            Flow::DashboardHelp => {
                self.emit(script::dashboard_offer());
            }
            Flow::InactivityTip => {
                let index = self.random.pick(script::INACTIVITY_TIPS.len());
                self.emit(script::inactivity_tip(index));
                self.after(
                    self.config.tip_follow_up_ms,
                    Task::Emit(script::inactivity_offer()),
                );
            }
            Flow::General => {
                self.emit(script::general_opener());
            }
            Flow::None => {}
        }
    }

    /// Ends the conversation and hides the assistant.
    ///
    /// The log is kept for display but its suggestions go stale, and any
    /// callbacks still pending are dropped when they come due.
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.flow = Flow::None;
        self.session.reset();
        self.visibility.hide();
        debug!("Dismissed (generation {})", self.generation);
    }

    /// Collapses the assistant. The flow carries on.
    pub fn minimize(&mut self) {
        self.visibility.minimize();
    }

    /// Expands a collapsed assistant.
    pub fn restore(&mut self) {
        self.visibility.restore();
    }

    /// Marks the active flow finished while leaving the assistant on screen.
    pub(super) fn finish_flow(&mut self) {
        debug!("{} flow reached its last message", self.flow);
        self.flow = Flow::None;
    }
}
