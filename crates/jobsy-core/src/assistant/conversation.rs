//! User input and the callbacks it queues.

use log::{debug, info};

use super::{Assistant, Task};
use crate::{
    models::{
        Flow, HandlerId, Message, MessageId, NamedHandler, NewJob, Reply, Sender, SuggestionAction,
    },
    params::SelectSuggestion,
    responses::{self, Response},
    script,
    session::AnswerOutcome,
    store::Bookkeeping,
    suggestions,
};

impl Assistant {
    /// Appends the user's free text and queues the reply.
    ///
    /// Every input gets a reply. Whether the text answers a job question or
    /// goes to the response generator is decided when the reply comes due.
    pub fn submit(&mut self, text: &str) -> MessageId {
        self.triggers.pulse(self.now());
        let id = self
            .log
            .append(Sender::User, Reply::text(text), self.generation);

        self.after(self.config.reply_delay_ms, Task::UserText(text.to_string()));
        id
    }

    /// Chooses `choice` on the most recent suggestion list.
    ///
    /// Returns `false` without touching the log when there is no list to
    /// choose from or the list belongs to an earlier generation.
    pub fn select_suggestion(&mut self, choice: &str) -> bool {
        match self.log.latest_with_suggestions() {
            Some(message) => {
                let id = message.id;
                self.select_suggestion_for(id, choice)
            }
            None => {
                debug!("No suggestion list to choose '{choice}' from");
                false
            }
        }
    }

    /// Chooses `choice` on the suggestion list of message `id`.
    ///
    /// A message that is gone from the log, carries no suggestions, or was
    /// appended under an earlier generation is stale: the call is a no-op.
    /// Text outside the offered options is accepted and resolved by the
    /// list's default branch.
    pub fn select_suggestion_for(&mut self, id: MessageId, choice: &str) -> bool {
        let handler = match self.log.get(id) {
            Some(message) if message.generation == self.generation => message.handler(),
            _ => None,
        };
        let Some(handler) = handler else {
            debug!("Ignoring stale suggestion '{choice}' on message {id}");
            return false;
        };

        self.triggers.pulse(self.now());
        self.log
            .append(Sender::User, Reply::text(choice), self.generation);
        self.after(
            self.config.reply_delay_ms,
            Task::Resolve {
                handler,
                choice: choice.to_string(),
            },
        );
        true
    }

    /// Chooses option `position` (1-based) of the most recent suggestion
    /// list. Out-of-range positions are a no-op.
    pub fn select_option(&mut self, position: usize) -> bool {
        match self.latest_suggestions().map(|m| m.id) {
            Some(id) => self.select_option_for(id, position),
            None => false,
        }
    }

    /// Applies interface parameters: an explicit message or the latest list,
    /// and an option given by text or position.
    pub fn choose(&mut self, params: &SelectSuggestion) -> bool {
        let target = match params.message_id {
            Some(id) => Some(MessageId(id)),
            None => self.latest_suggestions().map(|m| m.id),
        };
        let Some(id) = target else {
            return false;
        };

        match params.position() {
            Some(position) => self.select_option_for(id, position),
            None => self.select_suggestion_for(id, &params.choice),
        }
    }

    /// Most recent message offering suggestions, stale or not.
    pub fn latest_suggestions(&self) -> Option<&Message> {
        self.log.latest_with_suggestions()
    }

    fn select_option_for(&mut self, id: MessageId, position: usize) -> bool {
        let choice = self.log.get(id).and_then(|message| {
            position
                .checked_sub(1)
                .and_then(|index| message.options().get(index))
                .cloned()
        });
        match choice {
            Some(choice) => self.select_suggestion_for(id, &choice),
            None => {
                debug!("No option {position} on message {id}");
                false
            }
        }
    }

    /// While job-adding is active the text answers the current question;
    /// otherwise the response generator picks a reply for the active flow.
    /// Text typed ahead of a completing job lands after the hand-off to
    /// general help.
    pub(super) fn reply_to(&mut self, text: &str) {
        if self.flow == Flow::JobAdding {
            self.answer(text);
        } else {
            self.respond(text);
        }
    }

    fn respond(&mut self, text: &str) {
        match responses::respond(self.flow, text) {
            Response::Reply(reply) => {
                self.emit(reply);
            }
            Response::StartFlow(flow) => self.start(flow),
        }
    }

    fn answer(&mut self, text: &str) {
        match self
            .session
            .answer(text, self.config.require_non_empty_answers)
        {
            AnswerOutcome::Next(field) => {
                self.emit(script::job_prompt(field));
            }
            AnswerOutcome::Retry(field) => {
                self.emit(script::job_prompt_retry(field));
            }
            AnswerOutcome::Complete(answers) => {
                let job = NewJob::from_answers(&answers);
                info!("Job collected: '{}' at '{}'", job.title, job.company);
                self.tracker.create_job(&job);

                self.emit(script::job_added(&job.title, &job.company));
                // Follow-up questions go to the general handlers.
                self.flow = Flow::General;
                self.after(
                    self.config.completion_delay_ms,
                    Task::Emit(script::job_adding_complete()),
                );
            }
        }
    }

    pub(super) fn resolve(&mut self, handler: HandlerId, choice: &str) {
        let resolution = suggestions::resolve(handler, choice);
        debug!("'{choice}' on {handler} resolved to {:?}", resolution.action);

        if resolution.completes_onboarding {
            self.store.mark_onboarding_completed();
        }

        match resolution.action {
            SuggestionAction::StartFlow(flow) => self.start(flow),
            SuggestionAction::RunNamedHandler(named) => self.run_named(named),
            SuggestionAction::Dismiss => self.dismiss(),
            SuggestionAction::Minimize => self.minimize(),
        }
    }

    fn run_named(&mut self, named: NamedHandler) {
        self.emit(script::named_reply(named));

        match named {
            NamedHandler::OnboardingTour => self.after(
                self.config.tour_follow_up_ms,
                Task::Emit(script::onboarding_first_job_offer()),
            ),
            NamedHandler::Farewell => self.after(self.config.auto_hide_ms, Task::Hide),
            NamedHandler::ThinkItOver => self.after(self.config.auto_minimize_ms, Task::Minimize),
            _ => {}
        }

        if named.is_terminal() {
            self.finish_flow();
        }
    }
}
