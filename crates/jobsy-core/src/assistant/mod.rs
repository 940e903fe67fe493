//! The flow controller: one assistant, one active flow, one message log.
//!
//! [`Assistant`] owns every piece of mutable conversation state and is the
//! only thing that mutates it. All work happens on one logical timeline:
//! operations mutate state immediately and queue their delayed follow-ups on
//! an internal [`Scheduler`], and the host moves time forward with
//! [`Assistant::advance`], [`Assistant::advance_to`] or
//! [`Assistant::settle`]. Nothing runs in the background.
//!
//! # Generations
//!
//! Every [`Assistant::start`] and [`Assistant::dismiss`] bumps the flow
//! generation. Callbacks queued by a flow carry the generation they were
//! queued under and are silently dropped if it has moved on by the time they
//! come due, so a new flow never receives stale messages from the previous
//! one. Trigger-initiated starts are not bound to a generation and race user
//! actions on a last-writer-wins basis.
//!
//! ## Submodules
//!
//! - [`builder`]: Construction with storage, tracker and configuration
//! - `flows`: Starting flows and their scripted openers
//! - `conversation`: Free text, suggestions and the delayed callbacks they queue
//! - `inputs`: Authentication, navigation and activity signals from the host
//!
//! # Example
//!
//! ```rust
//! use jobsy_core::{AssistantBuilder, AssistantConfig, Flow};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut assistant = AssistantBuilder::new()
//!     .in_memory()
//!     .with_config(AssistantConfig::immediate())
//!     .build()?;
//!
//! assistant.start(Flow::General);
//! assistant.submit("Can you help me with my interview?");
//! assistant.settle();
//!
//! for message in assistant.messages() {
//!     println!("{}: {}", message.sender.as_str(), message.content);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use log::debug;

use crate::{
    config::AssistantConfig,
    message_log::MessageLog,
    models::{
        AssistantStatus, Flow, HandlerId, Message, MessageId, Reply, Sender, Visibility,
    },
    random::RandomSource,
    scheduler::Scheduler,
    session::JobAddingSession,
    store::{Bookkeeping, KeyValueStore, MemoryStore},
    tracker::JobTracker,
    triggers::Triggers,
};

pub mod builder;
mod conversation;
mod flows;
mod inputs;


pub use builder::AssistantBuilder;

/// Delayed work queued on the assistant's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Task {
    /// Append a scripted assistant message
    Emit(Reply),
    /// Reply to free text, routed by the flow active when it runs
    UserText(String),
    /// Act on a chosen suggestion
    Resolve { handler: HandlerId, choice: String },
    /// Start a flow on behalf of a trigger
    StartFlow(Flow),
    /// Hide the assistant and end the flow
    Hide,
    /// Collapse the assistant
    Minimize,
    /// Periodic inactivity rule
    InactivityCheck,
}

impl Task {
    fn is_periodic(&self) -> bool {
        matches!(self, Task::InactivityCheck)
    }
}

/// Scripted job-search assistant.
pub struct Assistant {
    config: AssistantConfig,
    log: MessageLog,
    flow: Flow,
    generation: u64,
    visibility: Visibility,
    session: JobAddingSession,
    scheduler: Scheduler<Task>,
    triggers: Triggers,
    store: Box<dyn KeyValueStore>,
    session_store: MemoryStore,
    tracker: Box<dyn JobTracker>,
    random: Box<dyn RandomSource>,
}

impl Assistant {
    pub(crate) fn new(
        config: AssistantConfig,
        store: Box<dyn KeyValueStore>,
        tracker: Box<dyn JobTracker>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(config.inactivity_check_interval(), None, Task::InactivityCheck);

        Self {
            config,
            log: MessageLog::new(),
            flow: Flow::None,
            generation: 0,
            visibility: Visibility::default(),
            session: JobAddingSession::new(),
            scheduler,
            triggers: Triggers::new(),
            store,
            session_store: MemoryStore::new(),
            tracker,
            random,
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// The conversation in append order.
    pub fn messages(&self) -> &[Message] {
        self.log.all()
    }

    /// Messages appended after `id`; the whole log for `None`.
    pub fn messages_since(&self, id: Option<MessageId>) -> &[Message] {
        self.log.since(id)
    }

    pub fn active_flow(&self) -> Flow {
        self.flow
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The job-adding session, meaningful while job-adding is active.
    pub fn job_session(&self) -> &JobAddingSession {
        &self.session
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Callbacks waiting on the timeline, stale ones included.
    pub fn pending(&self) -> usize {
        self.scheduler.len()
    }

    /// Snapshot for display.
    pub fn status(&self) -> AssistantStatus {
        AssistantStatus {
            flow: self.flow,
            generation: self.generation,
            visibility: self.visibility,
            clock_ms: u64::try_from(self.now().as_millis()).unwrap_or(u64::MAX),
            messages: self.log.len(),
            pending: self.scheduler.len(),
            authenticated: self.triggers.is_authenticated(),
            display_name: self.triggers.display_name().map(str::to_string),
            route: self.triggers.route().map(str::to_string),
            onboarding_completed: self.store.onboarding_completed(),
            dashboard_visits: self.store.dashboard_visits(),
            home_greeting_shown: self.session_store.home_greeting_shown(),
        }
    }

    /// Moves the clock forward by `by`, running everything that comes due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.now() + by;
        self.advance_to(until);
    }

    /// Moves the clock to `time`, running due callbacks in order. Times in
    /// the past leave the clock where it is.
    pub fn advance_to(&mut self, time: Duration) {
        while let Some(entry) = self.scheduler.pop_due(time) {
            if entry.is_stale(self.generation) {
                debug!(
                    "Dropping stale callback from generation {:?} (now {})",
                    entry.generation, self.generation
                );
                continue;
            }
            self.run(entry.task);
        }
        self.scheduler.finish_at(time);
    }

    /// Runs every pending one-shot callback, moving the clock as far as the
    /// last of them. The periodic inactivity check fires along the way if
    /// its time comes, but is never waited for on its own.
    pub fn settle(&mut self) {
        while let Some(due) = self.scheduler.next_due_where(|task| !task.is_periodic()) {
            self.advance_to(due);
        }
    }

    /// Appends an assistant message to the current generation.
    fn emit(&mut self, reply: Reply) -> MessageId {
        self.log.append(Sender::Assistant, reply, self.generation)
    }

    /// Runs `task` after `delay_ms`, bound to the current generation. A zero
    /// delay runs it right away.
    fn after(&mut self, delay_ms: u64, task: Task) {
        if delay_ms == 0 {
            self.run(task);
        } else {
            self.scheduler
                .schedule(Duration::from_millis(delay_ms), Some(self.generation), task);
        }
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Emit(reply) => {
                self.emit(reply);
            }
            Task::UserText(text) => self.reply_to(&text),
            Task::Resolve { handler, choice } => self.resolve(handler, &choice),
            Task::StartFlow(flow) => {
                debug!("Trigger fired: {flow}");
                self.start(flow);
            }
            Task::Hide => self.dismiss(),
            Task::Minimize => self.minimize(),
            Task::InactivityCheck => self.check_inactivity(),
        }
    }
}
