//! Data models for the conversational engine.
//!
//! - [`flow`]: The closed set of scripted conversations
//! - [`message`]: Messages, their kinds, and the suggestion lists they carry
//! - [`action`]: Tagged continuations bound to suggestion lists
//! - [`visibility`]: Assistant window state
//! - [`job`]: Job applications captured by the job-adding conversation
//! - [`status`]: Snapshot of the assistant for display
//!
//! Every model serializes with serde; messages carry handler tags rather than
//! closures so a whole conversation can be written out as JSON.

pub mod action;
pub mod flow;
pub mod job;
pub mod message;
pub mod status;
pub mod visibility;


pub use action::{HandlerId, NamedHandler, SuggestionAction};
pub use flow::Flow;
pub use job::{JobField, JobStatus, NewJob, TrackedJob};
pub use message::{Message, MessageId, MessageKind, Reply, Sender, SuggestionList};
pub use status::AssistantStatus;
pub use visibility::Visibility;
