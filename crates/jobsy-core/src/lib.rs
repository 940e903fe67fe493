//! Core library for the Jobsy job-search assistant.
//!
//! Jobsy is a scripted dialogue engine: it walks a user through a closed set
//! of conversations ("flows"), answers free text by keyword, collects job
//! applications question by question, and decides on its own when to pop up
//! (first sign-in, dashboard visits, long idle stretches).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐   ┌────────────────┐   ┌────────────────┐
//! │    Triggers    │──▶│   Assistant    │──▶│  Message Log   │
//! │ (auth, routes, │   │ (flow control, │   │ (append-only)  │
//! │   inactivity)  │   │   scheduler)   │   └────────────────┘
//! └────────────────┘   └───────┬────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//!   ┌─────────────┐   ┌─────────────────┐   ┌─────────────┐
//!   │  Responses  │   │   Suggestions   │   │ Job session │
//!   │ (keywords)  │   │ (option tables) │   │ (3 fields)  │
//!   └─────────────┘   └─────────────────┘   └─────────────┘
//! ```
//!
//! The engine is synchronous and single-threaded. Delays are modelled on a
//! logical clock owned by the [`Assistant`]; hosts advance it from whatever
//! timer they have. Bookkeeping flags go through the [`KeyValueStore`]
//! trait and completed jobs through [`JobTracker`]; [`Database`] implements
//! both on SQLite.
//!
//! # Quick Start
//!
//! ```rust
//! use jobsy_core::{AssistantBuilder, AssistantConfig, Flow};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut assistant = AssistantBuilder::new()
//!     .with_database_path(Some("jobsy.db"))
//!     .with_config(AssistantConfig::immediate())
//!     .build()?;
//!
//! assistant.start(Flow::JobAdding);
//! assistant.submit("Backend Engineer");
//! assistant.submit("Acme");
//! assistant.submit("LinkedIn");
//!
//! let last = assistant.messages().last().expect("assistant replied");
//! println!("{last}");
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod message_log;
pub mod models;
pub mod params;
pub mod random;
pub mod responses;
pub mod scheduler;
pub mod script;
pub mod session;
pub mod store;
pub mod suggestions;
pub mod tracker;
pub mod triggers;

// Re-export commonly used types
pub use assistant::{Assistant, AssistantBuilder};
pub use config::AssistantConfig;
pub use db::Database;
pub use display::{Conversation, Settings, TrackedJobs};
pub use error::{AssistantError, Result};
pub use models::{
    AssistantStatus, Flow, HandlerId, JobStatus, Message, MessageId, MessageKind, NamedHandler,
    NewJob, Reply, Sender, SuggestionAction, TrackedJob, Visibility,
};
pub use params::{SelectSuggestion, SendMessage, SetAuth, StartFlow, VisitPage};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use store::{Bookkeeping, KeyValueStore, MemoryStore};
pub use tracker::{JobTracker, NoopTracker, RecordingTracker};
