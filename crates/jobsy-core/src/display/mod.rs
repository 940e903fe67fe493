//! Markdown formatting for conversations, status and tracked jobs.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! get newtype wrappers in [`collections`] that also handle the empty case.
//! The output is markdown so the CLI can render it with `termimad` and the
//! MCP server can return it verbatim.
//!
//! ```rust
//! use jobsy_core::{AssistantBuilder, AssistantConfig, Flow, display::Conversation};
//!
//! let mut assistant = AssistantBuilder::new()
//!     .in_memory()
//!     .with_config(AssistantConfig::immediate())
//!     .build()
//!     .unwrap();
//! assistant.start(Flow::DashboardHelp);
//!
//! let output = format!("{}", Conversation(assistant.messages()));
//! assert!(output.contains("1. Yes, add a job!"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{Conversation, Settings, TrackedJobs};
pub use datetime::{Elapsed, LocalDateTime};
