use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobsy_core::Flow;

/// Jobsy, the job-search assistant, in your terminal
///
/// Jobsy walks you through scripted conversations: a first-login tour,
/// capturing job applications, feature explanations and tips. It can run as
/// an interactive chat, answer one-off questions, or serve its tools over
/// MCP (Model Context Protocol) for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "jobsy")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/jobsy/jobsy.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON file overriding the default delays and trigger settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Jobsy CLI
///
/// Without a command the tracked jobs are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Chat with the assistant interactively
    #[command(alias = "c")]
    Chat {
        /// Sign in under this display name before the chat starts
        #[arg(short, long)]
        user: Option<String>,
        /// Route to visit once the chat starts, e.g. /dashboard
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Ask a single question and print the conversation
    Ask {
        /// What to say to the assistant
        text: String,
        /// Flow to start before asking
        #[arg(short, long)]
        flow: Option<Flow>,
    },
    /// Start a flow and print its script
    Start {
        /// onboarding, job-adding, feature-explanation, home-greeting,
        /// dashboard-help, inactivity-tip or general
        flow: Flow,
    },
    /// Show the persisted bookkeeping flags
    Flags {
        /// Forget every flag so onboarding and dashboard help run again
        #[arg(long)]
        reset: bool,
    },
    /// List tracked job applications
    #[command(alias = "j")]
    Jobs,
    /// Start the MCP server
    Serve,
}
