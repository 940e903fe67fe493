//! MCP server implementation for Jobsy
//!
//! This module exposes the assistant over the Model Context Protocol so an
//! AI model can play the user's side of a conversation: start flows, type
//! messages, pick suggestions and report navigation.

use std::sync::Arc;

use anyhow::Result;
use jobsy_core::{Assistant, Database};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{McpResult, SelectSuggestion, SendMessage, SetAuth, StartFlow, VisitPage};

/// MCP server for Jobsy
#[derive(Clone)]
pub struct JobsyMcpServer {
    assistant: Arc<Mutex<Assistant>>,
    database: Arc<Mutex<Database>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JobsyMcpServer {
    /// Create a new Jobsy MCP server
    ///
    /// `database` is only read from, to list tracked jobs.
    pub fn new(assistant: Assistant, database: Database) -> Self {
        Self {
            assistant: Arc::new(Mutex::new(assistant)),
            database: Arc::new(Mutex::new(database)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.assistant.clone(), self.database.clone())
    }

    #[tool(
        name = "start_flow",
        description = "Start a scripted conversation, replacing whatever is running. Flows: onboarding, job-adding, feature-explanation, home-greeting, dashboard-help, inactivity-tip, general. Returns the conversation up to the first question."
    )]
    async fn start_flow(&self, params: Parameters<StartFlow>) -> McpResult {
        self.handlers().start_flow(params).await
    }

    #[tool(
        name = "send_message",
        description = "Type free text as the user. While a job is being added the text answers the current question (title, company, then source); otherwise Jobsy replies by keyword. Returns the updated conversation."
    )]
    async fn send_message(&self, params: Parameters<SendMessage>) -> McpResult {
        self.handlers().send_message(params).await
    }

    #[tool(
        name = "select_suggestion",
        description = "Choose an option from the latest suggestion list, by its text or its 1-based number. Pass message_id to target a specific message. Fails if the list belongs to an earlier conversation."
    )]
    async fn select_suggestion(&self, params: Parameters<SelectSuggestion>) -> McpResult {
        self.handlers().select_suggestion(params).await
    }

    #[tool(
        name = "dismiss",
        description = "Close the assistant window and end the running conversation."
    )]
    async fn dismiss(&self) -> McpResult {
        self.handlers().dismiss().await
    }

    #[tool(
        name = "minimize",
        description = "Minimize the assistant window without ending the conversation."
    )]
    async fn minimize(&self) -> McpResult {
        self.handlers().minimize().await
    }

    #[tool(name = "restore", description = "Restore a minimized assistant window.")]
    async fn restore(&self) -> McpResult {
        self.handlers().restore().await
    }

    #[tool(
        name = "visit_page",
        description = "Report that the user navigated to a route such as /dashboard. Dashboard visits may make Jobsy offer help or greet signed-out visitors."
    )]
    async fn visit_page(&self, params: Parameters<VisitPage>) -> McpResult {
        self.handlers().visit_page(params).await
    }

    #[tool(
        name = "set_auth",
        description = "Report whether the user is signed in, with an optional display name. The first sign-in of a user who never finished onboarding starts the onboarding tour."
    )]
    async fn set_auth(&self, params: Parameters<SetAuth>) -> McpResult {
        self.handlers().set_auth(params).await
    }

    #[tool(
        name = "show_conversation",
        description = "Show the current conversation and the assistant's state."
    )]
    async fn show_conversation(&self) -> McpResult {
        self.handlers().show_conversation().await
    }

    #[tool(
        name = "list_jobs",
        description = "List the job applications captured so far, most recently added first."
    )]
    async fn list_jobs(&self) -> McpResult {
        self.handlers().list_jobs().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for JobsyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "jobsy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Jobsy is a job-search assistant that talks through short scripted conversations ("flows").

## Flows
- **onboarding**: first-login tour, ends by offering to add a first job
- **job-adding**: asks for the job title, company and where the job was found, then records it
- **feature-explanation**: explains job tracking, AI cover letters, documents and interview tips
- **home-greeting**, **dashboard-help**, **inactivity-tip**, **general**: short help conversations

## Playing the user
1. Start a flow with `start_flow`, or report events with `set_auth` and `visit_page`
2. Answer with `send_message`, or pick an offered option with `select_suggestion`
3. Every tool returns the conversation so far; numbered options are the current suggestions
4. Use `list_jobs` to see what job-adding recorded

Starting a flow clears the conversation. Suggestions from an earlier conversation are rejected."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: JobsyMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Jobsy MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
