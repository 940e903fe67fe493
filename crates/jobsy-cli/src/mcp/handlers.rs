//! MCP tool handlers implementation

use std::sync::Arc;

use jobsy_core::{
    display::{Conversation, TrackedJobs},
    params as core, Assistant, Database,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::{stale_suggestion, to_mcp_error};

// The core parameter types stay free of MCP concerns; this transparent
// wrapper adds the deserialization and schema the protocol needs.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type StartFlow = McpParams<core::StartFlow>;
pub type SendMessage = McpParams<core::SendMessage>;
pub type SelectSuggestion = McpParams<core::SelectSuggestion>;
pub type VisitPage = McpParams<core::VisitPage>;
pub type SetAuth = McpParams<core::SetAuth>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
///
/// Every conversational tool settles the assistant before answering, so the
/// caller sees the script up to the next question rather than a half-typed
/// reply.
pub struct McpHandlers {
    assistant: Arc<Mutex<Assistant>>,
    database: Arc<Mutex<Database>>,
}

impl McpHandlers {
    pub fn new(assistant: Arc<Mutex<Assistant>>, database: Arc<Mutex<Database>>) -> Self {
        Self {
            assistant,
            database,
        }
    }

    pub async fn start_flow(&self, Parameters(params): Parameters<StartFlow>) -> McpResult {
        debug!("start_flow: {:?}", params);

        let mut assistant = self.assistant.lock().await;
        assistant.start(params.as_ref().flow);
        Ok(settled(&mut assistant))
    }

    pub async fn send_message(&self, Parameters(params): Parameters<SendMessage>) -> McpResult {
        debug!("send_message: {:?}", params);

        let mut assistant = self.assistant.lock().await;
        assistant.submit(&params.as_ref().text);
        Ok(settled(&mut assistant))
    }

    pub async fn select_suggestion(
        &self,
        Parameters(params): Parameters<SelectSuggestion>,
    ) -> McpResult {
        debug!("select_suggestion: {:?}", params);

        let mut assistant = self.assistant.lock().await;
        let inner = params.as_ref();
        if !assistant.choose(inner) {
            return Err(stale_suggestion(&inner.choice));
        }
        Ok(settled(&mut assistant))
    }

    pub async fn dismiss(&self) -> McpResult {
        let mut assistant = self.assistant.lock().await;
        assistant.dismiss();
        Ok(settled(&mut assistant))
    }

    pub async fn minimize(&self) -> McpResult {
        let mut assistant = self.assistant.lock().await;
        assistant.minimize();
        Ok(settled(&mut assistant))
    }

    pub async fn restore(&self) -> McpResult {
        let mut assistant = self.assistant.lock().await;
        assistant.restore();
        Ok(settled(&mut assistant))
    }

    pub async fn visit_page(&self, Parameters(params): Parameters<VisitPage>) -> McpResult {
        debug!("visit_page: {:?}", params);

        let mut assistant = self.assistant.lock().await;
        assistant.visit_page(&params.as_ref().route);
        Ok(settled(&mut assistant))
    }

    pub async fn set_auth(&self, Parameters(params): Parameters<SetAuth>) -> McpResult {
        debug!("set_auth: {:?}", params);

        let mut assistant = self.assistant.lock().await;
        let inner = params.as_ref();
        assistant.set_authenticated(inner.authenticated, inner.display_name.clone());
        Ok(settled(&mut assistant))
    }

    pub async fn show_conversation(&self) -> McpResult {
        let mut assistant = self.assistant.lock().await;
        Ok(settled(&mut assistant))
    }

    pub async fn list_jobs(&self) -> McpResult {
        let jobs = self
            .database
            .lock()
            .await
            .list_jobs()
            .map_err(|e| to_mcp_error("Failed to list jobs", e))?;

        let result = format!("# Tracked Jobs\n\n{}", TrackedJobs(jobs));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }
}

/// Runs every pending scripted message and renders the conversation with
/// the assistant's state underneath.
fn settled(assistant: &mut Assistant) -> CallToolResult {
    assistant.settle();

    let result = format!(
        "{}\n{}",
        Conversation(assistant.messages()),
        assistant.status()
    );
    CallToolResult::success(vec![Content::text(result)])
}
