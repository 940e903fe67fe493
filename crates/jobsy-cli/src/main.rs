//! Jobsy CLI Application
//!
//! Command-line interface for the Jobsy job-search assistant.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jobsy_core::{Assistant, AssistantBuilder, AssistantConfig, Database};
use log::info;
use mcp::{run_stdio_server, JobsyMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config,
        no_color,
        command,
    } = Args::parse();

    let config = match config {
        Some(path) => AssistantConfig::from_path(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AssistantConfig::default(),
    };

    let builder = AssistantBuilder::new()
        .with_database_path(database_file)
        .with_config(config);
    let renderer = TerminalRenderer::new(!no_color);

    info!("Jobsy started");

    match command {
        Some(Chat { user, page }) => {
            Cli::new(build(builder)?, renderer).chat(user, page).await
        }
        Some(Ask { text, flow }) => Cli::new(build(builder)?, renderer).ask(&text, flow),
        Some(Start { flow }) => Cli::new(build(builder)?, renderer).start(flow),
        Some(Flags { reset }) => Cli::flags(open_database(&builder)?, &renderer, reset),
        Some(Serve) => {
            info!("Starting Jobsy MCP server");
            let database = open_database(&builder)?;
            run_stdio_server(JobsyMcpServer::new(build(builder)?, database))
                .await
                .context("MCP server failed")
        }
        Some(Jobs) | None => Cli::jobs(&open_database(&builder)?, &renderer),
    }
}

fn build(builder: AssistantBuilder) -> Result<Assistant> {
    builder.build().context("Failed to initialize assistant")
}

fn open_database(builder: &AssistantBuilder) -> Result<Database> {
    builder.open_database().context("Failed to open database")
}
