//! Sasya CLI Application
//!
//! Command-line, HTTP and MCP front ends for the Sasya plot planner.

mod args;
mod cli;
mod mcp;
mod renderer;
mod server;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SasyaMcpServer};
use renderer::TerminalRenderer;
use sasya_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        seed,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_seed(seed)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Sasya started with database {}", planner.database_path().display());

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Crops) => Cli::new(planner, renderer).list_crops().await,
        Some(Trees) => Cli::new(planner, renderer).list_trees().await,
        Some(Generate(args)) => Cli::new(planner, renderer).generate(args).await,
        Some(Advise(args)) => Cli::new(planner, renderer).advise(args).await,
        Some(Save(args)) => Cli::new(planner, renderer).save(args).await,
        Some(Show(args)) => Cli::new(planner, renderer).show_plan(args.into()).await,
        Some(Labels(args)) => Cli::new(planner, renderer).labels(args.into()).await,
        Some(Serve(args)) => {
            info!("Starting Sasya HTTP server");
            server::run_http_server(planner, &args.host, args.port).await
        }
        Some(Mcp) => {
            info!("Starting Sasya MCP server");
            run_stdio_server(SasyaMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Plans) | None => Cli::new(planner, renderer).list_plans().await,
    }
}
