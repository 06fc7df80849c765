//! MCP server implementation for Sasya
//!
//! Exposes the planner to AI assistants over the Model Context Protocol on
//! stdio. Tool output is the same markdown the terminal shows.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use sasya_core::Planner;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{Id, McpResult, SavePlan, SiteRequest};

/// MCP server for Sasya
#[derive(Clone)]
pub struct SasyaMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SasyaMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "list_crops",
        description = "List the crop catalog with rainfall bands (mm), season, typical yield (kg/ha), input cost (/ha) and market price (/kg)."
    )]
    async fn list_crops(&self) -> McpResult {
        self.handlers().list_crops().await
    }

    #[tool(
        name = "list_trees",
        description = "List the boundary tree catalog with drought tolerance, canopy, spacing and uses."
    )]
    async fn list_trees(&self) -> McpResult {
        self.handlers().list_trees().await
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a plot plan from site conditions. All fields are optional: rainfall_mm (default 400), soil_ph (6.5), area_m2 (8000), investment_level (low|medium|high). Numbers may be given as strings. Returns a markdown report followed by the plan JSON, which can be passed to save_plan."
    )]
    async fn generate_plan(&self, params: Parameters<SiteRequest>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "advise",
        description = "Score in-band crops for the site with a yield-to-cost heuristic adjusted for soil pH, and explain the recommendation. Advisory only; it does not change generated plans."
    )]
    async fn advise(&self, params: Parameters<SiteRequest>) -> McpResult {
        self.handlers().advise(params).await
    }

    #[tool(
        name = "save_plan",
        description = "Save a plan document (the JSON from generate_plan) with an optional farmer_name. One label is stored per layout cell. Returns the new plan ID."
    )]
    async fn save_plan(&self, params: Parameters<SavePlan>) -> McpResult {
        self.handlers().save_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a saved plan by ID as a printable report with site, crops and trees, layout, economics and an action plan."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List saved plans, newest first, with farmer name, save time and label count."
    )]
    async fn list_plans(&self) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "get_labels",
        description = "List the stored per-cell labels (cell id, type, species, position, area) of a saved plan."
    )]
    async fn get_labels(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().get_labels(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SasyaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sasya".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Sasya plans dryland plots: a primary crop and an intercrop chosen by rainfall, a drought-tolerant boundary tree, a grid layout and an economics estimate.

## Workflow
1. Call `generate_plan` with what you know about the site; missing values default.
2. Optionally call `advise` for a scored, explained recommendation.
3. Save the plan JSON with `save_plan`, giving the farmer's name.
4. Use `show_plan`, `list_plans` and `get_labels` to review saved plans.

## Tool Categories
- **Catalog**: list_crops, list_trees
- **Planning**: generate_plan, advise
- **Saved plans**: save_plan, show_plan, list_plans, get_labels"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SasyaMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Sasya MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
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
