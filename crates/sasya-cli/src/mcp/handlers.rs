//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use sasya_core::{
    display::{Crops, Labels, PlanReport, PlanSummaries, Trees},
    params as core, Planner,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// Deserializes transparently into the wrapped core type and borrows its
/// JSON schema, so the core parameter types need no MCP-specific code.
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

pub type Id = McpParams<core::Id>;
pub type SiteRequest = McpParams<core::SiteRequest>;
pub type SavePlan = McpParams<core::SavePlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn list_crops(&self) -> McpResult {
        debug!("list_crops");

        let crops = self
            .planner
            .list_crops()
            .await
            .map_err(|e| to_mcp_error("Failed to list crops", &e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "# Crops\n\n{}",
            Crops(crops)
        ))]))
    }

    pub async fn list_trees(&self) -> McpResult {
        debug!("list_trees");

        let trees = self
            .planner
            .list_trees()
            .await
            .map_err(|e| to_mcp_error("Failed to list trees", &e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "# Trees\n\n{}",
            Trees(trees)
        ))]))
    }

    /// Returns the report and the plan JSON, which `save_plan` accepts as is.
    pub async fn generate_plan(&self, Parameters(params): Parameters<SiteRequest>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let plan = self
            .planner
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        let plan_json = serde_json::to_string(&plan)
            .map_err(|e| ErrorData::internal_error(format!("Failed to serialize plan: {e}"), None))?;

        Ok(CallToolResult::success(vec![
            Content::text(PlanReport::new(&plan).to_string()),
            Content::text(plan_json),
        ]))
    }

    pub async fn advise(&self, Parameters(params): Parameters<SiteRequest>) -> McpResult {
        debug!("advise: {:?}", params);

        let advice = self
            .planner
            .advise(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to produce advice", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            advice.to_string(),
        )]))
    }

    pub async fn save_plan(&self, Parameters(params): Parameters<SavePlan>) -> McpResult {
        debug!("save_plan: farmer_name={:?}", params.as_ref().farmer_name);

        let outcome = self
            .planner
            .save_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            outcome.to_string(),
        )]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let saved = self
            .planner
            .get_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            saved.to_string(),
        )]))
    }

    pub async fn list_plans(&self) -> McpResult {
        debug!("list_plans");

        let plans = self
            .planner
            .list_plans()
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "# Saved Plans\n\n{}",
            PlanSummaries(plans)
        ))]))
    }

    pub async fn get_labels(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("get_labels: {:?}", params);

        let plan_id = params.as_ref().id;
        let cells = self
            .planner
            .get_labels(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get labels", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            Labels { plan_id, cells }.to_string(),
        )]))
    }
}
