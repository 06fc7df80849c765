//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use sasya_core::PlannerError;

/// Converts a planner error to an MCP error.
///
/// Caller mistakes (bad input, unknown plan) become `invalid_params`;
/// everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
