//! MCP server implementation for farmos-mcp.
//!
//! This crate wires the query engine into rmcp tool handlers and exposes the
//! MCP-facing API surface for farm data lookups.

mod helpers;
mod tools;
pub mod server;

use farmos_core::query::QueryEngine;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r#"farmos-mcp provides read-only MCP tools over a farm-management dataset.

Workflow:
1. Call `list_all_farms` to discover farms, then drill down by id.
2. Per-farm listings: `list_fields_by_farm`, `list_livestock_by_farm`, `list_equipment_by_farm`.
3. Point lookups: `get_farm_info`, `get_field_info`, `get_livestock_info`, `get_equipment_info`.
4. Sensors and search: `get_sensor_readings` (by field id), `search_by_crop_type`.
5. `get_farm_summary` returns the farm plus derived statistics (field area, livestock head count, operational equipment).

Notes:
- Ids look like `farm_001`, `field_001`, `livestock_001`, `equipment_001`.
- An unknown id yields `{"error": "..."}` in the result body; an empty list means the id exists but has no related records.
- The dataset is fixed for the lifetime of the process; repeated calls return identical results.
- `health` returns `ok`."#;

/// MCP server wrapper around the query engine and tool routers.
#[derive(Clone)]
pub struct FarmOsMcp {
    tool_router: ToolRouter<Self>,
    engine: QueryEngine,
}

impl FarmOsMcp {
    /// Creates a new server over a query engine.
    #[must_use]
    pub fn new(engine: QueryEngine) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_farms()
            + Self::tool_router_fields()
            + Self::tool_router_livestock()
            + Self::tool_router_equipment();
        Self {
            tool_router,
            engine,
        }
    }

    pub(crate) const fn engine(&self) -> &QueryEngine {
        &self.engine
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl FarmOsMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for FarmOsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
