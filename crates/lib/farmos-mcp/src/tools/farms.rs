use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{FarmOsMcp, helpers};

/// Parameters for fetching a farm by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetFarmInfoParams {
    /// The unique identifier for the farm (e.g. 'farm_001').
    pub farm_id: String,
}

/// Parameters for building a farm summary.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetFarmSummaryParams {
    /// The unique identifier for the farm (e.g. 'farm_001').
    pub farm_id: String,
}

#[tool_router(router = tool_router_farms, vis = "pub")]
impl FarmOsMcp {
    #[tool(
        description = "Get information about a specific farm, including its fields, livestock, and equipment."
    )]
    async fn get_farm_info(
        &self,
        Parameters(params): Parameters<GetFarmInfoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().get_farm(&params.farm_id))
    }

    #[tool(description = "List all available farms with basic information.")]
    async fn list_all_farms(&self) -> Result<CallToolResult, ErrorData> {
        let farms = self.engine().list_farms();
        Ok(CallToolResult::success(vec![Content::json(farms)?]))
    }

    #[tool(
        description = "Get a comprehensive summary of a farm including derived statistics over all its assets."
    )]
    async fn get_farm_summary(
        &self,
        Parameters(params): Parameters<GetFarmSummaryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().get_farm_summary(&params.farm_id))
    }
}
