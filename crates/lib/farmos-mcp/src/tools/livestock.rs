use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{FarmOsMcp, helpers};

/// Parameters for fetching a livestock group by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetLivestockInfoParams {
    /// The unique identifier for the livestock group (e.g. 'livestock_001').
    pub livestock_id: String,
}

/// Parameters for listing the livestock of a farm.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListLivestockByFarmParams {
    /// The unique identifier for the farm.
    pub farm_id: String,
}

#[tool_router(router = tool_router_livestock, vis = "pub")]
impl FarmOsMcp {
    #[tool(description = "Get information about a specific livestock group.")]
    async fn get_livestock_info(
        &self,
        Parameters(params): Parameters<GetLivestockInfoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().get_livestock(&params.livestock_id))
    }

    #[tool(description = "List all livestock for a specific farm.")]
    async fn list_livestock_by_farm(
        &self,
        Parameters(params): Parameters<ListLivestockByFarmParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().list_livestock_by_farm(&params.farm_id))
    }
}
