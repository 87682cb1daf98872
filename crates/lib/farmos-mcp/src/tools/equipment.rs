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

/// Parameters for fetching equipment by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetEquipmentInfoParams {
    /// The unique identifier for the equipment (e.g. 'equipment_001').
    pub equipment_id: String,
}

/// Parameters for listing the equipment of a farm.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListEquipmentByFarmParams {
    /// The unique identifier for the farm.
    pub farm_id: String,
}

#[tool_router(router = tool_router_equipment, vis = "pub")]
impl FarmOsMcp {
    #[tool(description = "Get information about a specific piece of equipment.")]
    async fn get_equipment_info(
        &self,
        Parameters(params): Parameters<GetEquipmentInfoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().get_equipment(&params.equipment_id))
    }

    #[tool(description = "List all equipment for a specific farm.")]
    async fn list_equipment_by_farm(
        &self,
        Parameters(params): Parameters<ListEquipmentByFarmParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().list_equipment_by_farm(&params.farm_id))
    }
}
