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

/// Parameters for fetching a field by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetFieldInfoParams {
    /// The unique identifier for the field (e.g. 'field_001').
    pub field_id: String,
}

/// Parameters for listing the fields of a farm.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListFieldsByFarmParams {
    /// The unique identifier for the farm.
    pub farm_id: String,
}

/// Parameters for fetching the sensors of a field.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetSensorReadingsParams {
    /// The unique identifier for the field.
    pub field_id: String,
}

/// Parameters for searching fields by crop.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchByCropTypeParams {
    /// The type of crop to search for (e.g. 'Corn', 'Wheat'). Matched
    /// case-insensitively.
    pub crop_type: String,
}

#[tool_router(router = tool_router_fields, vis = "pub")]
impl FarmOsMcp {
    #[tool(description = "Get information about a specific field, including its sensors.")]
    async fn get_field_info(
        &self,
        Parameters(params): Parameters<GetFieldInfoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().get_field(&params.field_id))
    }

    #[tool(description = "List all fields for a specific farm.")]
    async fn list_fields_by_farm(
        &self,
        Parameters(params): Parameters<ListFieldsByFarmParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().list_fields_by_farm(&params.farm_id))
    }

    #[tool(description = "Get all sensor readings for a specific field.")]
    async fn get_sensor_readings(
        &self,
        Parameters(params): Parameters<GetSensorReadingsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::query_result(self.engine().get_sensor_readings(&params.field_id))
    }

    #[tool(description = "Search for fields by crop type.")]
    async fn search_by_crop_type(
        &self,
        Parameters(params): Parameters<SearchByCropTypeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let fields = self.engine().search_fields_by_crop(&params.crop_type);
        Ok(CallToolResult::success(vec![Content::json(fields)?]))
    }
}
