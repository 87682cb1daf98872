use farmos_core::query::QueryError;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Value, json};

/// Sentinel body for a failed lookup: a single `error` key, nothing else.
///
/// `NotFound` is part of the tool contract, not a protocol fault, so the
/// host can forward it to the caller unchanged.
fn error_body(err: &QueryError) -> Value {
    json!({ "error": err.to_string() })
}

pub(crate) fn query_result<T: Serialize>(
    result: Result<T, QueryError>,
) -> Result<CallToolResult, ErrorData> {
    let content = match result {
        Ok(value) => Content::json(value)?,
        Err(err) => Content::json(error_body(&err))?,
    };
    Ok(CallToolResult::success(vec![content]))
}

#[cfg(test)]
mod tests {
    use farmos_core::dataset::FarmDataset;
    use farmos_core::query::QueryEngine;

    use super::*;

    #[test]
    fn error_body_carries_only_the_error_key() {
        let engine = QueryEngine::new(FarmDataset::builtin());
        let err = engine.get_farm("farm_999").expect_err("unknown farm");

        let body = error_body(&err);
        let object = body.as_object().expect("sentinel is an object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], "Farm with ID 'farm_999' not found");
    }
}
