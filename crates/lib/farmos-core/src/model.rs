//! Farm entity records.
//!
//! Field names mirror the wire format consumed by agents; `type` keys are
//! mapped to `kind` through serde renames. Records carry no identity beyond
//! their string ids and are plain data, cloned freely by the query layer.

use serde::{Deserialize, Serialize};

/// A farm, the root entity every other record hangs off of.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: String,
    pub name: String,
    pub location: String,
    pub area_acres: f64,
    pub owner: String,
    pub established: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A planted (or pastured) field belonging to a farm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub id: String,
    pub farm_id: String,
    pub name: String,
    pub area_acres: f64,
    pub crop_type: String,
    pub planting_date: String,
    /// `None` for fields with no harvest cycle, e.g. permanent pasture.
    pub expected_harvest: Option<String>,
    pub status: String,
}

/// A livestock group counted as a herd/flock, optionally assigned to a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Livestock {
    pub id: String,
    pub farm_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub breed: String,
    pub count: u32,
    pub field_id: Option<String>,
    pub health_status: String,
    pub last_vaccination: String,
}

/// A piece of farm equipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    pub id: String,
    pub farm_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub model: String,
    pub year: String,
    pub status: String,
    pub last_maintenance: String,
}

/// Equipment `status` value counted as operational in farm summaries.
///
/// The comparison is an exact match; `"Operational"` does not count.
pub const STATUS_OPERATIONAL: &str = "operational";

/// A field-mounted sensor with its most recent reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sensor {
    pub id: String,
    pub field_id: String,
    pub farm_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub last_reading: SensorReading,
}

/// The latest measurement reported by a sensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub timestamp: String,
    pub value: f64,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farm_serializes_type_key() {
        let farm = Farm {
            id: "farm_900".to_string(),
            name: "Test Farm".to_string(),
            location: "Nowhere".to_string(),
            area_acres: 10.0,
            owner: "Nobody".to_string(),
            established: "2020".to_string(),
            kind: "crop".to_string(),
        };

        let value = serde_json::to_value(&farm).expect("farm should serialize");
        assert_eq!(value["type"], "crop");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn field_serializes_missing_harvest_as_null() {
        let field = Field {
            id: "field_900".to_string(),
            farm_id: "farm_900".to_string(),
            name: "Back Paddock".to_string(),
            area_acres: 5.0,
            crop_type: "Grass".to_string(),
            planting_date: "2023-05-01".to_string(),
            expected_harvest: None,
            status: "active".to_string(),
        };

        let value = serde_json::to_value(&field).expect("field should serialize");
        assert!(value["expected_harvest"].is_null());
    }
}
