use std::collections::HashSet;

use farmos_core::dataset::FarmDataset;
use farmos_core::query::QueryEngine;

fn engine() -> QueryEngine {
    QueryEngine::new(FarmDataset::builtin())
}

fn fixture_engine() -> QueryEngine {
    // Minimal isolated dataset: one farm with a single sensorless field.
    let json = r#"{
        "farms": [
            {"id": "farm_100", "name": "Fixture Farm", "location": "Test Valley",
             "area_acres": 40, "owner": "Fixture Owner", "established": "2022",
             "type": "crop"}
        ],
        "fields": [
            {"id": "field_100", "farm_id": "farm_100", "name": "Lone Field",
             "area_acres": 12.5, "crop_type": "Barley",
             "planting_date": "2024-03-01", "expected_harvest": "2024-08-01",
             "status": "growing"}
        ]
    }"#;
    let dataset = FarmDataset::from_json(json).expect("fixture dataset should load");
    QueryEngine::new(dataset)
}

#[test]
fn get_farm_returns_exactly_the_related_records() {
    let farm = engine().get_farm("farm_001").expect("farm_001 exists");

    let field_ids: HashSet<&str> = farm.fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(field_ids, HashSet::from(["field_001", "field_002"]));

    let livestock_ids: Vec<&str> = farm.livestock.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(livestock_ids, ["livestock_003"]);

    let equipment_ids: Vec<&str> = farm.equipment.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(equipment_ids, ["equipment_001", "equipment_002"]);

    assert!(farm.fields.iter().all(|f| f.farm_id == "farm_001"));
    assert!(farm.equipment.iter().all(|e| e.farm_id == "farm_001"));
}

#[test]
fn every_by_farm_operation_rejects_unknown_farms() {
    let engine = engine();

    for result in [
        engine.list_fields_by_farm("farm_999").map(|_| ()),
        engine.list_livestock_by_farm("farm_999").map(|_| ()),
        engine.list_equipment_by_farm("farm_999").map(|_| ()),
        engine.get_farm("farm_999").map(|_| ()),
        engine.get_farm_summary("farm_999").map(|_| ()),
    ] {
        let err = result.expect_err("unknown farm must not be conflated with empty");
        assert_eq!(err.to_string(), "Farm with ID 'farm_999' not found");
    }
}

#[test]
fn list_farms_matches_collection_cardinality_and_records() {
    let engine = engine();
    let farms = engine.list_farms();
    assert_eq!(farms.len(), 3);

    let first = &farms[0];
    let full = engine.get_farm(&first.id).expect("listed farm exists");
    assert_eq!(first.name, full.farm.name);
    assert_eq!(first.location, full.farm.location);
    assert_eq!(first.kind, full.farm.kind);
    assert!((first.area_acres - full.farm.area_acres).abs() < f64::EPSILON);
}

#[test]
fn list_farms_order_is_stable_across_calls() {
    let engine = engine();
    let first: Vec<String> = engine.list_farms().into_iter().map(|f| f.id).collect();
    let second: Vec<String> = engine.list_farms().into_iter().map(|f| f.id).collect();
    assert_eq!(first, ["farm_001", "farm_002", "farm_003"]);
    assert_eq!(first, second);
}

#[test]
fn farm_summary_agrees_with_the_listing_operations() {
    let engine = engine();
    let report = engine.get_farm_summary("farm_001").expect("farm_001 exists");

    let fields = engine.list_fields_by_farm("farm_001").expect("farm exists");
    let area: f64 = fields.iter().map(|f| f.area_acres).sum();
    assert!((report.summary.total_field_area_acres - area).abs() < f64::EPSILON);
    assert_eq!(report.summary.total_fields, fields.len());

    let livestock = engine.list_livestock_by_farm("farm_001").expect("farm exists");
    let count: u64 = livestock.iter().map(|l| u64::from(l.count)).sum();
    assert_eq!(report.summary.total_livestock_count, count);

    assert!(report.summary.operational_equipment <= report.summary.total_equipment);
}

#[test]
fn repeated_calls_return_identical_results() {
    let engine = engine();
    assert_eq!(
        engine.get_farm("farm_002").expect("farm_002 exists"),
        engine.get_farm("farm_002").expect("farm_002 exists"),
    );
    assert_eq!(
        engine.search_fields_by_crop("Wheat"),
        engine.search_fields_by_crop("Wheat"),
    );
}

#[test]
fn north_field_carries_its_two_sensors() {
    let field = engine().get_field("field_001").expect("field_001 exists");

    assert_eq!(field.field.name, "North Field");
    assert!((field.field.area_acres - 50.0).abs() < f64::EPSILON);
    assert_eq!(field.field.crop_type, "Corn");

    let sensors: Vec<(&str, &str)> = field
        .sensors
        .iter()
        .map(|s| (s.id.as_str(), s.kind.as_str()))
        .collect();
    assert_eq!(
        sensors,
        [("sensor_001", "Soil Moisture"), ("sensor_002", "Temperature")]
    );
}

#[test]
fn sunset_ranch_summary_totals() {
    let report = engine().get_farm_summary("farm_002").expect("farm_002 exists");

    // 120 cattle + 80 sheep.
    assert_eq!(report.summary.total_livestock_count, 200);
    assert_eq!(report.summary.total_equipment, 1);
    assert_eq!(report.summary.operational_equipment, 0);
}

#[test]
fn sensor_readings_distinguish_empty_from_unknown() {
    let engine = engine();

    // field_004 exists but carries no sensors.
    let readings = engine.get_sensor_readings("field_004").expect("known field");
    assert!(readings.is_empty());

    let err = engine
        .get_sensor_readings("field_999")
        .expect_err("unknown field");
    assert_eq!(err.to_string(), "Field with ID 'field_999' not found");
}

#[test]
fn fixture_dataset_is_isolated_from_the_builtin_one() {
    let engine = fixture_engine();

    assert_eq!(engine.list_farms().len(), 1);
    assert!(engine.get_farm("farm_001").is_err());

    let report = engine.get_farm_summary("farm_100").expect("fixture farm");
    assert_eq!(report.summary.total_fields, 1);
    assert!((report.summary.total_field_area_acres - 12.5).abs() < f64::EPSILON);
    assert_eq!(report.summary.total_livestock_count, 0);
    assert_eq!(report.summary.total_equipment, 0);

    let livestock = engine.list_livestock_by_farm("farm_100").expect("fixture farm");
    assert!(livestock.is_empty());
}
