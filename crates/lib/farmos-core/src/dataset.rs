//! Immutable farm dataset.
//!
//! A [`FarmDataset`] is built once from a [`DatasetDocument`] and never
//! mutated afterwards; every query runs against the same snapshot, so the
//! engine is safe for concurrent readers without locking. Collections keep
//! their document order, which fixes the (stable, insertion-ordered)
//! sequence every listing operation returns. Secondary indexes are built at
//! construction so foreign-key listings avoid a full scan per call; they
//! store positions in insertion order and never change observable output.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Equipment, Farm, Field, Livestock, Sensor};

const BUILTIN_JSON: &str = include_str!("../data/builtin.json");

/// Serialized form of a dataset: five entity arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DatasetDocument {
    #[serde(default)]
    pub farms: Vec<Farm>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub livestock: Vec<Livestock>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

/// Why a dataset document was rejected at load time.
#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    UnknownFarm {
        referrer: String,
        farm_id: String,
    },
    UnknownField {
        referrer: String,
        field_id: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid dataset document: {err}"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id '{id}' in {collection}")
            }
            Self::UnknownFarm { referrer, farm_id } => {
                write!(f, "record '{referrer}' references unknown farm '{farm_id}'")
            }
            Self::UnknownField { referrer, field_id } => {
                write!(f, "record '{referrer}' references unknown field '{field_id}'")
            }
        }
    }
}

impl Error for DatasetError {}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// The read-only entity collections plus lookup indexes.
#[derive(Debug)]
pub struct FarmDataset {
    farms: Vec<Farm>,
    fields: Vec<Field>,
    livestock: Vec<Livestock>,
    equipment: Vec<Equipment>,
    sensors: Vec<Sensor>,

    farm_ids: HashMap<String, usize>,
    field_ids: HashMap<String, usize>,
    livestock_ids: HashMap<String, usize>,
    equipment_ids: HashMap<String, usize>,

    fields_by_farm: HashMap<String, Vec<usize>>,
    livestock_by_farm: HashMap<String, Vec<usize>>,
    equipment_by_farm: HashMap<String, Vec<usize>>,
    sensors_by_field: HashMap<String, Vec<usize>>,
}

impl FarmDataset {
    /// Builds a dataset from a document, indexing ids and foreign keys.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when an id repeats within a collection or a
    /// non-null foreign key does not resolve.
    pub fn from_document(doc: DatasetDocument) -> Result<Self, DatasetError> {
        let farm_ids = index_ids("farms", &doc.farms, |farm| &farm.id)?;
        let field_ids = index_ids("fields", &doc.fields, |field| &field.id)?;
        let livestock_ids = index_ids("livestock", &doc.livestock, |group| &group.id)?;
        let equipment_ids = index_ids("equipment", &doc.equipment, |item| &item.id)?;
        index_ids("sensors", &doc.sensors, |sensor| &sensor.id)?;

        for field in &doc.fields {
            require_farm(&farm_ids, &field.id, &field.farm_id)?;
        }
        for group in &doc.livestock {
            require_farm(&farm_ids, &group.id, &group.farm_id)?;
            if let Some(field_id) = &group.field_id {
                require_field(&field_ids, &group.id, field_id)?;
            }
        }
        for item in &doc.equipment {
            require_farm(&farm_ids, &item.id, &item.farm_id)?;
        }
        for sensor in &doc.sensors {
            require_farm(&farm_ids, &sensor.id, &sensor.farm_id)?;
            require_field(&field_ids, &sensor.id, &sensor.field_id)?;
        }

        let fields_by_farm = group_by(&doc.fields, |field| &field.farm_id);
        let livestock_by_farm = group_by(&doc.livestock, |group| &group.farm_id);
        let equipment_by_farm = group_by(&doc.equipment, |item| &item.farm_id);
        let sensors_by_field = group_by(&doc.sensors, |sensor| &sensor.field_id);

        Ok(Self {
            farms: doc.farms,
            fields: doc.fields,
            livestock: doc.livestock,
            equipment: doc.equipment,
            sensors: doc.sensors,
            farm_ids,
            field_ids,
            livestock_ids,
            equipment_ids,
            fields_by_farm,
            livestock_by_farm,
            equipment_by_farm,
            sensors_by_field,
        })
    }

    /// Parses a JSON dataset document and builds a dataset from it.
    ///
    /// # Errors
    /// Returns [`DatasetError::Parse`] for malformed JSON, otherwise the same
    /// validation errors as [`Self::from_document`].
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let doc: DatasetDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// The built-in reference dataset.
    ///
    /// # Panics
    /// Never in practice; the embedded document is validated by tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_JSON).expect("built-in dataset is valid")
    }

    #[must_use]
    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn farm(&self, farm_id: &str) -> Option<&Farm> {
        self.farm_ids.get(farm_id).map(|&pos| &self.farms[pos])
    }

    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.field_ids.get(field_id).map(|&pos| &self.fields[pos])
    }

    #[must_use]
    pub fn livestock(&self, livestock_id: &str) -> Option<&Livestock> {
        self.livestock_ids
            .get(livestock_id)
            .map(|&pos| &self.livestock[pos])
    }

    #[must_use]
    pub fn equipment(&self, equipment_id: &str) -> Option<&Equipment> {
        self.equipment_ids
            .get(equipment_id)
            .map(|&pos| &self.equipment[pos])
    }

    /// Fields belonging to a farm, in insertion order. Empty when the farm
    /// has none (or is unknown; callers decide whether that is an error).
    #[must_use]
    pub fn fields_of(&self, farm_id: &str) -> Vec<&Field> {
        collect(&self.fields, self.fields_by_farm.get(farm_id).map(Vec::as_slice))
    }

    #[must_use]
    pub fn livestock_of(&self, farm_id: &str) -> Vec<&Livestock> {
        collect(
            &self.livestock,
            self.livestock_by_farm.get(farm_id).map(Vec::as_slice),
        )
    }

    #[must_use]
    pub fn equipment_of(&self, farm_id: &str) -> Vec<&Equipment> {
        collect(
            &self.equipment,
            self.equipment_by_farm.get(farm_id).map(Vec::as_slice),
        )
    }

    #[must_use]
    pub fn sensors_of(&self, field_id: &str) -> Vec<&Sensor> {
        collect(
            &self.sensors,
            self.sensors_by_field.get(field_id).map(Vec::as_slice),
        )
    }
}

fn collect<'a, T>(records: &'a [T], positions: Option<&[usize]>) -> Vec<&'a T> {
    positions.map_or_else(Vec::new, |positions| {
        positions.iter().map(|&pos| &records[pos]).collect()
    })
}

fn index_ids<T>(
    collection: &'static str,
    records: &[T],
    id: impl Fn(&T) -> &str,
) -> Result<HashMap<String, usize>, DatasetError> {
    let mut index = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        if index.insert(id(record).to_string(), pos).is_some() {
            return Err(DatasetError::DuplicateId {
                collection,
                id: id(record).to_string(),
            });
        }
    }
    Ok(index)
}

fn group_by<T>(records: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, Vec<usize>> {
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (pos, record) in records.iter().enumerate() {
        groups.entry(key(record).to_string()).or_default().push(pos);
    }
    groups
}

fn require_farm(
    farm_ids: &HashMap<String, usize>,
    referrer: &str,
    farm_id: &str,
) -> Result<(), DatasetError> {
    if farm_ids.contains_key(farm_id) {
        Ok(())
    } else {
        Err(DatasetError::UnknownFarm {
            referrer: referrer.to_string(),
            farm_id: farm_id.to_string(),
        })
    }
}

fn require_field(
    field_ids: &HashMap<String, usize>,
    referrer: &str,
    field_id: &str,
) -> Result<(), DatasetError> {
    if field_ids.contains_key(field_id) {
        Ok(())
    } else {
        Err(DatasetError::UnknownField {
            referrer: referrer.to_string(),
            field_id: field_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_loads_and_indexes() {
        let dataset = FarmDataset::builtin();

        assert_eq!(dataset.farms().len(), 3);
        assert_eq!(dataset.fields().len(), 4);
        assert_eq!(dataset.fields_of("farm_001").len(), 2);
        assert_eq!(dataset.sensors_of("field_001").len(), 2);
        assert!(dataset.farm("farm_999").is_none());
    }

    #[test]
    fn fields_keep_document_order() {
        let dataset = FarmDataset::builtin();

        let ids: Vec<&str> = dataset
            .fields_of("farm_001")
            .iter()
            .map(|field| field.id.as_str())
            .collect();
        assert_eq!(ids, ["field_001", "field_002"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let json = r#"{
            "farms": [
                {"id": "farm_001", "name": "A", "location": "X", "area_acres": 1,
                 "owner": "O", "established": "2020", "type": "crop"},
                {"id": "farm_001", "name": "B", "location": "Y", "area_acres": 2,
                 "owner": "O", "established": "2021", "type": "crop"}
            ]
        }"#;

        let err = FarmDataset::from_json(json).expect_err("duplicate id should fail");
        assert!(matches!(
            err,
            DatasetError::DuplicateId {
                collection: "farms",
                ..
            }
        ));
    }

    #[test]
    fn dangling_farm_reference_is_rejected() {
        let json = r#"{
            "fields": [
                {"id": "field_001", "farm_id": "farm_404", "name": "F", "area_acres": 1,
                 "crop_type": "Corn", "planting_date": "2024-01-01",
                 "expected_harvest": null, "status": "growing"}
            ]
        }"#;

        let err = FarmDataset::from_json(json).expect_err("dangling reference should fail");
        assert!(matches!(err, DatasetError::UnknownFarm { .. }));
    }

    #[test]
    fn null_livestock_field_reference_is_allowed() {
        let dataset = FarmDataset::builtin();

        let chickens = dataset.livestock("livestock_003").expect("known group");
        assert!(chickens.field_id.is_none());
    }
}
