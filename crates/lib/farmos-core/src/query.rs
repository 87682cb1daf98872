//! Read-only query operations over a [`FarmDataset`].
//!
//! Every operation is a pure function of the immutable dataset: stateless,
//! idempotent, and synchronous. The engine is cheap to clone (it shares the
//! dataset behind an `Arc`) and safe to call from any number of concurrent
//! tool invocations.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::dataset::FarmDataset;
use crate::model::{Equipment, Farm, Field, Livestock, STATUS_OPERATIONAL, Sensor};

/// Entity collections an identifier can be missing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Farm,
    Field,
    Livestock,
    Equipment,
}

impl EntityKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Farm => "Farm",
            Self::Field => "Field",
            Self::Livestock => "Livestock",
            Self::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The sole query failure: an identifier absent from its collection.
///
/// An empty child listing is a valid result, never an error; only an unknown
/// identifier produces `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    NotFound { kind: EntityKind, id: String },
}

impl QueryError {
    fn not_found(kind: EntityKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} with ID '{id}' not found"),
        }
    }
}

impl Error for QueryError {}

/// A farm together with every record referencing it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmWithRelations {
    #[serde(flatten)]
    pub farm: Farm,
    pub fields: Vec<Field>,
    pub livestock: Vec<Livestock>,
    pub equipment: Vec<Equipment>,
}

/// A field together with its sensors.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldWithSensors {
    #[serde(flatten)]
    pub field: Field,
    pub sensors: Vec<Sensor>,
}

/// Condensed listing row for [`QueryEngine::list_farms`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub area_acres: f64,
}

/// Derived statistics over a farm's fields, livestock, and equipment.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmStats {
    pub total_fields: usize,
    pub total_field_area_acres: f64,
    pub total_livestock_count: u64,
    pub total_equipment: usize,
    pub operational_equipment: usize,
}

/// Full farm report: record, statistics, and the raw related lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmReport {
    pub farm: Farm,
    pub summary: FarmStats,
    pub fields: Vec<Field>,
    pub livestock: Vec<Livestock>,
    pub equipment: Vec<Equipment>,
}

/// Answers lookups, foreign-key listings, and aggregates.
#[derive(Clone)]
pub struct QueryEngine {
    dataset: Arc<FarmDataset>,
}

impl QueryEngine {
    #[must_use]
    pub fn new(dataset: FarmDataset) -> Self {
        Self::with_dataset(Arc::new(dataset))
    }

    #[must_use]
    pub const fn with_dataset(dataset: Arc<FarmDataset>) -> Self {
        Self { dataset }
    }

    /// A farm enriched with its fields, livestock, and equipment.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `farm_id`.
    pub fn get_farm(&self, farm_id: &str) -> Result<FarmWithRelations, QueryError> {
        let farm = self.require_farm(farm_id)?;
        Ok(FarmWithRelations {
            farm: farm.clone(),
            fields: cloned(&self.dataset.fields_of(farm_id)),
            livestock: cloned(&self.dataset.livestock_of(farm_id)),
            equipment: cloned(&self.dataset.equipment_of(farm_id)),
        })
    }

    /// Condensed rows for every farm, in dataset order.
    #[must_use]
    pub fn list_farms(&self) -> Vec<FarmSummary> {
        self.dataset
            .farms()
            .iter()
            .map(|farm| FarmSummary {
                id: farm.id.clone(),
                name: farm.name.clone(),
                location: farm.location.clone(),
                kind: farm.kind.clone(),
                area_acres: farm.area_acres,
            })
            .collect()
    }

    /// A field enriched with its sensors.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `field_id`.
    pub fn get_field(&self, field_id: &str) -> Result<FieldWithSensors, QueryError> {
        let field = self
            .dataset
            .field(field_id)
            .ok_or_else(|| QueryError::not_found(EntityKind::Field, field_id))?;
        Ok(FieldWithSensors {
            field: field.clone(),
            sensors: cloned(&self.dataset.sensors_of(field_id)),
        })
    }

    /// Fields belonging to a farm; empty when the farm has none.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `farm_id`.
    pub fn list_fields_by_farm(&self, farm_id: &str) -> Result<Vec<Field>, QueryError> {
        self.require_farm(farm_id)?;
        Ok(cloned(&self.dataset.fields_of(farm_id)))
    }

    /// A livestock group record, unenriched.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `livestock_id`.
    pub fn get_livestock(&self, livestock_id: &str) -> Result<Livestock, QueryError> {
        self.dataset
            .livestock(livestock_id)
            .cloned()
            .ok_or_else(|| QueryError::not_found(EntityKind::Livestock, livestock_id))
    }

    /// Livestock groups belonging to a farm; empty when the farm has none.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `farm_id`.
    pub fn list_livestock_by_farm(&self, farm_id: &str) -> Result<Vec<Livestock>, QueryError> {
        self.require_farm(farm_id)?;
        Ok(cloned(&self.dataset.livestock_of(farm_id)))
    }

    /// An equipment record, unenriched.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `equipment_id`.
    pub fn get_equipment(&self, equipment_id: &str) -> Result<Equipment, QueryError> {
        self.dataset
            .equipment(equipment_id)
            .cloned()
            .ok_or_else(|| QueryError::not_found(EntityKind::Equipment, equipment_id))
    }

    /// Equipment belonging to a farm; empty when the farm has none.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `farm_id`.
    pub fn list_equipment_by_farm(&self, farm_id: &str) -> Result<Vec<Equipment>, QueryError> {
        self.require_farm(farm_id)?;
        Ok(cloned(&self.dataset.equipment_of(farm_id)))
    }

    /// Sensors mounted in a field. A known field with no sensors yields an
    /// empty list, distinct from an unknown field.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `field_id`.
    pub fn get_sensor_readings(&self, field_id: &str) -> Result<Vec<Sensor>, QueryError> {
        if self.dataset.field(field_id).is_none() {
            return Err(QueryError::not_found(EntityKind::Field, field_id));
        }
        Ok(cloned(&self.dataset.sensors_of(field_id)))
    }

    /// Fields whose crop type matches, compared ASCII case-insensitively.
    /// An unmatched crop type yields an empty list, never an error.
    #[must_use]
    pub fn search_fields_by_crop(&self, crop_type: &str) -> Vec<Field> {
        debug!(crop_type, "searching fields by crop");
        self.dataset
            .fields()
            .iter()
            .filter(|field| field.crop_type.eq_ignore_ascii_case(crop_type))
            .cloned()
            .collect()
    }

    /// Farm record, derived statistics, and the raw related lists.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] for an unknown `farm_id`.
    pub fn get_farm_summary(&self, farm_id: &str) -> Result<FarmReport, QueryError> {
        let farm = self.require_farm(farm_id)?.clone();
        let fields = cloned(&self.dataset.fields_of(farm_id));
        let livestock = cloned(&self.dataset.livestock_of(farm_id));
        let equipment = cloned(&self.dataset.equipment_of(farm_id));

        let summary = FarmStats {
            total_fields: fields.len(),
            total_field_area_acres: fields.iter().map(|field| field.area_acres).sum(),
            total_livestock_count: livestock.iter().map(|group| u64::from(group.count)).sum(),
            total_equipment: equipment.len(),
            // Exact match: a differently-cased status is not operational.
            operational_equipment: equipment
                .iter()
                .filter(|item| item.status == STATUS_OPERATIONAL)
                .count(),
        };
        debug!(farm_id, total_fields = summary.total_fields, "built farm summary");

        Ok(FarmReport {
            farm,
            summary,
            fields,
            livestock,
            equipment,
        })
    }

    fn require_farm(&self, farm_id: &str) -> Result<&Farm, QueryError> {
        self.dataset
            .farm(farm_id)
            .ok_or_else(|| QueryError::not_found(EntityKind::Farm, farm_id))
    }
}

fn cloned<T: Clone>(records: &[&T]) -> Vec<T> {
    records.iter().copied().cloned().collect()
}
