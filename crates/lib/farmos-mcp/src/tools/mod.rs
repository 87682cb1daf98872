//! MCP tool modules.
//!
//! Tools are grouped by entity: farm lookups and summaries, fields with
//! their sensors, livestock, and equipment.

pub mod equipment;
pub mod farms;
pub mod fields;
pub mod livestock;
