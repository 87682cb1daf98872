//! Core types and services for farmos-mcp.
//!
//! This crate owns the farm entity model, the immutable in-memory dataset,
//! and the query engine that answers point lookups, foreign-key listings,
//! and derived farm summaries.

pub mod dataset;
pub mod model;
pub mod query;
