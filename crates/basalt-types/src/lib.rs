//! Basalt Type System
//!
//! This crate provides the type layer shared by the storage and operator
//! crates:
//! - Element kind definitions ([`DataType`])
//! - Runtime-tagged values ([`Value`]) and cast errors
//! - Row identifiers ([`RowId`], [`PosList`]) and dictionary value ids

pub mod data_type;
pub mod ids;
pub mod value;

pub use data_type::DataType;
pub use ids::{ChunkId, ChunkOffset, ColumnId, PosList, RowId, ValueId, INVALID_VALUE_ID};
pub use value::{TypeError, Value};

#[cfg(test)]
mod tests;
