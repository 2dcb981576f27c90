//! Column representations.
//!
//! A logical column has one of three physical encodings, modelled as the
//! outer [`Column`] variant. Value and dictionary columns carry their
//! element kind as an inner variant ([`ValueColumn`], [`Dictionary`]);
//! reference columns are kind-agnostic and borrow their kind from the
//! referenced table. Generic code projects typed views out of the inner
//! variants through the [`ColumnType`] trait.

pub mod column_type;
pub mod dictionary_column;
pub mod reference_column;
pub mod value_column;

pub use column_type::ColumnType;
pub use dictionary_column::{Dictionary, DictionaryColumn};
pub use reference_column::ReferenceColumn;
pub use value_column::ValueColumn;

use basalt_types::{DataType, Value};

use crate::error::StorageError;

/// A column in one of its three physical encodings.
#[derive(Debug, Clone)]
pub enum Column {
    Value(ValueColumn),
    Dictionary(DictionaryColumn),
    Reference(ReferenceColumn),
}

impl Column {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Value(column) => column.len(),
            Column::Dictionary(column) => column.len(),
            Column::Reference(column) => column.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element kind of the column's logical values.
    pub fn data_type(&self) -> DataType {
        match self {
            Column::Value(column) => column.data_type(),
            Column::Dictionary(column) => column.data_type(),
            Column::Reference(column) => column.data_type(),
        }
    }

    /// Return the value at a row position. Generic row inspection only; the
    /// scan never goes through here.
    pub fn element_at(&self, i: usize) -> Result<Value, StorageError> {
        match self {
            Column::Value(column) => column.element_at(i),
            Column::Dictionary(column) => column.element_at(i),
            Column::Reference(column) => column.element_at(i),
        }
    }

    /// Append a value. Only value columns are growable.
    pub fn append(&mut self, value: &Value) -> Result<(), StorageError> {
        match self {
            Column::Value(column) => column.append(value),
            Column::Dictionary(_) => Err(StorageError::ColumnImmutable("Dictionary".to_string())),
            Column::Reference(_) => Err(StorageError::ColumnImmutable("Reference".to_string())),
        }
    }
}
