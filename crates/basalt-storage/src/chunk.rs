use basalt_types::{ColumnId, Value};

use crate::column::Column;
use crate::error::StorageError;

/// Horizontal partition of a table: an ordered bundle of same-length
/// columns.
///
/// A chunk is mutable as long as all of its columns are value columns;
/// dictionary compression freezes it.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    columns: Vec<Column>,
}

impl Chunk {
    pub fn new() -> Self {
        Chunk { columns: Vec::new() }
    }

    /// Add a column to the end of the chunk.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Append one row. The row must match the chunk's column layout and
    /// every column must still be growable.
    pub fn append(&mut self, values: &[Value]) -> Result<(), StorageError> {
        if values.len() != self.columns.len() {
            return Err(StorageError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        // Validate first so a failing row leaves all columns at equal
        // length.
        for column in &self.columns {
            if !matches!(column, Column::Value(_)) {
                return Err(StorageError::ColumnImmutable("Compressed".to_string()));
            }
        }
        for (column, value) in self.columns.iter().zip(values) {
            if !value.is_compatible_with(column.data_type()) {
                return Err(StorageError::CastError {
                    from: value.data_type(),
                    to: column.data_type(),
                });
            }
        }

        for (column, value) in self.columns.iter_mut().zip(values) {
            column.append(value)?;
        }
        Ok(())
    }

    /// Get the column at a position.
    pub fn column(&self, column_id: ColumnId) -> Result<&Column, StorageError> {
        self.columns
            .get(column_id as usize)
            .ok_or(StorageError::ColumnIndexOutOfBounds { index: column_id as usize })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Number of columns.
    pub fn col_count(&self) -> u16 {
        self.columns.len() as u16
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    /// A chunk is mutable iff all of its columns are value columns.
    pub fn is_mutable(&self) -> bool {
        self.columns.iter().all(|column| matches!(column, Column::Value(_)))
    }
}
