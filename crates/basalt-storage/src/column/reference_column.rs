use std::sync::Arc;

use basalt_types::{ColumnId, DataType, PosList, Value};

use crate::error::StorageError;
use crate::table::Table;

/// Immutable column exposing rows of another table's column, selected by a
/// shared position list. Nothing is copied; every access resolves through
/// the referenced table.
#[derive(Debug, Clone)]
pub struct ReferenceColumn {
    referenced_table: Arc<Table>,
    referenced_column_id: ColumnId,
    positions: Arc<PosList>,
    data_type: DataType,
}

impl ReferenceColumn {
    /// Create a reference column. Fails when `referenced_column_id` is not
    /// part of the referenced table's schema.
    pub fn new(
        referenced_table: Arc<Table>,
        referenced_column_id: ColumnId,
        positions: Arc<PosList>,
    ) -> Result<Self, StorageError> {
        let data_type = referenced_table.column_type(referenced_column_id)?;
        Ok(ReferenceColumn { referenced_table, referenced_column_id, positions, data_type })
    }

    /// Number of rows, i.e. the position-list length.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn referenced_table(&self) -> &Arc<Table> {
        &self.referenced_table
    }

    pub fn referenced_column_id(&self) -> ColumnId {
        self.referenced_column_id
    }

    pub fn pos_list(&self) -> &Arc<PosList> {
        &self.positions
    }

    /// Resolve the value at a row position through the referenced table.
    pub fn element_at(&self, i: usize) -> Result<Value, StorageError> {
        let row_id = self.positions.get(i).ok_or(StorageError::RowIndexOutOfBounds { index: i })?;
        let chunk = self.referenced_table.chunk(row_id.chunk_id)?;
        let column = chunk.column(self.referenced_column_id)?;
        column.element_at(row_id.chunk_offset as usize)
    }
}
