//! Value retrieval for reference-column scans.

use std::borrow::Cow;

use basalt_storage::{Column, ColumnType, DictionaryColumn, StorageError, Table};
use basalt_types::{ChunkId, ColumnId, RowId, TypeError};

use crate::errors::OperatorError;

/// Resolves the row ids of a reference column to values of the referenced
/// table.
///
/// Keeps a one-slot cache keyed by the last seen chunk id; position lists
/// are usually grouped by chunk, so most lookups skip the chunk and column
/// resolution. Correctness does not depend on the cache, only speed.
pub(crate) struct ReferenceGetter<'a, T: ColumnType> {
    table: &'a Table,
    column_id: ColumnId,
    cached: Option<(ChunkId, CachedColumn<'a, T>)>,
}

enum CachedColumn<'a, T: ColumnType> {
    Values(&'a [T]),
    Dictionary(&'a DictionaryColumn),
}

impl<'a, T: ColumnType> ReferenceGetter<'a, T> {
    pub(crate) fn new(table: &'a Table, column_id: ColumnId) -> Self {
        ReferenceGetter { table, column_id, cached: None }
    }

    /// Get the value a row id points at. Borrows straight out of value
    /// columns; dictionary columns decode per call (the slow path).
    pub(crate) fn get(&mut self, row_id: &RowId) -> Result<Cow<'a, T>, OperatorError> {
        let table = self.table;
        let column_id = self.column_id;
        let (_, column) = match &mut self.cached {
            Some(entry) if entry.0 == row_id.chunk_id => entry,
            cached => cached
                .insert((row_id.chunk_id, resolve_column(table, column_id, row_id.chunk_id)?)),
        };

        match column {
            CachedColumn::Values(values) => {
                let values: &'a [T] = *values;
                values.get(row_id.chunk_offset as usize).map(Cow::Borrowed).ok_or(
                    OperatorError::Storage(StorageError::RowIndexOutOfBounds {
                        index: row_id.chunk_offset as usize,
                    }),
                )
            }
            CachedColumn::Dictionary(dictionary_column) => {
                Ok(Cow::Owned(dictionary_column.get::<T>(row_id.chunk_offset as usize)?))
            }
        }
    }
}

fn resolve_column<'a, T: ColumnType>(
    table: &'a Table,
    column_id: ColumnId,
    chunk_id: ChunkId,
) -> Result<CachedColumn<'a, T>, OperatorError> {
    let chunk = table.chunk(chunk_id)?;
    match chunk.column(column_id)? {
        Column::Value(value_column) => {
            let values = T::values(value_column).ok_or(TypeError::CastError {
                from: value_column.data_type(),
                to: T::DATA_TYPE,
            })?;
            Ok(CachedColumn::Values(values.as_slice()))
        }
        Column::Dictionary(dictionary_column) => Ok(CachedColumn::Dictionary(dictionary_column)),
        Column::Reference(_) => Err(OperatorError::NestedReference),
    }
}

#[cfg(test)]
mod tests {
    use basalt_types::{DataType, Value};

    use super::*;

    fn table_with_chunks() -> Table {
        let mut table = Table::new(2);
        table.add_column("name", DataType::Varchar).unwrap();
        for name in ["Bill", "Steve", "Alexander", "Steve", "Hasso"] {
            table.append(vec![Value::from(name)]).unwrap();
        }
        // Chunk 0 dictionary-encoded, chunks 1 and 2 stay materialised.
        table.compress_chunk(0).unwrap();
        table
    }

    #[test]
    fn test_resolves_through_both_encodings() {
        let table = table_with_chunks();
        let mut getter = ReferenceGetter::<String>::new(&table, 0);

        // Dictionary chunk (decode path).
        assert_eq!(getter.get(&RowId::new(0, 1)).unwrap().as_ref(), "Steve");
        // Value chunks (borrow path).
        assert_eq!(getter.get(&RowId::new(1, 0)).unwrap().as_ref(), "Alexander");
        assert_eq!(getter.get(&RowId::new(2, 0)).unwrap().as_ref(), "Hasso");
        // Back to an earlier chunk: the cache refreshes.
        assert_eq!(getter.get(&RowId::new(0, 0)).unwrap().as_ref(), "Bill");
    }

    #[test]
    fn test_out_of_range_positions_fail() {
        let table = table_with_chunks();
        let mut getter = ReferenceGetter::<String>::new(&table, 0);

        assert!(getter.get(&RowId::new(0, 99)).is_err());
        assert!(getter.get(&RowId::new(9, 0)).is_err());
    }

    #[test]
    fn test_kind_mismatch_fails() {
        let table = table_with_chunks();
        let mut getter = ReferenceGetter::<i32>::new(&table, 0);

        // Chunk 1 is a value column of strings, not ints.
        assert_eq!(
            getter.get(&RowId::new(1, 0)).unwrap_err(),
            OperatorError::Type(TypeError::CastError {
                from: DataType::Varchar,
                to: DataType::Integer,
            })
        );
    }
}
