//! Integration tests for chunked tables across compression and reference
//! indirection.

use std::sync::Arc;

use basalt_storage::{Column, ReferenceColumn, StorageError, Table, TableConfig};
use basalt_types::{DataType, PosList, RowId, Value};

fn populated_table() -> Table {
    let mut table = Table::new(2);
    table.add_column("id", DataType::Integer).unwrap();
    table.add_column("name", DataType::Varchar).unwrap();

    let rows = [(1, "Bill"), (2, "Steve"), (3, "Alexander"), (4, "Steve"), (5, "Hasso")];
    for (id, name) in rows {
        table.append(vec![Value::Integer(id), Value::from(name)]).unwrap();
    }
    table
}

#[test]
fn table_splits_rows_into_chunks() {
    let table = populated_table();
    assert_eq!(table.chunk_count(), 3);
    assert_eq!(table.chunk(0).unwrap().size(), 2);
    assert_eq!(table.chunk(1).unwrap().size(), 2);
    assert_eq!(table.chunk(2).unwrap().size(), 1);
    assert_eq!(table.row_count(), 5);
}

#[test]
fn compression_changes_encoding_but_not_values() {
    let mut table = populated_table();
    table.compress_chunk(0).unwrap();
    table.compress_chunk(1).unwrap();

    // First two chunks are dictionary-encoded, the tail stays mutable.
    assert!(matches!(table.chunk(0).unwrap().column(1).unwrap(), Column::Dictionary(_)));
    assert!(matches!(table.chunk(1).unwrap().column(1).unwrap(), Column::Dictionary(_)));
    assert!(table.chunk(2).unwrap().is_mutable());

    let expected = ["Bill", "Steve", "Alexander", "Steve", "Hasso"];
    let mut seen = Vec::new();
    for chunk_id in 0..table.chunk_count() {
        let chunk = table.chunk(chunk_id).unwrap();
        let column = chunk.column(1).unwrap();
        for offset in 0..chunk.size() {
            seen.push(column.element_at(offset).unwrap());
        }
    }
    let expected: Vec<Value> = expected.iter().map(|name| Value::from(*name)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn dictionary_width_stays_minimal_per_chunk() {
    let mut table = populated_table();
    table.compress_chunk(0).unwrap();

    let Column::Dictionary(column) = table.chunk(0).unwrap().column(1).unwrap() else {
        panic!("chunk 0 should be dictionary-encoded");
    };
    assert_eq!(column.attribute_vector().width(), 1);
    assert_eq!(column.unique_values_count(), 2);
}

#[test]
fn reference_column_resolves_through_chunks() {
    let mut table = populated_table();
    table.compress_chunk(0).unwrap();
    let table = Arc::new(table);

    // Positions may repeat and need not be sorted.
    let positions: PosList =
        vec![RowId::new(2, 0), RowId::new(0, 1), RowId::new(0, 1), RowId::new(1, 0)];
    let column = ReferenceColumn::new(Arc::clone(&table), 1, Arc::new(positions)).unwrap();

    assert_eq!(column.len(), 4);
    assert_eq!(column.data_type(), DataType::Varchar);
    assert_eq!(column.element_at(0).unwrap(), Value::from("Hasso"));
    assert_eq!(column.element_at(1).unwrap(), Value::from("Steve"));
    assert_eq!(column.element_at(2).unwrap(), Value::from("Steve"));
    assert_eq!(column.element_at(3).unwrap(), Value::from("Alexander"));
    assert!(column.element_at(4).is_err());
}

#[test]
fn reference_column_rejects_unknown_column() {
    let table = Arc::new(populated_table());
    let result = ReferenceColumn::new(table, 9, Arc::new(PosList::new()));
    assert_eq!(result.unwrap_err(), StorageError::ColumnIndexOutOfBounds { index: 9 });
}

#[test]
fn appending_to_frozen_columns_fails_directly() {
    let mut table = populated_table();
    table.compress_chunk(0).unwrap();

    let Column::Dictionary(column) = table.chunk(0).unwrap().column(0).unwrap() else {
        panic!("chunk 0 should be dictionary-encoded");
    };
    let mut frozen = Column::Dictionary(column.clone());
    assert!(matches!(
        frozen.append(&Value::Integer(9)).unwrap_err(),
        StorageError::ColumnImmutable(_)
    ));

    let table = Arc::new(populated_table());
    let reference = ReferenceColumn::new(table, 0, Arc::new(PosList::new())).unwrap();
    let mut reference = Column::Reference(reference);
    assert!(matches!(
        reference.append(&Value::Integer(9)).unwrap_err(),
        StorageError::ColumnImmutable(_)
    ));
}

#[test]
fn config_built_tables_behave_like_sized_ones() {
    let mut table = Table::with_config(TableConfig { chunk_size: 1 });
    table.add_column("id", DataType::Integer).unwrap();
    table.append(vec![Value::Integer(1)]).unwrap();
    table.append(vec![Value::Integer(2)]).unwrap();
    assert_eq!(table.chunk_count(), 2);
}

#[test]
fn unbounded_tables_never_roll() {
    let mut table = Table::default();
    table.add_column("id", DataType::Integer).unwrap();
    for i in 0..1000 {
        table.append(vec![Value::Integer(i)]).unwrap();
    }
    assert_eq!(table.chunk_count(), 1);
}

#[test]
fn compress_preserves_row_order_with_duplicates() {
    let mut table = Table::new(0);
    table.add_column("value", DataType::Integer).unwrap();
    for value in [4, 2, 7, 2, 9] {
        table.append(vec![Value::Integer(value)]).unwrap();
    }
    table.compress_chunk(0).unwrap();

    let Column::Dictionary(column) = table.chunk(0).unwrap().column(0).unwrap() else {
        panic!("expected dictionary column");
    };
    assert_eq!(column.unique_values_count(), 4);

    let decoded: Vec<Value> =
        (0..column.len()).map(|i| column.element_at(i).unwrap()).collect();
    let expected: Vec<Value> = [4, 2, 7, 2, 9].iter().map(|v| Value::Integer(*v)).collect();
    assert_eq!(decoded, expected);
}

#[test]
fn freshly_compressed_dictionary_is_sorted_and_unique() {
    let mut table = Table::new(0);
    table.add_column("value", DataType::Integer).unwrap();
    for value in [9, 4, 2, 7, 2, 4, 9, 9] {
        table.append(vec![Value::Integer(value)]).unwrap();
    }
    table.compress_chunk(0).unwrap();

    let Column::Dictionary(column) = table.chunk(0).unwrap().column(0).unwrap() else {
        panic!("expected dictionary column");
    };
    let basalt_storage::Dictionary::Integer(dictionary) = column.dictionary() else {
        panic!("expected an int dictionary");
    };
    assert_eq!(dictionary, &vec![2, 4, 7, 9]);
}
