//! Typed, encoding-aware table scan.
//!
//! The scan resolves the scanned column's element kind once, from the input
//! schema, then dispatches per chunk on the column's physical encoding:
//!
//! - value columns are compared directly on their backing vector;
//! - dictionary columns are planned first: the predicate is translated into
//!   an equivalent predicate over value ids, then the raw attribute vector
//!   is scanned at its native width — the hot loop never touches the
//!   dictionary;
//! - reference columns are resolved row id by row id through a chunk-cached
//!   getter.
//!
//! All chunks feed one position list; the result table is a single chunk of
//! reference columns sharing it.

mod value_getter;
mod vector_scan;

use std::cmp::Ordering;
use std::sync::Arc;

use basalt_storage::{
    AttributeVector, Column, ColumnType, DictionaryColumn, ReferenceColumn, Table,
};
use basalt_types::{with_native_type, ChunkId, ColumnId, PosList, Value, ValueId, INVALID_VALUE_ID};
use tracing::debug;

use crate::errors::OperatorError;
use crate::operator::Operator;
use value_getter::ReferenceGetter;
use vector_scan::{scan_row_ids, scan_values};

/// Comparison predicate of a table scan.
///
/// `MatchAll` and `MatchNone` are pseudo-predicates produced by dictionary
/// predicate planning when a predicate is decided wholesale; they ignore
/// the search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanType {
    Equals,
    NotEquals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
    MatchAll,
    MatchNone,
}

impl ScanType {
    /// Whether an element that orders as `ordering` against the search
    /// value satisfies the predicate.
    pub(crate) fn matches(self, ordering: Ordering) -> bool {
        match self {
            ScanType::Equals => ordering == Ordering::Equal,
            ScanType::NotEquals => ordering != Ordering::Equal,
            ScanType::LessThan => ordering == Ordering::Less,
            ScanType::LessThanEquals => ordering != Ordering::Greater,
            ScanType::GreaterThan => ordering == Ordering::Greater,
            ScanType::GreaterThanEquals => ordering != Ordering::Less,
            ScanType::MatchAll => true,
            ScanType::MatchNone => false,
        }
    }
}

/// Operator that filters one column of its input table and outputs a
/// reference-backed result table.
pub struct TableScan {
    input: Box<dyn Operator>,
    column_id: ColumnId,
    scan_type: ScanType,
    search_value: Value,
    output: Option<Arc<Table>>,
}

impl TableScan {
    pub fn new(
        input: Box<dyn Operator>,
        column_id: ColumnId,
        scan_type: ScanType,
        search_value: Value,
    ) -> Self {
        TableScan { input, column_id, scan_type, search_value, output: None }
    }

    pub fn column_id(&self) -> ColumnId {
        self.column_id
    }

    pub fn scan_type(&self) -> ScanType {
        self.scan_type
    }

    pub fn search_value(&self) -> &Value {
        &self.search_value
    }
}

impl Operator for TableScan {
    fn execute(&mut self) -> Result<Arc<Table>, OperatorError> {
        if let Some(output) = &self.output {
            return Ok(Arc::clone(output));
        }

        let input_table = self.input.execute()?;
        let data_type = input_table.column_type(self.column_id)?;

        let pos_list = with_native_type!(data_type, |T| {
            let search_value = T::from_value(&self.search_value)?;
            scan_table::<T>(&input_table, self.column_id, self.scan_type, &search_value)?
        });
        debug!(
            column = self.column_id,
            rows = pos_list.len(),
            input_rows = input_table.row_count(),
            "table scan finished"
        );

        let output = Arc::new(build_output_table(&input_table, self.column_id, pos_list)?);
        self.output = Some(Arc::clone(&output));
        Ok(output)
    }
}

fn scan_table<T: ColumnType>(
    table: &Table,
    column_id: ColumnId,
    scan_type: ScanType,
    search_value: &T,
) -> Result<PosList, OperatorError> {
    let mut pos_list = PosList::new();
    let mut input_is_reference = None;
    for chunk_id in 0..table.chunk_count() {
        let chunk = table.chunk(chunk_id)?;
        // Physical columns are created lazily; a chunk that does not have
        // them yet holds no rows.
        let Some(column) = chunk.columns().get(column_id as usize) else {
            continue;
        };

        // The input is either reference-based throughout or not at all;
        // the result table relies on chunk 0 being representative.
        let is_reference = matches!(column, Column::Reference(_));
        match input_is_reference {
            None => input_is_reference = Some(is_reference),
            Some(previous) if previous != is_reference => {
                return Err(OperatorError::MixedInput);
            }
            Some(_) => {}
        }

        scan_column(column, chunk_id, scan_type, search_value, &mut pos_list)?;
    }
    Ok(pos_list)
}

// Dispatch on the column's physical encoding.
fn scan_column<T: ColumnType>(
    column: &Column,
    chunk_id: ChunkId,
    scan_type: ScanType,
    search_value: &T,
    pos_list: &mut PosList,
) -> Result<(), OperatorError> {
    match column {
        Column::Value(value_column) => {
            let values = T::values(value_column).ok_or(basalt_types::TypeError::CastError {
                from: value_column.data_type(),
                to: T::DATA_TYPE,
            })?;
            scan_values(
                values.as_slice(),
                |value| value.compare(search_value),
                scan_type,
                chunk_id,
                pos_list,
            );
            Ok(())
        }
        Column::Dictionary(dictionary_column) => {
            scan_dictionary_column(dictionary_column, chunk_id, scan_type, search_value, pos_list)
        }
        Column::Reference(reference_column) => {
            let mut getter = ReferenceGetter::<T>::new(
                reference_column.referenced_table(),
                reference_column.referenced_column_id(),
            );
            scan_row_ids(
                reference_column.pos_list().as_slice(),
                |row_id| Ok(getter.get(row_id)?.compare(search_value)),
                scan_type,
                pos_list,
            )
        }
    }
}

fn scan_dictionary_column<T: ColumnType>(
    column: &DictionaryColumn,
    chunk_id: ChunkId,
    scan_type: ScanType,
    search_value: &T,
    pos_list: &mut PosList,
) -> Result<(), OperatorError> {
    let (comparison_id, scan_type) = plan_dictionary_scan(column, scan_type, search_value)?;

    // Scan the raw backing vector at its native width, narrowing the
    // comparison id once instead of widening every entry.
    match column.attribute_vector() {
        AttributeVector::Byte(values) => {
            let comparison_id = comparison_id as u8;
            scan_values(
                values.as_slice(),
                |id| id.cmp(&comparison_id),
                scan_type,
                chunk_id,
                pos_list,
            );
        }
        AttributeVector::Short(values) => {
            let comparison_id = comparison_id as u16;
            scan_values(
                values.as_slice(),
                |id| id.cmp(&comparison_id),
                scan_type,
                chunk_id,
                pos_list,
            );
        }
        AttributeVector::Word(values) => {
            scan_values(
                values.as_slice(),
                |id| id.cmp(&comparison_id),
                scan_type,
                chunk_id,
                pos_list,
            );
        }
    }
    Ok(())
}

/// Translate a predicate over decoded values into an equivalent predicate
/// over value ids.
///
/// Value ids preserve the dictionary's order, so when the search value is
/// present the predicate carries over to its id unchanged. When it is
/// absent, `lower_bound` points at the first entry greater than it and the
/// predicate shifts: everything at or past that id strictly exceeds the
/// search value.
fn plan_dictionary_scan<T: ColumnType>(
    column: &DictionaryColumn,
    scan_type: ScanType,
    search_value: &T,
) -> Result<(ValueId, ScanType), OperatorError> {
    if scan_type == ScanType::MatchAll || scan_type == ScanType::MatchNone {
        return Ok((INVALID_VALUE_ID, scan_type));
    }

    let lower_bound = column.lower_bound(search_value)?;

    // Every stored value is smaller than the search value; each predicate
    // is decided wholesale.
    if lower_bound == INVALID_VALUE_ID {
        let decided = match scan_type {
            ScanType::Equals | ScanType::GreaterThan | ScanType::GreaterThanEquals => {
                ScanType::MatchNone
            }
            _ => ScanType::MatchAll,
        };
        return Ok((INVALID_VALUE_ID, decided));
    }

    let dictionary = T::dictionary(column.dictionary()).ok_or(
        basalt_types::TypeError::CastError { from: column.data_type(), to: T::DATA_TYPE },
    )?;
    let value_at_lower_bound = dictionary
        .get(lower_bound as usize)
        .ok_or(basalt_storage::StorageError::ValueIdOutOfBounds { value_id: lower_bound })?;

    // The search value is absent: the entry at the lower bound is the first
    // one greater than it.
    if value_at_lower_bound.compare(search_value) != Ordering::Equal {
        let translated = match scan_type {
            ScanType::Equals => (INVALID_VALUE_ID, ScanType::MatchNone),
            ScanType::NotEquals => (INVALID_VALUE_ID, ScanType::MatchAll),
            ScanType::GreaterThan | ScanType::GreaterThanEquals => {
                (lower_bound, ScanType::GreaterThanEquals)
            }
            _ => (lower_bound, ScanType::LessThan),
        };
        return Ok(translated);
    }

    Ok((lower_bound, scan_type))
}

fn build_output_table(
    input_table: &Arc<Table>,
    column_id: ColumnId,
    pos_list: PosList,
) -> Result<Table, OperatorError> {
    // A reference-based input is not referenced again; the result points
    // straight at the table its reference columns already point at.
    let referenced_table = match input_table
        .chunk(0)
        .ok()
        .and_then(|chunk| chunk.columns().get(column_id as usize))
    {
        Some(Column::Reference(reference_column)) => {
            Arc::clone(reference_column.referenced_table())
        }
        _ => Arc::clone(input_table),
    };

    let mut output = Table::new(0);
    for id in 0..referenced_table.col_count() {
        output.add_column_definition(
            referenced_table.column_name(id)?,
            referenced_table.column_type(id)?,
        )?;
    }

    // One shared position list behind every output column.
    let pos_list = Arc::new(pos_list);
    let chunk = output.chunk_mut(0)?;
    for id in 0..referenced_table.col_count() {
        let column =
            ReferenceColumn::new(Arc::clone(&referenced_table), id, Arc::clone(&pos_list))?;
        chunk.add_column(Column::Reference(column));
    }

    Ok(output)
}
