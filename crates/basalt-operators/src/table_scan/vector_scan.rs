//! Generic scan kernels over backing vectors.
//!
//! Both kernels iterate a vector, order each element against the search
//! value through a caller-supplied comparison, and collect matching
//! positions. They are the hot loops of every scan: the comparison closure
//! is the only per-element work besides the predicate test.

use std::cmp::Ordering;

use basalt_types::{ChunkId, PosList, RowId};

use super::ScanType;
use crate::errors::OperatorError;

/// Offset-form kernel: scans a vector of values and records matching
/// offsets as `(chunk_id, offset)` row ids, in offset order.
pub(crate) fn scan_values<V>(
    values: &[V],
    mut compare: impl FnMut(&V) -> Ordering,
    scan_type: ScanType,
    chunk_id: ChunkId,
    pos_list: &mut PosList,
) {
    match scan_type {
        ScanType::MatchNone => {}
        ScanType::MatchAll => {
            for chunk_offset in 0..values.len() {
                pos_list.push(RowId::new(chunk_id, chunk_offset as u32));
            }
        }
        predicate => {
            for (chunk_offset, value) in values.iter().enumerate() {
                if predicate.matches(compare(value)) {
                    pos_list.push(RowId::new(chunk_id, chunk_offset as u32));
                }
            }
        }
    }
}

/// Row-id-form kernel: scans a position list and re-emits the row ids of
/// matching elements, in position-list order. The comparison resolves each
/// row id to a value first and may fail doing so.
pub(crate) fn scan_row_ids(
    row_ids: &[RowId],
    mut compare: impl FnMut(&RowId) -> Result<Ordering, OperatorError>,
    scan_type: ScanType,
    pos_list: &mut PosList,
) -> Result<(), OperatorError> {
    match scan_type {
        ScanType::MatchNone => {}
        ScanType::MatchAll => pos_list.extend_from_slice(row_ids),
        predicate => {
            for row_id in row_ids {
                if predicate.matches(compare(row_id)?) {
                    pos_list.push(*row_id);
                }
            }
        }
    }
    Ok(())
}
