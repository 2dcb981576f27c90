/// Index of a chunk within a table.
pub type ChunkId = u32;

/// Offset of a row within a chunk.
pub type ChunkOffset = u32;

/// Index of a column within a table or chunk.
pub type ColumnId = u16;

/// Index of an entry within a dictionary column's dictionary.
pub type ValueId = u32;

/// Sentinel value id. The top code of every attribute-vector width is
/// reserved for it, so the sentinel survives narrowing to 8 or 16 bits.
pub const INVALID_VALUE_ID: ValueId = ValueId::MAX;

/// Position of a single row in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    pub chunk_id: ChunkId,
    pub chunk_offset: ChunkOffset,
}

impl RowId {
    pub fn new(chunk_id: ChunkId, chunk_offset: ChunkOffset) -> Self {
        RowId { chunk_id, chunk_offset }
    }
}

/// Ordered sequence of row positions, the output shape of a scan.
///
/// Once a position list is handed to a reference column it is shared
/// immutably; downstream operators observe its ordering.
pub type PosList = Vec<RowId>;
