use basalt_types::{ChunkId, ColumnId, DataType, Value};

use crate::chunk::Chunk;
use crate::column::{Column, DictionaryColumn, ValueColumn};
use crate::config::TableConfig;
use crate::error::StorageError;

/// In-memory table: an ordered sequence of chunks sharing a column schema.
///
/// New rows always land in the last chunk. A fresh chunk is started when
/// the current one reaches `chunk_size` or was frozen by
/// [`Table::compress_chunk`]. Physical value columns are created lazily on
/// the first append after a definition was added.
#[derive(Debug, Clone)]
pub struct Table {
    chunk_size: u32,
    chunks: Vec<Chunk>,
    column_names: Vec<String>,
    column_types: Vec<DataType>,
    columns_synchronized: bool,
}

impl Table {
    /// Create an empty table. `chunk_size` caps the rows per chunk; 0 means
    /// unbounded.
    pub fn new(chunk_size: u32) -> Self {
        Table {
            chunk_size,
            chunks: vec![Chunk::new()],
            column_names: Vec::new(),
            column_types: Vec::new(),
            columns_synchronized: true,
        }
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self::new(config.chunk_size)
    }

    /// Register a column in the schema without creating its physical
    /// column yet. Only permitted while the table has a single empty chunk.
    pub fn add_column_definition(
        &mut self,
        name: &str,
        data_type: DataType,
    ) -> Result<(), StorageError> {
        if self.chunks.len() != 1 || self.chunks[0].size() > 0 {
            return Err(StorageError::TableNotEmpty(name.to_string()));
        }
        self.column_names.push(name.to_string());
        self.column_types.push(data_type);
        self.columns_synchronized = false;
        Ok(())
    }

    /// Register a column and immediately create its empty value column.
    pub fn add_column(&mut self, name: &str, data_type: DataType) -> Result<(), StorageError> {
        self.add_column_definition(name, data_type)?;
        self.create_missing_columns();
        Ok(())
    }

    /// Append one row. The row must match the schema in arity and element
    /// kinds.
    pub fn append(&mut self, values: Vec<Value>) -> Result<(), StorageError> {
        if values.len() != self.column_types.len() {
            return Err(StorageError::ColumnCountMismatch {
                expected: self.column_types.len(),
                actual: values.len(),
            });
        }
        for ((value, data_type), name) in
            values.iter().zip(&self.column_types).zip(&self.column_names)
        {
            if !value.is_compatible_with(*data_type) {
                return Err(StorageError::TypeMismatch {
                    column: name.clone(),
                    expected: *data_type,
                    actual: value.data_type(),
                });
            }
        }

        if !self.columns_synchronized {
            self.create_missing_columns();
        }

        let needs_new_chunk = match self.chunks.last() {
            Some(chunk) => {
                !chunk.is_mutable()
                    || (self.chunk_size != 0 && chunk.size() as u32 >= self.chunk_size)
            }
            None => true,
        };
        if needs_new_chunk {
            self.create_new_chunk();
        }

        let chunk = self
            .chunks
            .last_mut()
            .ok_or(StorageError::ChunkIndexOutOfBounds { index: 0 })?;
        chunk.append(&values)
    }

    /// Replace every value column of a chunk with an equivalent dictionary
    /// column. The chunk is immutable afterwards; the next append starts a
    /// fresh chunk.
    pub fn compress_chunk(&mut self, chunk_id: ChunkId) -> Result<(), StorageError> {
        if !self.columns_synchronized {
            self.create_missing_columns();
        }
        let chunk = self
            .chunks
            .get_mut(chunk_id as usize)
            .ok_or(StorageError::ChunkIndexOutOfBounds { index: chunk_id as usize })?;
        if !chunk.is_mutable() {
            return Err(StorageError::ChunkImmutable { chunk_id });
        }

        for column in chunk.columns_mut() {
            if let Column::Value(value_column) = column {
                let compressed = DictionaryColumn::compress(value_column)?;
                *column = Column::Dictionary(compressed);
            }
        }
        Ok(())
    }

    fn create_new_chunk(&mut self) {
        self.chunks.push(Chunk::new());
        self.create_missing_columns();
    }

    // Columns may only ever be added, so existing physical columns already
    // match their definition; only the tail is missing.
    fn create_missing_columns(&mut self) {
        let Some(chunk) = self.chunks.last_mut() else {
            return;
        };
        for data_type in self.column_types.iter().skip(chunk.col_count() as usize) {
            chunk.add_column(Column::Value(ValueColumn::new(*data_type)));
        }
        self.columns_synchronized = true;
    }

    /// Number of columns in the schema.
    pub fn col_count(&self) -> u16 {
        self.column_names.len() as u16
    }

    /// Number of rows across all chunks.
    pub fn row_count(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.size()).sum()
    }

    /// Number of chunks. Always at least one.
    pub fn chunk_count(&self) -> u32 {
        self.chunks.len() as u32
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Get a chunk by id.
    pub fn chunk(&self, chunk_id: ChunkId) -> Result<&Chunk, StorageError> {
        self.chunks
            .get(chunk_id as usize)
            .ok_or(StorageError::ChunkIndexOutOfBounds { index: chunk_id as usize })
    }

    /// Get a chunk for modification. Used by operators to attach reference
    /// columns to a freshly built result table.
    pub fn chunk_mut(&mut self, chunk_id: ChunkId) -> Result<&mut Chunk, StorageError> {
        self.chunks
            .get_mut(chunk_id as usize)
            .ok_or(StorageError::ChunkIndexOutOfBounds { index: chunk_id as usize })
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column_name(&self, column_id: ColumnId) -> Result<&str, StorageError> {
        self.column_names
            .get(column_id as usize)
            .map(String::as_str)
            .ok_or(StorageError::ColumnIndexOutOfBounds { index: column_id as usize })
    }

    pub fn column_type(&self, column_id: ColumnId) -> Result<DataType, StorageError> {
        self.column_types
            .get(column_id as usize)
            .copied()
            .ok_or(StorageError::ColumnIndexOutOfBounds { index: column_id as usize })
    }

    /// Look up a column id by name.
    pub fn column_id_by_name(&self, column_name: &str) -> Result<ColumnId, StorageError> {
        self.column_names
            .iter()
            .position(|name| name == column_name)
            .map(|index| index as ColumnId)
            .ok_or_else(|| StorageError::ColumnNotFound { column_name: column_name.to_string() })
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(0)
    }
}
