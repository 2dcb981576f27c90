// ============================================================================
// Errors
// ============================================================================

use basalt_types::{ChunkId, DataType, TypeError, ValueId};

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    TableNotFound(String),
    TableAlreadyExists(String),
    TableNotEmpty(String),
    ColumnNotFound { column_name: String },
    ColumnCountMismatch { expected: usize, actual: usize },
    TypeMismatch { column: String, expected: DataType, actual: DataType },
    CastError { from: DataType, to: DataType },
    ColumnImmutable(String),
    ChunkImmutable { chunk_id: ChunkId },
    ChunkIndexOutOfBounds { index: usize },
    ColumnIndexOutOfBounds { index: usize },
    RowIndexOutOfBounds { index: usize },
    ValueIdOutOfBounds { value_id: ValueId },
    DictionaryTooLarge { unique_values: usize },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::TableNotFound(name) => write!(f, "Table '{}' not found", name),
            StorageError::TableAlreadyExists(name) => {
                write!(f, "Table '{}' already exists", name)
            }
            StorageError::TableNotEmpty(column) => {
                write!(
                    f,
                    "Cannot add column '{}': definitions may only change while the table is empty",
                    column
                )
            }
            StorageError::ColumnNotFound { column_name } => {
                write!(f, "Column '{}' not found", column_name)
            }
            StorageError::ColumnCountMismatch { expected, actual } => {
                write!(f, "Column count mismatch: expected {}, got {}", expected, actual)
            }
            StorageError::TypeMismatch { column, expected, actual } => {
                write!(
                    f,
                    "Type mismatch in column '{}': expected {}, got {}",
                    column, expected, actual
                )
            }
            StorageError::CastError { from, to } => write!(f, "Cannot cast {} to {}", from, to),
            StorageError::ColumnImmutable(encoding) => {
                write!(f, "{} columns are immutable", encoding)
            }
            StorageError::ChunkImmutable { chunk_id } => {
                write!(f, "Chunk {} has been compressed and is immutable", chunk_id)
            }
            StorageError::ChunkIndexOutOfBounds { index } => {
                write!(f, "Chunk index {} out of bounds", index)
            }
            StorageError::ColumnIndexOutOfBounds { index } => {
                write!(f, "Column index {} out of bounds", index)
            }
            StorageError::RowIndexOutOfBounds { index } => {
                write!(f, "Row index {} out of bounds", index)
            }
            StorageError::ValueIdOutOfBounds { value_id } => {
                write!(f, "Value id {} out of bounds", value_id)
            }
            StorageError::DictionaryTooLarge { unique_values } => {
                write!(
                    f,
                    "Dictionary with {} entries exceeds the widest attribute vector",
                    unique_values
                )
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<TypeError> for StorageError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::CastError { from, to } => StorageError::CastError { from, to },
        }
    }
}
