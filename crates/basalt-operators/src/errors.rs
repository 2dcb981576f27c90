use basalt_storage::StorageError;
use basalt_types::TypeError;

/// Errors surfaced by operator execution.
///
/// All of them are fatal: the operator aborts and no partial output is
/// observable downstream.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Type(#[from] TypeError),

    /// A reference column pointed at another reference column. Scan outputs
    /// always reference physical tables, so this indicates a corrupted
    /// plan.
    #[error("reference columns must not reference other reference columns")]
    NestedReference,

    /// The scanned column was reference-encoded in some chunks and
    /// physical in others.
    #[error("scan inputs must not mix reference columns with physical columns")]
    MixedInput,
}
