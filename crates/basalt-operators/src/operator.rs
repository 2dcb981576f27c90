use std::sync::Arc;

use basalt_storage::Table;

use crate::errors::OperatorError;

/// An executable query operator.
///
/// Operators form a tree; executing one materialises its upstream inputs
/// first. Every operator runs at most once: the first `execute` produces
/// the output table, later calls return the cached result.
pub trait Operator {
    fn execute(&mut self) -> Result<Arc<Table>, OperatorError>;
}
