use std::sync::Arc;

use basalt_storage::Table;

use crate::errors::OperatorError;
use crate::operator::Operator;

/// Operator that injects an existing table into a plan, bypassing the
/// storage manager. Mostly used to chain operators over intermediate
/// results in tests and benchmarks.
pub struct TableWrapper {
    table: Arc<Table>,
}

impl TableWrapper {
    pub fn new(table: Table) -> Self {
        TableWrapper { table: Arc::new(table) }
    }

    pub fn from_shared(table: Arc<Table>) -> Self {
        TableWrapper { table }
    }
}

impl Operator for TableWrapper {
    fn execute(&mut self) -> Result<Arc<Table>, OperatorError> {
        Ok(Arc::clone(&self.table))
    }
}
