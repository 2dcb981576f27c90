use std::sync::Arc;

use basalt_storage::{StorageManager, Table};
use tracing::debug;

use crate::errors::OperatorError;
use crate::operator::Operator;

/// Operator that retrieves a table from the storage manager by name.
pub struct GetTable {
    name: String,
    output: Option<Arc<Table>>,
}

impl GetTable {
    pub fn new(name: impl Into<String>) -> Self {
        GetTable { name: name.into(), output: None }
    }

    pub fn table_name(&self) -> &str {
        &self.name
    }
}

impl Operator for GetTable {
    fn execute(&mut self) -> Result<Arc<Table>, OperatorError> {
        if let Some(output) = &self.output {
            return Ok(Arc::clone(output));
        }

        let table = StorageManager::instance().read().get_table(&self.name)?;
        debug!(table = %self.name, rows = table.row_count(), "retrieved table");
        self.output = Some(Arc::clone(&table));
        Ok(table)
    }
}
