use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::StorageError;
use crate::table::Table;

static STORAGE_MANAGER: Lazy<RwLock<StorageManager>> =
    Lazy::new(|| RwLock::new(StorageManager::new()));

/// Process-wide mapping from table names to published tables.
///
/// Adding a table publishes it as an immutable `Arc<Table>`; from then on
/// it is shared by operators and reference columns. Lifecycle management
/// (add/drop/reset) assumes single-threaded use.
#[derive(Debug, Default)]
pub struct StorageManager {
    tables: HashMap<String, Arc<Table>>,
}

impl StorageManager {
    fn new() -> Self {
        StorageManager { tables: HashMap::new() }
    }

    /// The process-wide instance.
    pub fn instance() -> &'static RwLock<StorageManager> {
        &STORAGE_MANAGER
    }

    /// Publish a table under a name. Fails on duplicate names. Returns the
    /// published handle.
    pub fn add_table(&mut self, name: &str, table: Table) -> Result<Arc<Table>, StorageError> {
        if self.tables.contains_key(name) {
            return Err(StorageError::TableAlreadyExists(name.to_string()));
        }
        let table = Arc::new(table);
        debug!(table = name, rows = table.row_count(), "table added to storage manager");
        self.tables.insert(name.to_string(), Arc::clone(&table));
        Ok(table)
    }

    /// Remove a table. Fails if the name is unknown.
    pub fn drop_table(&mut self, name: &str) -> Result<(), StorageError> {
        match self.tables.remove(name) {
            Some(_) => {
                debug!(table = name, "table dropped from storage manager");
                Ok(())
            }
            None => Err(StorageError::TableNotFound(name.to_string())),
        }
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Result<Arc<Table>, StorageError> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Names of all published tables, in no particular order.
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Drop everything. Intended for test isolation.
    pub fn reset(&mut self) {
        self.tables.clear();
    }
}

impl fmt::Display for StorageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, table) in &self.tables {
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                name,
                table.col_count(),
                table.row_count(),
                table.chunk_count()
            )?;
        }
        Ok(())
    }
}
