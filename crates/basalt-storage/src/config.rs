use serde::{Deserialize, Serialize};

/// Table construction options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Maximum number of rows per chunk (0 = unbounded)
    #[serde(default)]
    pub chunk_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig { chunk_size: 0 }
    }
}
