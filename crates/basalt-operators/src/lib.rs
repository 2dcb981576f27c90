//! Basalt Operators
//!
//! Query operators over basalt tables. An operator materialises its inputs,
//! runs at most once and caches its output table:
//!
//! ```rust,ignore
//! let mut scan = TableScan::new(
//!     Box::new(GetTable::new("accounts")),
//!     table.column_id_by_name("balance")?,
//!     ScanType::GreaterThan,
//!     Value::Integer(1_000),
//! );
//! let result = scan.execute()?;
//! ```
//!
//! The scan's result is a table of reference columns sharing one position
//! list, so no row data is copied.

pub mod errors;
pub mod get_table;
pub mod operator;
pub mod table_scan;
pub mod table_wrapper;

pub use errors::OperatorError;
pub use get_table::GetTable;
pub use operator::Operator;
pub use table_scan::{ScanType, TableScan};
pub use table_wrapper::TableWrapper;
