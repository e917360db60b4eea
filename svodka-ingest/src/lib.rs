//! svodka-ingest: the tabular boundary. Reads the bank's Cyrillic-labeled
//! operations CSV into normalized transactions and writes spending
//! reports back out as CSV.

pub mod export;
pub mod operations;

pub use export::{default_report_path, save_report};
pub use operations::{read_operations, read_operations_csv};
