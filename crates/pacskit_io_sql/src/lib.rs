//! `pacskit_io_sql` v1:
//! Run SQL against a pooled database connection and export results to XLSX.
//!
//! - `conf`       : connection/pool defaults
//! - `spec`       : options, value models and errors
//! - `connection` : query seam and the Postgres implementation
//! - `table`      : query result to DataFrame conversion
//! - `exporter`   : pool owner and export operations
pub mod conf;
pub mod connection;
pub mod exporter;
pub mod spec;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use connection::QueryConnection;
pub use exporter::{PostgresExporter, SqlExporter, quick_export};
pub use spec::{
    EnumRowMode, ExportError, SpecConnectionParams, SpecPoolOptions, SpecQueryResult,
    SpecSheetOptions, SqlParam, SqlValue,
};
pub use table::derive_dataframe_from_result;
