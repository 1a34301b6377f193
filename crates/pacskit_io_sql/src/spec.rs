//! Query/export specification models.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use pacskit_io_xlsx::{
    C_SHEET_NAME_DEFAULT, SpecAutofitCellsPolicy, SpecXlsxSheetWriteOptions, XlsxWriteError,
    derive_default_header_format,
};
use polars::prelude::PolarsError;
use thiserror::Error;

use crate::conf::{
    DUR_CONNECTION_TIMEOUT_DEFAULT, N_POOL_MAX_DEFAULT, N_POOL_MIN_DEFAULT, N_PORT_DEFAULT,
};

////////////////////////////////////////////////////////////////////////////////
// #region ConnectionSpecification

/// Where and as whom to connect.
#[derive(Clone, PartialEq, Eq)]
pub struct SpecConnectionParams {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl SpecConnectionParams {
    /// Parameters on the default port.
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            database: database.into(),
            user: user.into(),
            password: password.into(),
            port: N_PORT_DEFAULT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

// Password stays out of logs and panic messages.
impl fmt::Debug for SpecConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecConnectionParams")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("port", &self.port)
            .finish()
    }
}

/// Connection pool bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecPoolOptions {
    /// Connections kept open while idle.
    pub min_conn: u32,
    /// Maximum simultaneously open connections.
    pub max_conn: u32,
    /// Checkout wait before giving up.
    pub connection_timeout: Duration,
}

impl Default for SpecPoolOptions {
    fn default() -> Self {
        Self {
            min_conn: N_POOL_MIN_DEFAULT,
            max_conn: N_POOL_MAX_DEFAULT,
            connection_timeout: DUR_CONNECTION_TIMEOUT_DEFAULT,
        }
    }
}

impl SpecPoolOptions {
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.max_conn == 0 {
            return Err(ExportError::InvalidConfig(
                "max_conn must be at least 1".to_string(),
            ));
        }
        if self.min_conn > self.max_conn {
            return Err(ExportError::InvalidConfig(format!(
                "min_conn ({}) exceeds max_conn ({})",
                self.min_conn, self.max_conn
            )));
        }
        Ok(())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ValueSpecification

/// How result rows are shaped before becoming a table.
///
/// `Mapping` keys each row by column name: duplicate names collapse into one
/// column (last value wins) and an empty described result has no columns.
/// `Tuple` keeps every described column, so an empty result still carries
/// its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumRowMode {
    #[default]
    Mapping,
    Tuple,
}

/// Positional query parameter, bound to `$1`, `$2`, ...
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        SqlParam::Bool(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(i64::from(value))
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        SqlParam::Float(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(value: NaiveDate) -> Self {
        SqlParam::Date(value)
    }
}

impl From<NaiveDateTime> for SqlParam {
    fn from(value: NaiveDateTime) -> Self {
        SqlParam::Timestamp(value)
    }
}

/// Decoded result cell. Timezone-aware timestamps arrive normalized to UTC.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

/// Raw result of one statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecQueryResult {
    /// Column names in select order; `None` when the statement describes no
    /// result columns.
    pub columns: Option<Vec<String>>,
    pub rows: Vec<Vec<SqlValue>>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetOptions

/// Single-sheet export options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetOptions {
    pub sheet_name: String,
    /// Prepend the 0-based row index as the first column.
    pub if_include_row_index: bool,
    /// Size columns from their longest value, capped at 50.
    pub if_auto_width: bool,
    pub if_freeze_header: bool,
}

impl Default for SpecSheetOptions {
    fn default() -> Self {
        Self {
            sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
            if_include_row_index: false,
            if_auto_width: true,
            if_freeze_header: true,
        }
    }
}

impl SpecSheetOptions {
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// Writer options carrying the bordered blue header.
    pub fn to_write_options(&self) -> SpecXlsxSheetWriteOptions {
        SpecXlsxSheetWriteOptions {
            if_include_row_index: self.if_include_row_index,
            if_freeze_header: self.if_freeze_header,
            policy_autofit: if self.if_auto_width {
                SpecAutofitCellsPolicy::default()
            } else {
                SpecAutofitCellsPolicy::disabled()
            },
            fmt_header: derive_default_header_format(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failures raised by the exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Pool bounds rejected before any connection is opened.
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(String),
    /// Initial connections could not be opened.
    #[error("failed to create connection pool: {0}")]
    PoolInit(#[source] r2d2::Error),
    /// No connection became free within the checkout timeout.
    #[error("failed to check out a connection: {0}")]
    Checkout(#[source] r2d2::Error),
    /// The database rejected the statement or its parameters.
    #[error("query execution failed: {0}")]
    Query(#[source] Box<dyn StdError + Send + Sync>),
    #[error("column `{column}` has unsupported type `{type_name}`; cast it in the query (e.g. `::text`)")]
    UnsupportedColumnType { column: String, type_name: String },
    /// Statement returned no result description.
    #[error("query returned no result columns")]
    NoResultColumns,
    #[error("row {row} has {found} values but {expected} columns were described")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Rows could not be assembled into a table.
    #[error("failed to build table: {0}")]
    Table(#[from] PolarsError),
    /// Workbook could not be written or saved.
    #[error(transparent)]
    Write(#[from] XlsxWriteError),
}

impl ExportError {
    /// Wrap any database error as a query failure.
    pub fn query(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ExportError::Query(err.into())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
