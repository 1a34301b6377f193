//! Shared XLSX specification models.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::derive_default_header_format;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Header cell style; body cells use the workbook default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecCellFormat {
    pub bold: bool,
    /// Background fill color (`#RRGGBB`).
    pub bg_color: Option<String>,
    /// Font color (`#RRGGBB`).
    pub font_color: Option<String>,
    /// Thin border on all four sides.
    pub if_border: bool,
}

/// Normalized cell value during conversion/write pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    String(String),
    Number(f64),
    Bool(bool),
    /// Calendar date, written as an Excel date serial.
    Date(NaiveDate),
    /// Timestamp, written as an Excel date serial with a time fraction.
    DateTime(NaiveDateTime),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Column width policy.
///
/// When enabled, final width is `min(width_cell_max, longest +
/// width_cell_padding)` where `longest` is the character count of the longest
/// stringified cell, header included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    pub if_enabled: bool,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            if_enabled: true,
            width_cell_max: 50,
            width_cell_padding: 2,
        }
    }
}

impl SpecAutofitCellsPolicy {
    /// Policy with autofit switched off.
    pub fn disabled() -> Self {
        Self {
            if_enabled: false,
            ..Self::default()
        }
    }
}

/// Per-sheet call options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxSheetWriteOptions {
    /// Prepend a 0-based row index column with a blank header.
    pub if_include_row_index: bool,
    /// Keep row 1 visible while scrolling.
    pub if_freeze_header: bool,
    /// Column autofit policy.
    pub policy_autofit: SpecAutofitCellsPolicy,
    /// Header cell format.
    pub fmt_header: SpecCellFormat,
}

impl Default for SpecXlsxSheetWriteOptions {
    fn default() -> Self {
        Self {
            if_include_row_index: false,
            if_freeze_header: true,
            policy_autofit: SpecAutofitCellsPolicy::default(),
            fmt_header: derive_default_header_format(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Concrete sheet part emitted to workbook (after Excel-limit slicing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetSlice {
    /// Actual unique sheet name in workbook.
    pub sheet_name: String,
    /// Inclusive source row start.
    pub row_start_inclusive: usize,
    /// Exclusive source row end.
    pub row_end_exclusive: usize,
}

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheet slices produced by the write call.
    pub sheets: Vec<SpecSheetSlice>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failures raised while building or saving a workbook.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    /// Workbook/worksheet operation or file save failed.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
    /// DataFrame cell access failed.
    #[error("dataframe access error: {0}")]
    Polars(#[from] PolarsError),
    /// Table shape or option cannot be written.
    #[error("{0}")]
    InvalidInput(String),
    /// Writer was used after `close()`.
    #[error("Cannot write after close().")]
    Closed,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
