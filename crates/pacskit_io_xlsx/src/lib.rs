//! `pacskit_io_xlsx` v1:
//! DataFrame-to-XLSX writer kernel for query exports.
//!
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions
//! - `writer` : workbook writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_NUM_FORMAT_DATE, C_NUM_FORMAT_DATETIME, C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX,
    N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL, derive_default_header_format,
    derive_plain_header_format,
};
pub use spec::{
    EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat, SpecSheetSlice, SpecXlsxReport,
    SpecXlsxSheetWriteOptions, XlsxWriteError,
};
pub use util::{calculate_column_width, plan_sheet_slices, sanitize_sheet_name};
pub use writer::{XlsxWriter, write_dataframe_to_xlsx};
