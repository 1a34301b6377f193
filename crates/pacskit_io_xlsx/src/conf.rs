//! XLSX constants and default preset factories.

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Sheet name used when the caller does not pick one.
pub const C_SHEET_NAME_DEFAULT: &str = "Dados";

/// Header fill color.
pub const C_HEADER_BG_COLOR: &str = "#4472C4";
/// Header font color.
pub const C_HEADER_FONT_COLOR: &str = "#FFFFFF";

/// Number format for date cells.
pub const C_NUM_FORMAT_DATE: &str = "yyyy-mm-dd";
/// Number format for timestamp cells.
pub const C_NUM_FORMAT_DATETIME: &str = "yyyy-mm-dd hh:mm:ss";

/// Header format for single-sheet exports: bold, blue fill, white font, thin border.
pub fn derive_default_header_format() -> SpecCellFormat {
    SpecCellFormat {
        if_border: true,
        ..derive_plain_header_format()
    }
}

/// Header format for multi-sheet exports (no border).
pub fn derive_plain_header_format() -> SpecCellFormat {
    SpecCellFormat {
        bold: true,
        bg_color: Some(C_HEADER_BG_COLOR.to_string()),
        font_color: Some(C_HEADER_FONT_COLOR.to_string()),
        if_border: false,
    }
}
