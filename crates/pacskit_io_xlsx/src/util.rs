//! Stateless helper utilities used by the XLSX writer kernel.

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::{SpecAutofitCellsPolicy, SpecSheetSlice, SpecXlsxReport};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Split `height_df` body rows into sheet parts that fit under one header row.
///
/// A single part keeps `sheet_name`; overflow parts are suffixed `_1`, `_2`, ...
pub fn plan_sheet_slices(
    height_df: usize,
    sheet_name: &str,
    report: &mut SpecXlsxReport,
) -> Vec<SpecSheetSlice> {
    let n_rows_data_max = N_NROWS_EXCEL_MAX - 1;

    let mut l_row_slices = Vec::new();
    let mut n_row_start = 0;
    while n_row_start < height_df {
        let n_row_end = usize::min(height_df, n_row_start + n_rows_data_max);
        l_row_slices.push((n_row_start, n_row_end));
        n_row_start = n_row_end;
    }
    if l_row_slices.is_empty() {
        l_row_slices.push((0, 0));
    }

    let n_parts_total = l_row_slices.len();
    if n_parts_total > 1 {
        report.warn(format!(
            "Excel row limit overflow: split into {n_parts_total} sheets."
        ));
    }

    l_row_slices
        .into_iter()
        .enumerate()
        .map(|(n_idx, (row_start, row_end))| SpecSheetSlice {
            sheet_name: if n_parts_total == 1 {
                sheet_name.to_string()
            } else {
                create_sheet_identifier(sheet_name, n_idx + 1)
            },
            row_start_inclusive: row_start,
            row_end_exclusive: row_end,
        })
        .collect()
}

/// Create suffixed sheet name (`base_1`, `base_2`, ...), respecting length cap.
pub fn create_sheet_identifier(base_name: &str, part_idx_1based: usize) -> String {
    let c_sheet_name_suffix = format!("_{part_idx_1based}");
    let n_len_base_name_max = N_LEN_EXCEL_SHEET_NAME_MAX.saturating_sub(c_sheet_name_suffix.len());

    let c_sheet_name_base: String = base_name
        .chars()
        .take(usize::max(1, n_len_base_name_max))
        .collect();

    format!("{c_sheet_name_base}{c_sheet_name_suffix}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnWidth

/// Final column width from recorded header/body text lengths.
///
/// Returns `None` when autofit is disabled.
pub fn calculate_column_width(
    n_len_header: usize,
    n_len_body_max: usize,
    policy: &SpecAutofitCellsPolicy,
) -> Option<usize> {
    if !policy.if_enabled {
        return None;
    }
    let n_len_recorded = usize::max(n_len_header, n_len_body_max);
    let n_max = usize::min(255, policy.width_cell_max);
    Some(usize::min(n_max, n_len_recorded + policy.width_cell_padding))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
