//! XLSX writer kernel that renders DataFrames into styled worksheets.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use polars::prelude::{AnyValue, DataFrame, TimeUnit};
use rust_xlsxwriter::{ExcelDateTime, Format, FormatBorder, Workbook, Worksheet};

use crate::conf::{
    C_NUM_FORMAT_DATE, C_NUM_FORMAT_DATETIME, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
};
use crate::spec::{
    EnumCellValue, SpecCellFormat, SpecSheetSlice, SpecXlsxReport, SpecXlsxSheetWriteOptions,
    XlsxWriteError,
};
use crate::util::{calculate_column_width, plan_sheet_slices, sanitize_sheet_name};

/// Stateful workbook writer.
///
/// Sheets are buffered in memory; nothing touches the output path until
/// [`Self::close`], so a failed multi-sheet export leaves no partial file.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path.
    pub fn new(path_file_out: impl Into<PathBuf>) -> Self {
        Self {
            path_file_out: path_file_out.into(),
            workbook: Workbook::new(),
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Output file path.
    pub fn file_out(&self) -> &Path {
        &self.path_file_out
    }

    /// Per-sheet write reports, in write order.
    pub fn report(&self) -> &[SpecXlsxReport] {
        &self.l_reports
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<PathBuf, XlsxWriteError> {
        if !self.if_closed {
            self.workbook.save(&self.path_file_out)?;
            self.if_closed = true;
            tracing::debug!(path = %self.path_file_out.display(), "workbook saved");
        }
        Ok(self.path_file_out.clone())
    }

    /// Write one DataFrame as a header row plus body rows.
    ///
    /// Tables taller than the Excel row limit spill into suffixed sheets.
    pub fn write_sheet(
        &mut self,
        df: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), XlsxWriteError> {
        if self.if_closed {
            return Err(XlsxWriteError::Closed);
        }

        let l_colnames: Vec<String> = df
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        let n_col_offset = usize::from(options.if_include_row_index);
        if l_colnames.len() + n_col_offset > N_NCOLS_EXCEL_MAX {
            return Err(XlsxWriteError::InvalidInput(format!(
                "Too many columns for one sheet: {} (max {N_NCOLS_EXCEL_MAX}).",
                l_colnames.len() + n_col_offset
            )));
        }

        let mut report = SpecXlsxReport::default();
        let l_sheet_parts = plan_sheet_slices(
            df.height(),
            &sanitize_sheet_name(sheet_name, "_"),
            &mut report,
        );

        let fmt_header = derive_rust_xlsx_format(&options.fmt_header);
        let fmts_body = SpecBodyFormats::default();
        let if_autofit_columns = options.policy_autofit.if_enabled;
        let l_cols = df.get_columns();

        for sheet_slice in l_sheet_parts {
            let sheet_name_unique = self.derive_unique_sheet_name(&sheet_slice.sheet_name);
            let worksheet = self.workbook.add_worksheet();
            worksheet.set_name(&sheet_name_unique)?;

            if options.if_include_row_index {
                worksheet.write_blank(0, 0, &fmt_header)?;
            }
            for (n_idx_col, c_name) in l_colnames.iter().enumerate() {
                worksheet.write_string_with_format(
                    0,
                    cast_col_num(n_idx_col + n_col_offset)?,
                    c_name.as_str(),
                    &fmt_header,
                )?;
            }

            let l_len_header: Vec<usize> = l_colnames
                .iter()
                .map(|c_name| c_name.chars().count())
                .collect();
            let mut l_len_body = vec![0usize; l_colnames.len()];

            for n_row in sheet_slice.row_start_inclusive..sheet_slice.row_end_exclusive {
                let n_row_local = n_row - sheet_slice.row_start_inclusive;
                let n_row_sheet = cast_row_num(n_row_local + 1)?;
                if options.if_include_row_index {
                    worksheet.write_number_with_format(
                        n_row_sheet,
                        0,
                        n_row as f64,
                        &fmts_body.fmt_plain,
                    )?;
                }

                for (n_idx_col, col) in l_cols.iter().enumerate() {
                    let value = col.get(n_row)?;
                    if if_autofit_columns {
                        l_len_body[n_idx_col] = usize::max(
                            l_len_body[n_idx_col],
                            derive_display_text(&value).chars().count(),
                        );
                    }
                    write_cell_with_format(
                        worksheet,
                        n_row_sheet,
                        cast_col_num(n_idx_col + n_col_offset)?,
                        &derive_cell_value_from_any_value(value),
                        &fmts_body,
                    )?;
                }
            }

            for n_idx_col in 0..l_colnames.len() {
                if let Some(n_width) = calculate_column_width(
                    l_len_header[n_idx_col],
                    l_len_body[n_idx_col],
                    &options.policy_autofit,
                ) {
                    worksheet
                        .set_column_width(cast_col_num(n_idx_col + n_col_offset)?, n_width as f64)?;
                }
            }

            if options.if_freeze_header {
                worksheet.set_freeze_panes(1, 0)?;
            }

            tracing::debug!(
                sheet = %sheet_name_unique,
                rows = sheet_slice.row_end_exclusive - sheet_slice.row_start_inclusive,
                cols = l_colnames.len(),
                "sheet written"
            );
            report.sheets.push(SpecSheetSlice {
                sheet_name: sheet_name_unique,
                ..sheet_slice
            });
        }

        self.l_reports.push(report);
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

/// Write `df` as the only sheet of a new workbook at `path_file_out`.
pub fn write_dataframe_to_xlsx(
    df: &DataFrame,
    path_file_out: impl Into<PathBuf>,
    sheet_name: &str,
    options: &SpecXlsxSheetWriteOptions,
) -> Result<PathBuf, XlsxWriteError> {
    let mut writer = XlsxWriter::new(path_file_out);
    writer.write_sheet(df, sheet_name, options)?;
    writer.close()
}

/// Body cell formats; dates need a number format for Excel to show them as dates.
struct SpecBodyFormats {
    fmt_plain: Format,
    fmt_date: Format,
    fmt_datetime: Format,
}

impl Default for SpecBodyFormats {
    fn default() -> Self {
        Self {
            fmt_plain: Format::new(),
            fmt_date: Format::new().set_num_format(C_NUM_FORMAT_DATE),
            fmt_datetime: Format::new().set_num_format(C_NUM_FORMAT_DATETIME),
        }
    }
}

/// Text a cell shows once stringified; drives column width inference.
///
/// Floats keep a fractional part (`1.0`) and booleans read `True`/`False`.
/// Nulls count as empty.
fn derive_display_text(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Boolean(val) => if *val { "True" } else { "False" }.to_string(),
        AnyValue::String(val) => val.to_string(),
        AnyValue::StringOwned(val) => val.to_string(),
        AnyValue::Float32(val) => derive_float_text(f64::from(*val)),
        AnyValue::Float64(val) => derive_float_text(*val),
        _ => value.to_string(),
    }
}

fn derive_float_text(val: f64) -> String {
    if val.is_nan() {
        "nan".to_string()
    } else {
        format!("{val:?}")
    }
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => EnumCellValue::Bool(val),
        AnyValue::UInt8(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt16(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int8(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int16(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => derive_finite_number(val as f64),
        AnyValue::Float64(val) => derive_finite_number(val),
        AnyValue::Date(n_days) => NaiveDate::default()
            .checked_add_signed(TimeDelta::days(i64::from(n_days)))
            .map_or_else(|| EnumCellValue::String(value.to_string()), EnumCellValue::Date),
        AnyValue::Datetime(n_ticks, unit, _) => derive_naive_datetime(n_ticks, unit)
            .map_or_else(
                || EnumCellValue::String(value.to_string()),
                EnumCellValue::DateTime,
            ),
        _ => EnumCellValue::String(value.to_string()),
    }
}

/// Epoch ticks to a UTC wall-clock timestamp.
fn derive_naive_datetime(n_ticks: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let dt = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(n_ticks)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(n_ticks),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(n_ticks),
    };
    dt.map(|dt| dt.naive_utc())
}

fn derive_finite_number(val: f64) -> EnumCellValue {
    if val.is_finite() {
        EnumCellValue::Number(val)
    } else {
        EnumCellValue::None
    }
}

/// Excel serial for `dt`; `None` outside Excel's 1900..=9999 calendar.
fn derive_excel_datetime(dt: &NaiveDateTime) -> Option<ExcelDateTime> {
    let n_year = u16::try_from(dt.year()).ok()?;
    let n_seconds = f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9;
    ExcelDateTime::from_ymd(n_year, dt.month() as u8, dt.day() as u8)
        .and_then(|date| date.and_hms(dt.hour() as u16, dt.minute() as u8, n_seconds))
        .ok()
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_num: u32,
    col_num: u16,
    value: &EnumCellValue,
    fmts_body: &SpecBodyFormats,
) -> Result<(), XlsxWriteError> {
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(row_num, col_num, &fmts_body.fmt_plain)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(
                row_num,
                col_num,
                val.as_str(),
                &fmts_body.fmt_plain,
            )?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(row_num, col_num, *val, &fmts_body.fmt_plain)?;
        }
        EnumCellValue::Bool(val) => {
            worksheet.write_boolean_with_format(
                row_num,
                col_num,
                *val,
                &fmts_body.fmt_plain,
            )?;
        }
        EnumCellValue::Date(val) => {
            write_datetime_or_text(
                worksheet,
                row_num,
                col_num,
                &val.and_time(Default::default()),
                &val.to_string(),
                &fmts_body.fmt_date,
            )?;
        }
        EnumCellValue::DateTime(val) => {
            write_datetime_or_text(
                worksheet,
                row_num,
                col_num,
                val,
                &val.to_string(),
                &fmts_body.fmt_datetime,
            )?;
        }
    }
    Ok(())
}

fn write_datetime_or_text(
    worksheet: &mut Worksheet,
    row_num: u32,
    col_num: u16,
    dt: &NaiveDateTime,
    c_fallback: &str,
    format: &Format,
) -> Result<(), XlsxWriteError> {
    match derive_excel_datetime(dt) {
        Some(dt_excel) => {
            worksheet.write_datetime_with_format(row_num, col_num, &dt_excel, format)?;
        }
        None => {
            worksheet.write_string(row_num, col_num, c_fallback)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();
    if spec.bold {
        format = format.set_bold();
    }
    if let Some(c_color) = &spec.bg_color {
        format = format.set_background_color(c_color.as_str());
    }
    if let Some(c_color) = &spec.font_color {
        format = format.set_font_color(c_color.as_str());
    }
    if spec.if_border {
        format = format.set_border(FormatBorder::Thin);
    }
    format
}

fn cast_row_num(value: usize) -> Result<u32, XlsxWriteError> {
    u32::try_from(value)
        .map_err(|_| XlsxWriteError::InvalidInput(format!("row index overflow: {value}")))
}

fn cast_col_num(value: usize) -> Result<u16, XlsxWriteError> {
    u16::try_from(value)
        .map_err(|_| XlsxWriteError::InvalidInput(format!("column index overflow: {value}")))
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    use calamine::{Data, Reader, Xlsx, open_workbook};
    use chrono::NaiveDate;
    use polars::prelude::{AnyValue, Column, DataFrame, DataType, TimeUnit};

    use super::{XlsxWriter, derive_display_text, write_dataframe_to_xlsx};
    use crate::conf::derive_plain_header_format;
    use crate::spec::{SpecAutofitCellsPolicy, SpecXlsxSheetWriteOptions, XlsxWriteError};

    fn df_patients() -> DataFrame {
        DataFrame::new(vec![
            Column::new("id".into(), [1i64, 2]),
            Column::new("name".into(), ["ana", "bruno"]),
        ])
        .expect("dataframe")
    }

    fn read_rows(path: &Path, sheet_name: &str) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(path).expect("open xlsx");
        let range = workbook.worksheet_range(sheet_name).expect("sheet range");
        range.rows().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn write_dataframe_round_trips_header_and_rows() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("pacientes.xlsx");

        let path_written = write_dataframe_to_xlsx(
            &df_patients(),
            &path_out,
            "Dados",
            &SpecXlsxSheetWriteOptions::default(),
        )
        .expect("write xlsx");
        assert_eq!(path_written, path_out);

        let l_rows = read_rows(&path_out, "Dados");
        assert_eq!(
            l_rows,
            vec![
                vec![Data::String("id".into()), Data::String("name".into())],
                vec![Data::Float(1.0), Data::String("ana".into())],
                vec![Data::Float(2.0), Data::String("bruno".into())],
            ]
        );
    }

    #[test]
    fn write_dataframe_with_row_index_shifts_columns() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("indexed.xlsx");

        let options = SpecXlsxSheetWriteOptions {
            if_include_row_index: true,
            ..SpecXlsxSheetWriteOptions::default()
        };
        write_dataframe_to_xlsx(&df_patients(), &path_out, "Dados", &options).expect("write");

        let l_rows = read_rows(&path_out, "Dados");
        assert_eq!(l_rows[0][1], Data::String("id".into()));
        assert_eq!(l_rows[0][2], Data::String("name".into()));
        assert_eq!(l_rows[1][0], Data::Float(0.0));
        assert_eq!(l_rows[2][0], Data::Float(1.0));
        assert_eq!(l_rows[2][2], Data::String("bruno".into()));
    }

    #[test]
    fn write_dataframe_keeps_nulls_blank() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("nulls.xlsx");

        let df = DataFrame::new(vec![
            Column::new("id".into(), [1i64, 2]),
            Column::new("modality".into(), [Some("CT"), None]),
        ])
        .expect("dataframe");
        write_dataframe_to_xlsx(&df, &path_out, "Dados", &SpecXlsxSheetWriteOptions::default())
            .expect("write");

        let l_rows = read_rows(&path_out, "Dados");
        assert_eq!(l_rows[1][1], Data::String("CT".into()));
        assert_eq!(l_rows[2][1], Data::Empty);
    }

    #[test]
    fn write_dataframe_fails_when_directory_missing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("missing/out.xlsx");

        let err = write_dataframe_to_xlsx(
            &df_patients(),
            &path_out,
            "Dados",
            &SpecXlsxSheetWriteOptions::default(),
        )
        .expect_err("missing directory");
        assert!(matches!(err, XlsxWriteError::Xlsx(_)));
        assert!(!path_out.exists());
    }

    #[test]
    fn writer_keeps_sheet_order_and_dedups_names() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("multi.xlsx");

        let options = SpecXlsxSheetWriteOptions {
            if_freeze_header: false,
            policy_autofit: SpecAutofitCellsPolicy::disabled(),
            fmt_header: derive_plain_header_format(),
            ..SpecXlsxSheetWriteOptions::default()
        };

        let mut writer = XlsxWriter::new(&path_out);
        writer.write_sheet(&df_patients(), "Pacientes", &options).expect("sheet 1");
        writer.write_sheet(&df_patients(), "Estudos/CT", &options).expect("sheet 2");
        writer.write_sheet(&df_patients(), "Pacientes", &options).expect("sheet 3");
        assert!(!path_out.exists());
        writer.close().expect("close");
        writer.close().expect("close is idempotent");

        let workbook: Xlsx<_> = open_workbook(&path_out).expect("open xlsx");
        assert_eq!(
            workbook.sheet_names(),
            vec![
                "Pacientes".to_string(),
                "Estudos_CT".to_string(),
                "Pacientes__2".to_string()
            ]
        );
        assert_eq!(writer.report().len(), 3);
        assert!(matches!(
            writer.write_sheet(&df_patients(), "late", &options),
            Err(XlsxWriteError::Closed)
        ));
    }

    #[test]
    fn write_empty_dataframe_writes_header_only() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("empty.xlsx");

        let df = DataFrame::new(vec![Column::new("id".into(), Vec::<i64>::new())])
            .expect("dataframe");
        write_dataframe_to_xlsx(&df, &path_out, "Dados", &SpecXlsxSheetWriteOptions::default())
            .expect("write");

        let l_rows = read_rows(&path_out, "Dados");
        assert_eq!(l_rows, vec![vec![Data::String("id".into())]]);
    }

    fn read_zip_entry(path: &Path, c_entry: &str) -> String {
        let mut archive = zip::ZipArchive::new(File::open(path).expect("open")).expect("zip");
        let mut entry = archive.by_name(c_entry).expect("entry");
        let mut c_xml = String::new();
        entry.read_to_string(&mut c_xml).expect("read entry");
        c_xml
    }

    #[test]
    fn dates_and_booleans_are_written_as_native_cells() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("tipos.xlsx");

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("date");
        let n_days = date
            .signed_duration_since(NaiveDate::default())
            .num_days() as i32;
        let n_micros = date
            .and_hms_opt(8, 15, 0)
            .expect("time")
            .and_utc()
            .timestamp_micros();
        let col_date = Column::new("study_date".into(), [n_days])
            .cast(&DataType::Date)
            .expect("date column");
        let col_ts = Column::new("created_at".into(), [n_micros])
            .cast(&DataType::Datetime(TimeUnit::Microseconds, None))
            .expect("datetime column");
        let df = DataFrame::new(vec![
            col_date,
            col_ts,
            Column::new("urgent".into(), [true]),
        ])
        .expect("dataframe");

        write_dataframe_to_xlsx(&df, &path_out, "Dados", &SpecXlsxSheetWriteOptions::default())
            .expect("write");

        let l_rows = read_rows(&path_out, "Dados");
        match &l_rows[1][0] {
            Data::DateTime(dt) => assert_eq!(dt.as_f64(), 45366.0),
            other => panic!("expected date cell, got {other:?}"),
        }
        match &l_rows[1][1] {
            Data::DateTime(dt) => assert_eq!(dt.as_f64(), 45366.34375),
            other => panic!("expected datetime cell, got {other:?}"),
        }
        assert_eq!(l_rows[1][2], Data::Bool(true));
    }

    #[test]
    fn header_style_widths_and_freeze_reach_the_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("estilo.xlsx");

        let df = DataFrame::new(vec![
            Column::new("id".into(), [1i64]),
            Column::new("laudo".into(), ["x".repeat(80)]),
        ])
        .expect("dataframe");
        write_dataframe_to_xlsx(&df, &path_out, "Dados", &SpecXlsxSheetWriteOptions::default())
            .expect("write");

        let c_sheet = read_zip_entry(&path_out, "xl/worksheets/sheet1.xml");
        assert!(c_sheet.contains(r#"ySplit="1""#), "{c_sheet}");
        assert!(c_sheet.contains(r#"state="frozen""#), "{c_sheet}");
        // "id": max(2, 1) + 2 = 4; "laudo": 80 + 2 capped at 50.
        assert!(c_sheet.contains(r#"width="4.7109375""#), "{c_sheet}");
        assert!(c_sheet.contains(r#"width="50.7109375""#), "{c_sheet}");

        let c_styles = read_zip_entry(&path_out, "xl/styles.xml");
        assert!(c_styles.contains("<b/>"), "{c_styles}");
        assert!(c_styles.contains(r#"rgb="FF4472C4""#), "{c_styles}");
        assert!(c_styles.contains(r#"rgb="FFFFFFFF""#), "{c_styles}");
        assert!(c_styles.contains(r#"style="thin""#), "{c_styles}");
    }

    #[test]
    fn disabled_autofit_and_freeze_leave_sheet_defaults() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_out = tmp.path().join("simples.xlsx");

        let options = SpecXlsxSheetWriteOptions {
            if_freeze_header: false,
            policy_autofit: SpecAutofitCellsPolicy::disabled(),
            fmt_header: derive_plain_header_format(),
            ..SpecXlsxSheetWriteOptions::default()
        };
        write_dataframe_to_xlsx(&df_patients(), &path_out, "Dados", &options).expect("write");

        let c_sheet = read_zip_entry(&path_out, "xl/worksheets/sheet1.xml");
        assert!(!c_sheet.contains("frozen"));
        assert!(!c_sheet.contains("<cols>"));
        let c_styles = read_zip_entry(&path_out, "xl/styles.xml");
        assert!(!c_styles.contains(r#"style="thin""#));
    }

    #[test]
    fn display_text_follows_python_style_stringification() {
        assert_eq!(derive_display_text(&AnyValue::Float64(1.0)), "1.0");
        assert_eq!(derive_display_text(&AnyValue::Float64(2.25)), "2.25");
        assert_eq!(derive_display_text(&AnyValue::Float64(f64::NAN)), "nan");
        assert_eq!(derive_display_text(&AnyValue::Float32(0.5)), "0.5");
        assert_eq!(derive_display_text(&AnyValue::Boolean(false)), "False");
        assert_eq!(derive_display_text(&AnyValue::Null), "");
        assert_eq!(derive_display_text(&AnyValue::Int64(42)), "42");
    }
}
