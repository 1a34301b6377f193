//! Query result to DataFrame conversion.

use chrono::NaiveDate;
use indexmap::IndexMap;
use polars::prelude::{AnyValue, Column, DataFrame, Series, TimeUnit};

use crate::spec::{EnumRowMode, ExportError, SpecQueryResult, SqlValue};

/// Build a table from raw rows, one column per result column in select order.
///
/// A statement that describes no result columns (`UPDATE` without
/// `RETURNING`) fails with `NoResultColumns` in either mode. For an empty
/// but described result, `Mapping` mode yields a zero-column table while
/// `Tuple` mode keeps the described header.
pub fn derive_dataframe_from_result(
    result: SpecQueryResult,
    row_mode: EnumRowMode,
) -> Result<DataFrame, ExportError> {
    let SpecQueryResult { columns, rows } = result;
    let l_columns = columns.ok_or(ExportError::NoResultColumns)?;
    check_row_widths(&l_columns, &rows)?;

    match row_mode {
        EnumRowMode::Tuple => build_dataframe(&l_columns, &rows),
        EnumRowMode::Mapping => {
            if rows.is_empty() {
                return Ok(DataFrame::empty());
            }
            let (l_keys, l_rows) = collapse_duplicate_keys(&l_columns, rows);
            build_dataframe(&l_keys, &l_rows)
        }
    }
}

fn check_row_widths(columns: &[String], rows: &[Vec<SqlValue>]) -> Result<(), ExportError> {
    match rows
        .iter()
        .position(|row| row.len() != columns.len())
    {
        Some(n_row) => Err(ExportError::RowWidthMismatch {
            row: n_row,
            expected: columns.len(),
            found: rows[n_row].len(),
        }),
        None => Ok(()),
    }
}

/// Keyed rows keep the first position of a name and its last value.
fn collapse_duplicate_keys(
    columns: &[String],
    rows: Vec<Vec<SqlValue>>,
) -> (Vec<String>, Vec<Vec<SqlValue>>) {
    let mut dict_key_idx: IndexMap<&str, usize> = IndexMap::with_capacity(columns.len());
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_key_idx.insert(c_name.as_str(), n_idx);
    }
    if dict_key_idx.len() == columns.len() {
        return (columns.to_vec(), rows);
    }

    let l_keys = dict_key_idx.keys().map(|c_key| c_key.to_string()).collect();
    let l_rows = rows
        .into_iter()
        .map(|row| {
            dict_key_idx
                .values()
                .map(|&n_idx| row[n_idx].clone())
                .collect()
        })
        .collect();
    (l_keys, l_rows)
}

fn build_dataframe(columns: &[String], rows: &[Vec<SqlValue>]) -> Result<DataFrame, ExportError> {
    let mut l_cols: Vec<Column> = Vec::with_capacity(columns.len());
    for (n_idx_col, c_name) in columns.iter().enumerate() {
        let l_values: Vec<AnyValue<'static>> = rows
            .iter()
            .map(|row| derive_any_value(&row[n_idx_col]))
            .collect();
        let series = Series::from_any_values(c_name.as_str().into(), &l_values, false)?;
        l_cols.push(Column::from(series));
    }
    Ok(DataFrame::new(l_cols)?)
}

fn derive_any_value(value: &SqlValue) -> AnyValue<'static> {
    match value {
        SqlValue::Null => AnyValue::Null,
        SqlValue::Bool(val) => AnyValue::Boolean(*val),
        SqlValue::Int(val) => AnyValue::Int64(*val),
        SqlValue::Float(val) => AnyValue::Float64(*val),
        SqlValue::Text(val) => AnyValue::StringOwned(val.as_str().into()),
        SqlValue::Date(val) => AnyValue::Date(derive_days_since_epoch(*val)),
        SqlValue::Timestamp(val) => AnyValue::Datetime(
            val.and_utc().timestamp_micros(),
            TimeUnit::Microseconds,
            None,
        ),
    }
}

fn derive_days_since_epoch(date: NaiveDate) -> i32 {
    let n_days = date.signed_duration_since(NaiveDate::default()).num_days();
    n_days as i32
}
