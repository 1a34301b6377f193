//! Calendar helpers.

use chrono::{Datelike, NaiveDate};

use crate::conf::TUP_WEEKDAY_NAMES_PT;
use crate::spec::UtilError;

/// Map `0..=6` (Monday first) to its weekday name.
pub fn weekday_name(dia: usize) -> Result<&'static str, UtilError> {
    TUP_WEEKDAY_NAMES_PT
        .get(dia)
        .copied()
        .ok_or(UtilError::WeekdayOutOfRange(dia))
}

/// First and last calendar day of `ano`-`mes`.
pub fn month_date_range(ano: i32, mes: u32) -> Result<(NaiveDate, NaiveDate), UtilError> {
    let err_invalid = || UtilError::InvalidMonth {
        year: ano,
        month: mes,
    };

    let date_first = NaiveDate::from_ymd_opt(ano, mes, 1).ok_or_else(err_invalid)?;
    let date_first_next = if mes == 12 {
        NaiveDate::from_ymd_opt(ano + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(ano, mes + 1, 1)
    }
    .ok_or_else(err_invalid)?;
    let date_last = date_first_next.pred_opt().ok_or_else(err_invalid)?;

    debug_assert_eq!(date_last.month(), mes);
    Ok((date_first, date_last))
}
