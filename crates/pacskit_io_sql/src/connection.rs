//! Query seam between the exporter and a concrete database client.

use std::error::Error as StdError;

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use postgres::types::{FromSql, IsNull, ToSql, Type};
use postgres::{Client, Row};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::spec::{ExportError, SpecQueryResult, SqlParam, SqlValue};

/// A live connection able to run one parameterized statement.
///
/// Implemented for `postgres::Client`; the pool hands these out per call.
pub trait QueryConnection {
    fn run_query(
        &mut self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<SpecQueryResult, ExportError>;
}

impl QueryConnection for Client {
    fn run_query(
        &mut self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<SpecQueryResult, ExportError> {
        let statement = self.prepare(query).map_err(ExportError::query)?;
        let l_params: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect();
        let l_rows = self
            .query(&statement, &l_params)
            .map_err(ExportError::query)?;

        let columns = if statement.columns().is_empty() {
            None
        } else {
            Some(
                statement
                    .columns()
                    .iter()
                    .map(|column| column.name().to_string())
                    .collect(),
            )
        };
        let rows = l_rows
            .iter()
            .map(derive_sql_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SpecQueryResult { columns, rows })
    }
}

fn derive_sql_row(row: &Row) -> Result<Vec<SqlValue>, ExportError> {
    (0..row.len())
        .map(|n_idx| derive_sql_value(row, n_idx))
        .collect()
}

fn derive_sql_value(row: &Row, n_idx: usize) -> Result<SqlValue, ExportError> {
    let column = &row.columns()[n_idx];
    if derive_column_kind(column.type_()).is_none() {
        return Err(ExportError::UnsupportedColumnType {
            column: column.name().to_string(),
            type_name: column.type_().name().to_string(),
        });
    }
    row.try_get::<_, PgCell>(n_idx)
        .map(|cell| cell.0)
        .map_err(ExportError::query)
}

////////////////////////////////////////////////////////////////////////////////
// #region CellDecoding

/// Decoding route for one Postgres column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumColumnKind {
    Bool,
    Int2,
    Int4,
    Int8,
    Oid,
    Float4,
    Float8,
    Numeric,
    Uuid,
    Json,
    Text,
    Time,
    Date,
    Timestamp,
    TimestampTz,
}

/// `None` for types with no client-side decoding (interval, bytea, arrays).
fn derive_column_kind(ty: &Type) -> Option<EnumColumnKind> {
    let kind = if *ty == Type::BOOL {
        EnumColumnKind::Bool
    } else if *ty == Type::INT2 {
        EnumColumnKind::Int2
    } else if *ty == Type::INT4 {
        EnumColumnKind::Int4
    } else if *ty == Type::INT8 {
        EnumColumnKind::Int8
    } else if *ty == Type::OID {
        EnumColumnKind::Oid
    } else if *ty == Type::FLOAT4 {
        EnumColumnKind::Float4
    } else if *ty == Type::FLOAT8 {
        EnumColumnKind::Float8
    } else if *ty == Type::NUMERIC {
        EnumColumnKind::Numeric
    } else if *ty == Type::UUID {
        EnumColumnKind::Uuid
    } else if *ty == Type::JSON || *ty == Type::JSONB {
        EnumColumnKind::Json
    } else if *ty == Type::TIME {
        EnumColumnKind::Time
    } else if *ty == Type::DATE {
        EnumColumnKind::Date
    } else if *ty == Type::TIMESTAMP {
        EnumColumnKind::Timestamp
    } else if *ty == Type::TIMESTAMPTZ {
        EnumColumnKind::TimestampTz
    } else if <String as FromSql>::accepts(ty) {
        EnumColumnKind::Text
    } else {
        return None;
    };
    Some(kind)
}

/// One decoded result cell; SQL NULL maps to [`SqlValue::Null`].
struct PgCell(SqlValue);

impl<'a> FromSql<'a> for PgCell {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn StdError + Sync + Send>> {
        let kind = derive_column_kind(ty)
            .ok_or_else(|| format!("no decoder for column type {ty}"))?;

        let value = match kind {
            EnumColumnKind::Bool => SqlValue::Bool(<bool as FromSql>::from_sql(ty, raw)?),
            EnumColumnKind::Int2 => {
                SqlValue::Int(i64::from(<i16 as FromSql>::from_sql(ty, raw)?))
            }
            EnumColumnKind::Int4 => {
                SqlValue::Int(i64::from(<i32 as FromSql>::from_sql(ty, raw)?))
            }
            EnumColumnKind::Int8 => SqlValue::Int(<i64 as FromSql>::from_sql(ty, raw)?),
            EnumColumnKind::Oid => {
                SqlValue::Int(i64::from(<u32 as FromSql>::from_sql(ty, raw)?))
            }
            EnumColumnKind::Float4 => {
                SqlValue::Float(f64::from(<f32 as FromSql>::from_sql(ty, raw)?))
            }
            EnumColumnKind::Float8 => SqlValue::Float(<f64 as FromSql>::from_sql(ty, raw)?),
            EnumColumnKind::Numeric => {
                derive_numeric_value(<Decimal as FromSql>::from_sql(ty, raw)?)
            }
            EnumColumnKind::Uuid => {
                SqlValue::Text(<Uuid as FromSql>::from_sql(ty, raw)?.to_string())
            }
            EnumColumnKind::Json => {
                SqlValue::Text(<JsonValue as FromSql>::from_sql(ty, raw)?.to_string())
            }
            EnumColumnKind::Text => SqlValue::Text(<String as FromSql>::from_sql(ty, raw)?),
            EnumColumnKind::Time => {
                SqlValue::Text(<NaiveTime as FromSql>::from_sql(ty, raw)?.to_string())
            }
            EnumColumnKind::Date => SqlValue::Date(<NaiveDate as FromSql>::from_sql(ty, raw)?),
            EnumColumnKind::Timestamp => {
                SqlValue::Timestamp(<NaiveDateTime as FromSql>::from_sql(ty, raw)?)
            }
            EnumColumnKind::TimestampTz => SqlValue::Timestamp(
                <DateTime<Utc> as FromSql>::from_sql(ty, raw)?.naive_utc(),
            ),
        };
        Ok(PgCell(value))
    }

    fn from_sql_null(_ty: &Type) -> Result<Self, Box<dyn StdError + Sync + Send>> {
        Ok(PgCell(SqlValue::Null))
    }

    fn accepts(ty: &Type) -> bool {
        derive_column_kind(ty).is_some()
    }
}

/// Numerics become floats; anything `f64` cannot hold keeps its exact text.
fn derive_numeric_value(value: Decimal) -> SqlValue {
    match value.to_f64() {
        Some(n_val) => SqlValue::Float(n_val),
        None => SqlValue::Text(value.to_string()),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ParameterBinding

impl ToSql for SqlParam {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        match self {
            SqlParam::Null => Ok(IsNull::Yes),
            SqlParam::Bool(val) => val.to_sql(ty, out),
            SqlParam::Int(val) => {
                if *ty == Type::INT2 {
                    i16::try_from(*val)?.to_sql(ty, out)
                } else if *ty == Type::INT4 {
                    i32::try_from(*val)?.to_sql(ty, out)
                } else {
                    val.to_sql(ty, out)
                }
            }
            SqlParam::Float(val) => {
                if *ty == Type::FLOAT4 {
                    (*val as f32).to_sql(ty, out)
                } else {
                    val.to_sql(ty, out)
                }
            }
            SqlParam::Text(val) => val.as_str().to_sql(ty, out),
            SqlParam::Date(val) => val.to_sql(ty, out),
            SqlParam::Timestamp(val) => val.to_sql(ty, out),
        }
    }

    // Per-value check happens in `to_sql_checked`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn to_sql_checked(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        if !derive_param_accepts(self, ty) {
            return Err(format!("cannot bind {self:?} to a parameter of type {ty}").into());
        }
        self.to_sql(ty, out)
    }
}

fn derive_param_accepts(param: &SqlParam, ty: &Type) -> bool {
    match param {
        SqlParam::Null => true,
        SqlParam::Bool(_) => <bool as ToSql>::accepts(ty),
        SqlParam::Int(_) => *ty == Type::INT2 || *ty == Type::INT4 || *ty == Type::INT8,
        SqlParam::Float(_) => *ty == Type::FLOAT4 || *ty == Type::FLOAT8,
        SqlParam::Text(_) => <&str as ToSql>::accepts(ty),
        SqlParam::Date(_) => <NaiveDate as ToSql>::accepts(ty),
        SqlParam::Timestamp(_) => <NaiveDateTime as ToSql>::accepts(ty),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use postgres::types::{FromSql, IsNull, ToSql, Type};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::{PgCell, derive_column_kind, derive_param_accepts};
    use crate::spec::{SqlParam, SqlValue};

    /// Encode `value` as the driver would send it, then decode it as a cell.
    fn decode_as_cell<T: ToSql>(value: T, ty: &Type) -> SqlValue {
        let mut buf = BytesMut::new();
        value.to_sql(ty, &mut buf).expect("encode");
        PgCell::from_sql(ty, &buf).expect("decode").0
    }

    #[test]
    fn numeric_cells_decode_as_floats() {
        assert_eq!(
            decode_as_cell(Decimal::new(1250, 2), &Type::NUMERIC),
            SqlValue::Float(12.5)
        );
        assert_eq!(
            decode_as_cell(Decimal::new(-3, 0), &Type::NUMERIC),
            SqlValue::Float(-3.0)
        );
    }

    #[test]
    fn uuid_json_and_time_cells_decode_as_text() {
        let uuid = Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        assert_eq!(
            decode_as_cell(uuid, &Type::UUID),
            SqlValue::Text("67e55044-10b1-426f-9247-bb680e5fe0c8".into())
        );

        let json = serde_json::json!({"modality": "CT"});
        assert_eq!(
            decode_as_cell(json.clone(), &Type::JSONB),
            SqlValue::Text(r#"{"modality":"CT"}"#.into())
        );
        assert_eq!(
            decode_as_cell(json, &Type::JSON),
            SqlValue::Text(r#"{"modality":"CT"}"#.into())
        );

        let time = NaiveTime::from_hms_opt(10, 30, 0).expect("time");
        assert_eq!(
            decode_as_cell(time, &Type::TIME),
            SqlValue::Text("10:30:00".into())
        );
    }

    #[test]
    fn scalar_cells_keep_their_type() {
        assert_eq!(decode_as_cell(true, &Type::BOOL), SqlValue::Bool(true));
        assert_eq!(decode_as_cell(7i16, &Type::INT2), SqlValue::Int(7));
        assert_eq!(decode_as_cell(7i32, &Type::INT4), SqlValue::Int(7));
        assert_eq!(decode_as_cell(7i64, &Type::INT8), SqlValue::Int(7));
        assert_eq!(decode_as_cell(7u32, &Type::OID), SqlValue::Int(7));
        assert_eq!(decode_as_cell(1.5f32, &Type::FLOAT4), SqlValue::Float(1.5));
        assert_eq!(decode_as_cell(1.5f64, &Type::FLOAT8), SqlValue::Float(1.5));
        assert_eq!(
            decode_as_cell("ana", &Type::VARCHAR),
            SqlValue::Text("ana".into())
        );
    }

    #[test]
    fn date_and_timestamp_cells_decode() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("date");
        assert_eq!(decode_as_cell(date, &Type::DATE), SqlValue::Date(date));

        let dt = date.and_hms_opt(8, 15, 0).expect("time");
        assert_eq!(
            decode_as_cell(dt, &Type::TIMESTAMP),
            SqlValue::Timestamp(dt)
        );
        assert_eq!(
            decode_as_cell(Utc.from_utc_datetime(&dt), &Type::TIMESTAMPTZ),
            SqlValue::Timestamp(dt)
        );
    }

    #[test]
    fn null_cells_decode_for_any_supported_type() {
        let cell = PgCell::from_sql_null(&Type::NUMERIC).expect("null");
        assert_eq!(cell.0, SqlValue::Null);
    }

    #[test]
    fn opaque_types_have_no_decoder() {
        for ty in [Type::INTERVAL, Type::BYTEA, Type::INT4_ARRAY] {
            assert!(derive_column_kind(&ty).is_none(), "{ty}");
            assert!(!<PgCell as FromSql>::accepts(&ty));
        }
        assert!(derive_column_kind(&Type::TEXT).is_some());
        assert!(derive_column_kind(&Type::NUMERIC).is_some());
    }

    #[test]
    fn int_param_narrows_to_column_width() {
        let mut buf = BytesMut::new();
        SqlParam::Int(7)
            .to_sql_checked(&Type::INT4, &mut buf)
            .expect("bind int4");
        assert_eq!(buf.as_ref(), &7i32.to_be_bytes());

        let mut buf_small = BytesMut::new();
        SqlParam::Int(7)
            .to_sql_checked(&Type::INT2, &mut buf_small)
            .expect("bind int2");
        assert_eq!(buf_small.len(), 2);
    }

    #[test]
    fn int_param_overflowing_int2_is_rejected() {
        let mut buf = BytesMut::new();
        assert!(SqlParam::Int(70_000).to_sql(&Type::INT2, &mut buf).is_err());
    }

    #[test]
    fn null_param_binds_to_any_type() {
        let mut buf = BytesMut::new();
        let is_null = SqlParam::Null
            .to_sql_checked(&Type::DATE, &mut buf)
            .expect("bind null");
        assert!(matches!(is_null, IsNull::Yes));
    }

    #[test]
    fn mismatched_param_type_is_rejected() {
        let mut buf = BytesMut::new();
        assert!(
            SqlParam::Text("x".into())
                .to_sql_checked(&Type::INT4, &mut buf)
                .is_err()
        );
        assert!(!derive_param_accepts(
            &SqlParam::Date(NaiveDate::from_ymd_opt(2024, 1, 5).expect("date")),
            &Type::TEXT
        ));
        assert!(derive_param_accepts(&SqlParam::Text("x".into()), &Type::VARCHAR));
    }
}
