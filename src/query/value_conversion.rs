//! Value conversion from `sea_query::Values` to driver parameters.
//!
//! Statements carry their parameter bag as `sea_query::Value`s; the driver
//! wants `&[&dyn ToSql]`. Conversion holds each value in a typed holder so
//! NULLs keep their column type, then hands borrowed trait objects to the
//! closure for the duration of the call.
//!
//! A value kind with no driver mapping is rejected up front with an error
//! naming the offending value; statements are never sent partially bound.

use crate::executor::DockError;
use may_postgres::types::ToSql;
use sea_query::{Value, Values};

/// Owned, driver-compatible form of one bound value.
enum Param {
    Bool(Option<bool>),
    SmallInt(Option<i16>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Float(Option<f32>),
    Double(Option<f64>),
    Text(Option<String>),
    Bytes(Option<Vec<u8>>),
    Json(Option<serde_json::Value>),
}

impl Param {
    fn from_value(value: &Value) -> Result<Self, DockError> {
        Ok(match value {
            Value::Bool(v) => Param::Bool(*v),
            Value::TinyInt(v) => Param::SmallInt(v.map(i16::from)),
            Value::SmallInt(v) => Param::SmallInt(*v),
            Value::Int(v) => Param::Int(*v),
            Value::BigInt(v) => Param::BigInt(*v),
            Value::TinyUnsigned(v) => Param::SmallInt(v.map(i16::from)),
            Value::SmallUnsigned(v) => Param::Int(v.map(i32::from)),
            Value::Unsigned(v) => Param::BigInt(v.map(i64::from)),
            Value::BigUnsigned(Some(u)) if *u > i64::MAX as u64 => {
                return Err(DockError::Unsupported(format!(
                    "bind value {u} exceeds i64::MAX and cannot be sent as BIGINT"
                )));
            }
            Value::BigUnsigned(v) => Param::BigInt(v.map(|u| u as i64)),
            Value::Float(v) => Param::Float(*v),
            Value::Double(v) => Param::Double(*v),
            Value::String(v) => Param::Text(v.clone()),
            Value::Bytes(v) => Param::Bytes(v.clone()),
            Value::Json(v) => Param::Json(v.as_deref().cloned()),
            other => {
                return Err(DockError::Unsupported(format!(
                    "bind value has no driver mapping: {other:?}"
                )));
            }
        })
    }

    fn as_sql(&self) -> &dyn ToSql {
        match self {
            Param::Bool(v) => v,
            Param::SmallInt(v) => v,
            Param::Int(v) => v,
            Param::BigInt(v) => v,
            Param::Float(v) => v,
            Param::Double(v) => v,
            Param::Text(v) => v,
            Param::Bytes(v) => v,
            Param::Json(v) => v,
        }
    }
}

/// Convert a statement's values and run `f` with the borrowed parameters.
///
/// # Errors
///
/// Returns `DockError::Unsupported` when a value has no driver mapping;
/// `f`'s error otherwise.
pub(crate) fn with_converted_params<F, R>(values: &Values, f: F) -> Result<R, DockError>
where
    F: FnOnce(&[&dyn ToSql]) -> Result<R, DockError>,
{
    let holders = values
        .iter()
        .map(Param::from_value)
        .collect::<Result<Vec<_>, _>>()?;
    let params: Vec<&dyn ToSql> = holders.iter().map(Param::as_sql).collect();
    f(&params)
}
