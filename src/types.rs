//! Bind parameter type for built statements
//!
//! Parameters travel alongside the statement text in the order their owning
//! mutator calls were made.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TIMESTAMP_FORMAT, DebugConfig};
use crate::error::Result;

/// A positional bind parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Param {
    /// SQL NULL of no particular type
    Null,

    /// SQL NULL that remembers the type it stands in for
    ///
    /// Produced by converting `None::<T>`, so the execution layer can bind a
    /// null of the matching column type.
    #[serde(rename = "typed_null")]
    TypedNull(ParamKind),

    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    Float(f64),

    /// Text value, rendered single-quoted by the debug renderer
    Text(String),

    /// Point in time, always UTC
    Timestamp(DateTime<Utc>),

    /// Calendar date without time of day
    Date(NaiveDate),

    /// Exact numeric value
    Decimal(Decimal),

    Uuid(uuid::Uuid),

    /// Arbitrary JSON document
    Json(serde_json::Value),
}

/// The value type of a [`Param`], used to keep the type of a null
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Bool,
    Int,
    Float,
    Text,
    Timestamp,
    Date,
    Decimal,
    Uuid,
    Json,
}

/// Rust types with a fixed [`ParamKind`]
///
/// Lets `None::<T>` convert into [`Param::TypedNull`] of the right kind.
pub trait ParamType: Into<Param> {
    const KIND: ParamKind;
}

impl Param {
    /// Serialize any value into a JSON parameter
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Param::Json(serde_json::to_value(value)?))
    }

    /// Whether this parameter is SQL NULL, typed or not
    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null | Param::TypedNull(_))
    }

    /// The kind of value held, or `None` for an untyped null
    pub fn kind(&self) -> Option<ParamKind> {
        match self {
            Param::Null => None,
            Param::TypedNull(kind) => Some(*kind),
            Param::Bool(_) => Some(ParamKind::Bool),
            Param::Int(_) => Some(ParamKind::Int),
            Param::Float(_) => Some(ParamKind::Float),
            Param::Text(_) => Some(ParamKind::Text),
            Param::Timestamp(_) => Some(ParamKind::Timestamp),
            Param::Date(_) => Some(ParamKind::Date),
            Param::Decimal(_) => Some(ParamKind::Decimal),
            Param::Uuid(_) => Some(ParamKind::Uuid),
            Param::Json(_) => Some(ParamKind::Json),
        }
    }

    /// Render this value the way it is inlined into debug output
    ///
    /// Text is wrapped in single quotes without escaping, timestamps and dates
    /// are quoted, NULL is the bare keyword and everything else uses its plain
    /// display form.
    pub fn debug_literal(&self, config: &DebugConfig) -> String {
        match self {
            Param::Text(s) => format!("'{}'", s),
            Param::Timestamp(ts) => format!("'{}'", format_timestamp(ts, &config.timestamp_format)),
            Param::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
            Param::Null | Param::TypedNull(_) => "NULL".to_string(),
            Param::Bool(b) => b.to_string(),
            Param::Int(i) => i.to_string(),
            Param::Float(f) => f.to_string(),
            Param::Decimal(d) => d.to_string(),
            Param::Uuid(u) => u.to_string(),
            Param::Json(v) => v.to_string(),
        }
    }
}

/// Format a timestamp, falling back to the default layout if `format` is invalid
fn format_timestamp(ts: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(format)).is_err() {
        out.clear();
        // The default format is always valid
        let _ = write!(out, "{}", ts.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<&String> for Param {
    fn from(value: &String) -> Self {
        Param::Text(value.clone())
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

/// Integer types that widen losslessly into `i64`
macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Param::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// `u64` can exceed `i64::MAX`, so it is carried as a decimal
impl From<u64> for Param {
    fn from(value: u64) -> Self {
        Param::Decimal(Decimal::from(value))
    }
}

impl From<f32> for Param {
    fn from(value: f32) -> Self {
        Param::Float(f64::from(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

/// Any zone converts to the same instant in UTC
impl<Tz: TimeZone> From<DateTime<Tz>> for Param {
    fn from(value: DateTime<Tz>) -> Self {
        Param::Timestamp(value.with_timezone(&Utc))
    }
}

/// Naive timestamps are taken to be UTC
impl From<NaiveDateTime> for Param {
    fn from(value: NaiveDateTime) -> Self {
        Param::Timestamp(value.and_utc())
    }
}

impl From<NaiveDate> for Param {
    fn from(value: NaiveDate) -> Self {
        Param::Date(value)
    }
}

impl From<Decimal> for Param {
    fn from(value: Decimal) -> Self {
        Param::Decimal(value)
    }
}

impl From<uuid::Uuid> for Param {
    fn from(value: uuid::Uuid) -> Self {
        Param::Uuid(value)
    }
}

impl From<serde_json::Value> for Param {
    fn from(value: serde_json::Value) -> Self {
        Param::Json(value)
    }
}

/// `None` becomes a null typed after `T`
impl<T: ParamType> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::TypedNull(T::KIND), Into::into)
    }
}

macro_rules! impl_param_type {
    ($kind:ident => $($ty:ty),+) => {
        $(
            impl ParamType for $ty {
                const KIND: ParamKind = ParamKind::$kind;
            }
        )+
    };
}

impl_param_type!(Text => &str, String, &String);
impl_param_type!(Bool => bool);
impl_param_type!(Int => i8, i16, i32, i64, u8, u16, u32);
impl_param_type!(Float => f32, f64);
impl_param_type!(Timestamp => NaiveDateTime);
impl_param_type!(Date => NaiveDate);
impl_param_type!(Decimal => u64, Decimal);
impl_param_type!(Uuid => uuid::Uuid);
impl_param_type!(Json => serde_json::Value);

impl<Tz: TimeZone> ParamType for DateTime<Tz> {
    const KIND: ParamKind = ParamKind::Timestamp;
}

/// Build a `Vec<Param>` from values of mixed types
///
/// ```
/// use fluent_sql_builder::{Param, ParamKind, params};
///
/// let p = params![7, "bob", None::<i64>];
/// assert_eq!(
///     p,
///     vec![Param::Int(7), Param::Text("bob".into()), Param::TypedNull(ParamKind::Int)]
/// );
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Param::from($value)),+]
    };
}
