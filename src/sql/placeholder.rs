//! Placeholder utilities and the hand-off to sqlx
//!
//! Built statements use positional `?` placeholders. PostgreSQL expects
//! numbered `$1, $2, ...` placeholders, so statements headed for a
//! [`sqlx::PgPool`] go through [`to_numbered_placeholders`] first and then
//! [`bind_params`]. Nothing here executes a statement.
//!
//! Every `?` character counts as a placeholder, including one inside a string
//! literal or a JSONB `?` operator.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;

use crate::error::{QueryBuilderError, Result};
use crate::types::{Param, ParamKind};

/// Count `?` placeholders in a statement
pub fn count_placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

/// Verify that a statement has exactly one placeholder per parameter
///
/// The builder never checks this itself; call it before execution when a
/// mismatch should fail loudly instead of misbinding.
pub fn check_placeholders(sql: &str, params: &[Param]) -> Result<()> {
    let placeholders = count_placeholders(sql);
    if placeholders != params.len() {
        return Err(QueryBuilderError::placeholder_mismatch(
            placeholders,
            params.len(),
        ));
    }
    Ok(())
}

/// Rewrite `?` placeholders as `$1`, `$2`, ... in order of appearance
///
/// # Example
/// ```
/// use fluent_sql_builder::sql::to_numbered_placeholders;
///
/// assert_eq!(
///     to_numbered_placeholders("a = ? AND b = ?"),
///     "a = $1 AND b = $2"
/// );
/// ```
pub fn to_numbered_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut index = 1;
    for c in sql.chars() {
        if c == '?' {
            out.push('$');
            out.push_str(&index.to_string());
            index += 1;
        } else {
            out.push(c);
        }
    }
    out
}

/// Bind parameters, in order, onto a sqlx PostgreSQL query
///
/// `sql` must already use numbered placeholders. The query is returned
/// unexecuted for the caller's execution layer.
///
/// A [`Param::TypedNull`] binds as a null of its own SQL type, so it can be
/// compared with or coalesced against a column of that type. A bare
/// [`Param::Null`] carries no type and binds as a TEXT null.
pub fn bind_params<'q>(
    sql: &'q str,
    params: impl IntoIterator<Item = Param>,
) -> Query<'q, Postgres, PgArguments> {
    params.into_iter().fold(sqlx::query(sql), bind_param)
}

fn bind_param<'q>(
    query: Query<'q, Postgres, PgArguments>,
    param: Param,
) -> Query<'q, Postgres, PgArguments> {
    match param {
        Param::TypedNull(kind) => bind_typed_null(query, kind),
        // No type to go on; PostgreSQL sees a TEXT null
        Param::Null => query.bind(None::<String>),
        Param::Bool(b) => query.bind(b),
        Param::Int(i) => query.bind(i),
        Param::Float(f) => query.bind(f),
        Param::Text(s) => query.bind(s),
        Param::Timestamp(ts) => query.bind(ts),
        Param::Date(d) => query.bind(d),
        Param::Decimal(d) => query.bind(d),
        Param::Uuid(u) => query.bind(u),
        Param::Json(v) => query.bind(v),
    }
}

fn bind_typed_null<'q>(
    query: Query<'q, Postgres, PgArguments>,
    kind: ParamKind,
) -> Query<'q, Postgres, PgArguments> {
    match kind {
        ParamKind::Bool => query.bind(None::<bool>),
        ParamKind::Int => query.bind(None::<i64>),
        ParamKind::Float => query.bind(None::<f64>),
        ParamKind::Text => query.bind(None::<String>),
        ParamKind::Timestamp => query.bind(None::<DateTime<Utc>>),
        ParamKind::Date => query.bind(None::<NaiveDate>),
        ParamKind::Decimal => query.bind(None::<Decimal>),
        ParamKind::Uuid => query.bind(None::<uuid::Uuid>),
        ParamKind::Json => query.bind(None::<serde_json::Value>),
    }
}
