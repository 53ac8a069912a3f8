//! # fluent-sql-builder
//!
//! A fluent builder for SELECT statements that produces statement text and a
//! parallel list of positional bind parameters, without ever touching a
//! database.
//!
//! Clause fragments are opaque strings concatenated verbatim. The builder does
//! not parse, validate or escape them; the only injection protection is the
//! `?` placeholder and its bound [`Param`].
//!
//! ## Features
//!
//! - **Fixed Clause Order**: SELECT, FROM, JOIN, WHERE, GROUP BY, ORDER BY, LIMIT, OFFSET
//! - **Count Queries**: `build_count` for pagination totals over the same filters
//! - **Combinators**: subqueries, `UNION ALL` and recursive CTE wrapping
//! - **Debug Rendering**: parameters inlined into placeholders, logged through `tracing`
//! - **sqlx Hand-off**: `$n` renumbering and parameter binding for PostgreSQL
//!
//! ## Quick Start
//!
//! ```rust
//! use fluent_sql_builder::{params, QueryBuilder};
//!
//! let active_only = true;
//!
//! let mut qb = QueryBuilder::new()
//!     .select(["u.id", "u.name"])
//!     .from("users u")
//!     .join("LEFT JOIN teams t ON t.id = u.team_id", params![]);
//! if active_only {
//!     qb = qb.where_("u.active = ?", params![true]);
//! }
//! let qb = qb.order_by("u.name ASC").limit(20).offset(40);
//!
//! let (sql, params) = qb.build();
//! assert_eq!(
//!     sql,
//!     "SELECT u.id, u.name FROM users u LEFT JOIN teams t ON t.id = u.team_id \
//!      WHERE u.active = ? ORDER BY u.name ASC LIMIT 20 OFFSET 40"
//! );
//! assert_eq!(params, params![true]);
//!
//! let (count_sql, _) = qb.build_count();
//! assert_eq!(
//!     count_sql,
//!     "SELECT COUNT(*) as count FROM users u LEFT JOIN teams t ON t.id = u.team_id \
//!      WHERE u.active = ?"
//! );
//! ```
//!
//! ## Unrendered Clauses
//!
//! `having`, `raw` and [`with_recursive`] store their text but the assembler
//! does not emit it. Their parameters are still part of the returned list, so
//! the parameter count can exceed the placeholder count. Use
//! [`sql::check_placeholders`] to detect that before execution.
//!
//! ## Thread Safety
//!
//! A builder is a plain owned value with no internal locking. Build each
//! statement in the context that owns it; share it across threads only behind
//! the caller's own synchronization.

pub mod builder;
pub mod config;
pub mod error;
pub mod sql;
pub mod types;

// Re-export main types for convenience
pub use builder::QueryBuilder;
pub use config::{DebugConfig, DebugConfigBuilder};
pub use error::{QueryBuilderError, Result};
pub use types::{Param, ParamKind, ParamType};

pub use sql::combinator::{union, with_recursive};
pub use sql::debug::{replace_query_params, replace_query_params_with};
