//! QueryBuilder - fluent accumulation of SELECT clause fragments
//!
//! Every mutator appends to (or, for `from`/`limit`/`offset`, overwrites) the
//! builder's state and hands the builder back for chaining. Nothing is
//! validated: fragments are opaque SQL, and matching `?` placeholders to
//! parameters is the caller's job.

use std::fmt;

use crate::config::DebugConfig;
use crate::sql::combinator::wrap_sub_query;
use crate::sql::debug::replace_query_params_with;
use crate::sql::render::{render_count, render_select};
use crate::types::Param;

/// Accumulated clauses and bind parameters for one statement
///
/// A builder is owned by the code constructing the statement. Building
/// (`build`, `build_count`, `to_string`) never mutates it, so one builder can
/// be rendered any number of times or fed into a combinator afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    pub(crate) select: Vec<String>,
    pub(crate) from: String,
    pub(crate) joins: Vec<String>,
    pub(crate) wheres: Vec<String>,
    pub(crate) group_by: Vec<String>,
    pub(crate) order_by: Vec<String>,
    /// Zero or negative means unset
    pub(crate) limit: i64,
    pub(crate) offset: i64,
    pub(crate) params: Vec<Param>,
    pub(crate) having: Vec<String>,
    pub(crate) with: Vec<String>,
    pub(crate) raw: Vec<String>,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Append selected columns; with none, the statement selects `*`
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Set the FROM source, replacing any previous one
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = table.into();
        self
    }

    /// Append a join fragment, which must carry its own `JOIN` keyword
    pub fn join(mut self, join: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        self.joins.push(join.into());
        self.params.extend(params);
        self
    }

    /// Append a WHERE condition; conditions are combined with `AND`
    pub fn where_(
        mut self,
        condition: impl Into<String>,
        params: impl IntoIterator<Item = Param>,
    ) -> Self {
        self.wheres.push(condition.into());
        self.params.extend(params);
        self
    }

    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn order_by(mut self, order: impl Into<String>) -> Self {
        self.order_by.push(order.into());
        self
    }

    /// Set the row limit; values below 1 leave LIMIT (and OFFSET) out
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the row offset; only rendered when a positive limit is set
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Record a HAVING condition
    ///
    /// The condition is stored but not rendered by [`build`](Self::build);
    /// its parameters are still appended to the parameter list.
    pub fn having(
        mut self,
        condition: impl Into<String>,
        params: impl IntoIterator<Item = Param>,
    ) -> Self {
        self.having.push(condition.into());
        self.params.extend(params);
        self
    }

    /// Record a raw SQL fragment
    ///
    /// Like [`having`](Self::having), the fragment is kept but never rendered
    /// while its parameters are.
    pub fn raw(mut self, sql: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        self.raw.push(sql.into());
        self.params.extend(params);
        self
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Render the statement text and the accumulated parameters
    pub fn build(&self) -> (String, Vec<Param>) {
        render_select(self)
    }

    /// Render a `SELECT COUNT(*) as count` statement over the same FROM/JOIN/WHERE
    pub fn build_count(&self) -> (String, Vec<Param>) {
        render_count(self)
    }

    /// Same as [`build`](Self::build)
    pub fn get_query(&self) -> (String, Vec<Param>) {
        self.build()
    }

    /// Render as `(<statement>) AS <alias>`, dropping the parameters
    ///
    /// Embedding the result elsewhere means carrying [`params`](Self::params)
    /// over by hand.
    pub fn sub_query(&self, alias: &str) -> String {
        let (sql, _) = self.build();
        wrap_sub_query(&sql, alias)
    }

    /// Log the statement with parameters inlined, at DEBUG level
    pub fn debug(self) -> Self {
        self.debug_with(&DebugConfig::default())
    }

    /// [`debug`](Self::debug) with explicit rendering options
    ///
    /// Nothing is rendered unless DEBUG is enabled for this module.
    pub fn debug_with(self, config: &DebugConfig) -> Self {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let (sql, params) = self.get_query();
            let rendered = replace_query_params_with(&sql, &params, config);
            tracing::debug!(
                sql = %config.truncate(&rendered),
                params = params.len(),
                "built query"
            );
        }
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All parameters in the order they were added
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The FROM source; holds the whole combined text for [`union`](crate::union) results
    pub fn source(&self) -> &str {
        &self.from
    }

    pub fn having_conditions(&self) -> &[String] {
        &self.having
    }

    /// WITH clauses, as produced by [`with_recursive`](crate::with_recursive)
    pub fn with_clauses(&self) -> &[String] {
        &self.with
    }

    pub fn raw_fragments(&self) -> &[String] {
        &self.raw
    }

    pub fn limit_value(&self) -> i64 {
        self.limit
    }

    pub fn offset_value(&self) -> i64 {
        self.offset
    }
}

/// Statement text only, as produced by [`QueryBuilder::build`]
impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sql, _) = self.build();
        f.write_str(&sql)
    }
}
