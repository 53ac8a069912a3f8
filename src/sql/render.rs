//! Statement assembly
//!
//! Renders a [`QueryBuilder`] into statement text in fixed clause order:
//! SELECT, FROM, JOIN, WHERE, GROUP BY, ORDER BY, LIMIT, OFFSET.
//!
//! HAVING conditions, WITH clauses and raw fragments are never rendered here,
//! although any parameters they contributed are still returned.

use crate::builder::QueryBuilder;
use crate::types::Param;

/// Render the full SELECT statement and its parameters
///
/// `OFFSET` is only emitted together with a positive `LIMIT`.
pub fn render_select(qb: &QueryBuilder) -> (String, Vec<Param>) {
    let mut parts = Vec::new();

    if qb.select.is_empty() {
        parts.push("SELECT *".to_string());
    } else {
        parts.push(format!("SELECT {}", qb.select.join(", ")));
    }

    push_source_and_filters(qb, &mut parts);

    if !qb.group_by.is_empty() {
        parts.push(format!("GROUP BY {}", qb.group_by.join(", ")));
    }

    if !qb.order_by.is_empty() {
        parts.push(format!("ORDER BY {}", qb.order_by.join(", ")));
    }

    if qb.limit > 0 {
        parts.push(format!("LIMIT {}", qb.limit));
        if qb.offset > 0 {
            parts.push(format!("OFFSET {}", qb.offset));
        }
    }

    (parts.join(" "), qb.params.clone())
}

/// Render the row-count statement sharing FROM/JOIN/WHERE with [`render_select`]
///
/// Selected columns, GROUP BY, ORDER BY, LIMIT and OFFSET are ignored.
pub fn render_count(qb: &QueryBuilder) -> (String, Vec<Param>) {
    let mut parts = vec!["SELECT COUNT(*) as count".to_string()];
    push_source_and_filters(qb, &mut parts);
    (parts.join(" "), qb.params.clone())
}

fn push_source_and_filters(qb: &QueryBuilder, parts: &mut Vec<String>) {
    // FROM is emitted even for an empty source
    parts.push(format!("FROM {}", qb.from));

    if !qb.joins.is_empty() {
        parts.push(qb.joins.join(" "));
    }

    if !qb.wheres.is_empty() {
        parts.push(format!("WHERE {}", qb.wheres.join(" AND ")));
    }
}
