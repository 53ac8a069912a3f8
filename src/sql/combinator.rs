//! Statement combinators
//!
//! Build composite statements out of already-assembled builders. Results are
//! returned as new builders whose FROM source (for [`union`]) or WITH clause
//! list (for [`with_recursive`]) carries the combined text.

use crate::builder::QueryBuilder;

/// Wrap rendered statement text as an aliased derived table
pub(crate) fn wrap_sub_query(sql: &str, alias: &str) -> String {
    format!("({}) AS {}", sql, alias)
}

/// Combine statements with `UNION ALL`
///
/// Each input is built and parenthesized; the joined text becomes the new
/// builder's [`source`](QueryBuilder::source) and the inputs' parameters are
/// concatenated in order. Read the result through `source()`/`params()`:
/// building it again yields `SELECT * FROM (q1) UNION ALL (q2)`, which is
/// valid SQL with different meaning.
pub fn union<'a, I>(queries: I) -> QueryBuilder
where
    I: IntoIterator<Item = &'a QueryBuilder>,
{
    let mut parts = Vec::new();
    let mut params = Vec::new();

    for query in queries {
        let (sql, query_params) = query.build();
        parts.push(format!("({})", sql));
        params.extend(query_params);
    }

    let mut result = QueryBuilder::new();
    result.from = parts.join(" UNION ALL ");
    result.params = params;
    result
}

/// Wrap a statement as `WITH RECURSIVE <name> AS (<statement>)`
///
/// The CTE text is stored in the new builder's WITH clauses, which
/// [`QueryBuilder::build`] does not render; only the parameters carry over
/// into built output.
pub fn with_recursive(name: &str, query: &QueryBuilder) -> QueryBuilder {
    let (sql, params) = query.build();

    let mut result = QueryBuilder::new();
    result.with.push(format!("WITH RECURSIVE {} AS ({})", name, sql));
    result.params = params;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    // ==================== union ====================

    #[test]
    fn test_union_two_queries() {
        let a = QueryBuilder::new().from("a").where_("x = ?", params![1]);
        let b = QueryBuilder::new().from("b").where_("y = ?", params!["two"]);

        let u = union([&a, &b]);

        assert_eq!(
            u.source(),
            format!("({}) UNION ALL ({})", a.to_string(), b.to_string())
        );
        assert_eq!(u.params(), params![1, "two"].as_slice());
    }

    #[test]
    fn test_union_three_queries_no_trailing_separator() {
        let a = QueryBuilder::new().from("a");
        let b = QueryBuilder::new().from("b");
        let c = QueryBuilder::new().from("c");

        let u = union([&a, &b, &c]);
        assert_eq!(
            u.source(),
            "(SELECT * FROM a) UNION ALL (SELECT * FROM b) UNION ALL (SELECT * FROM c)"
        );
    }

    #[test]
    fn test_union_single_query() {
        let a = QueryBuilder::new().from("a");
        assert_eq!(union([&a]).source(), "(SELECT * FROM a)");
    }

    #[test]
    fn test_union_empty() {
        let u = union(std::iter::empty());
        assert_eq!(u.source(), "");
        assert!(u.params().is_empty());
    }

    #[test]
    fn test_union_rebuilt_selects_from_combined_text() {
        let a = QueryBuilder::new().from("a");
        let b = QueryBuilder::new().from("b");

        let u = union([&a, &b]);
        assert_eq!(
            u.to_string(),
            "SELECT * FROM (SELECT * FROM a) UNION ALL (SELECT * FROM b)"
        );
    }

    #[test]
    fn test_union_leaves_inputs_untouched() {
        let a = QueryBuilder::new().from("a").where_("x = ?", params![1]);
        let before = a.clone();
        let _ = union([&a, &a]);
        assert_eq!(a, before);
    }

    // ==================== with_recursive ====================

    #[test]
    fn test_with_recursive_stores_cte() {
        let tree = QueryBuilder::new()
            .select(["id", "parent_id"])
            .from("nodes")
            .where_("parent_id = ?", params![42]);

        let cte = with_recursive("tree", &tree);

        assert_eq!(
            cte.with_clauses(),
            ["WITH RECURSIVE tree AS (SELECT id, parent_id FROM nodes WHERE parent_id = ?)"]
        );
        assert_eq!(cte.params(), params![42].as_slice());
    }

    #[test]
    fn test_with_recursive_not_rendered() {
        let inner = QueryBuilder::new().from("nodes").where_("id = ?", params![1]);
        let cte = with_recursive("tree", &inner).from("tree");

        let (sql, params) = cte.build();
        assert_eq!(sql, "SELECT * FROM tree");
        assert_eq!(params, params![1]);
    }

    // ==================== sub_query ====================

    #[test]
    fn test_wrap_sub_query() {
        assert_eq!(wrap_sub_query("SELECT 1", "one"), "(SELECT 1) AS one");
    }
}
