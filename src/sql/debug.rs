//! Human-readable statement rendering
//!
//! Inlines parameter values into `?` placeholders. The output is for
//! inspection only and must never be executed: text values are quoted but
//! not escaped.

use crate::config::DebugConfig;
use crate::types::Param;

/// Replace placeholders with parameter literals using default formatting
///
/// ```
/// use fluent_sql_builder::{params, sql::replace_query_params};
///
/// let sql = replace_query_params("WHERE id = ? AND name = ?", &params![7, "bob"]);
/// assert_eq!(sql, "WHERE id = 7 AND name = 'bob'");
/// ```
pub fn replace_query_params(query: &str, params: &[Param]) -> String {
    replace_query_params_with(query, params, &DebugConfig::default())
}

/// Replace placeholders with parameter literals
///
/// Each parameter, in order, replaces the first `?` left in the text at that
/// point, so a `?` inside an already inlined value can be consumed by a later
/// parameter. Surplus parameters are dropped and surplus placeholders stay.
pub fn replace_query_params_with(query: &str, params: &[Param], config: &DebugConfig) -> String {
    if params.is_empty() {
        return query.to_string();
    }

    let mut rendered = query.to_string();
    for param in params {
        let value = param.debug_literal(config);
        rendered = rendered.replacen('?', &value, 1);
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_inline_int_and_text() {
        assert_eq!(
            replace_query_params("WHERE id = ? AND name = ?", &params![7, "bob"]),
            "WHERE id = 7 AND name = 'bob'"
        );
    }

    #[test]
    fn test_no_params_is_identity() {
        for text in ["", "SELECT ?", "a ? b ? c", "100% sure"] {
            assert_eq!(replace_query_params(text, &[]), text);
        }
    }

    #[test]
    fn test_null_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(
            replace_query_params("a = ? AND b > ?", &params![None::<i64>, at]),
            "a = NULL AND b > '2023-12-31 23:59:58'"
        );
    }

    #[test]
    fn test_extra_params_dropped() {
        assert_eq!(
            replace_query_params("id = ?", &params![1, 2, 3]),
            "id = 1"
        );
    }

    #[test]
    fn test_extra_placeholders_remain() {
        assert_eq!(
            replace_query_params("a = ? AND b = ? AND c = ?", &params![1]),
            "a = 1 AND b = ? AND c = ?"
        );
    }

    #[test]
    fn test_question_mark_inside_value_is_consumed() {
        assert_eq!(
            replace_query_params("a = ? AND b = ?", &params!["why?", 5]),
            "a = 'why5' AND b = ?"
        );
    }

    #[test]
    fn test_percent_sequences_kept_verbatim() {
        assert_eq!(
            replace_query_params("name LIKE ?", &params!["%s%d"]),
            "name LIKE '%s%d'"
        );
    }

    #[test]
    fn test_custom_timestamp_format() {
        let config = DebugConfig::builder().timestamp_format("%H:%M").build();
        let at = Utc.with_ymd_and_hms(2023, 1, 1, 9, 30, 0).unwrap();
        assert_eq!(
            replace_query_params_with("t = ?", &params![at], &config),
            "t = '09:30'"
        );
    }

    #[test]
    fn test_returned_value_never_truncated() {
        let config = DebugConfig::builder().max_length(3).build();
        assert_eq!(
            replace_query_params_with("id = ?", &params![12345], &config),
            "id = 12345"
        );
    }
}
