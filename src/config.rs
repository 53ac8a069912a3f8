//! Configuration for the debug renderer
//!
//! Provides a builder pattern for configuring how parameters are inlined
//! into statements for diagnostic output.

/// Default chrono format for timestamp parameters (`YYYY-MM-DD HH:MM:SS`)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration for [`QueryBuilder::debug_with`](crate::QueryBuilder::debug_with)
/// and [`replace_query_params_with`](crate::sql::debug::replace_query_params_with)
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// chrono format string used for timestamp parameters
    pub timestamp_format: String,
    /// Maximum length of the logged statement; longer output is cut and suffixed with `...`
    pub max_length: Option<usize>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            max_length: None,
        }
    }
}

impl DebugConfig {
    /// Create a new configuration builder
    pub fn builder() -> DebugConfigBuilder {
        DebugConfigBuilder::new()
    }

    /// Apply `max_length` to a rendered statement
    pub(crate) fn truncate(&self, rendered: &str) -> String {
        match self.max_length {
            Some(max) if rendered.chars().count() > max => {
                let cut: String = rendered.chars().take(max).collect();
                format!("{}...", cut)
            }
            _ => rendered.to_string(),
        }
    }
}

/// Builder for DebugConfig
#[derive(Debug)]
pub struct DebugConfigBuilder {
    timestamp_format: String,
    max_length: Option<usize>,
}

impl Default for DebugConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            max_length: None,
        }
    }

    /// Set the timestamp format (default: `%Y-%m-%d %H:%M:%S`)
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Truncate logged statements longer than `max` characters
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Log statements in full (default)
    pub fn unbounded(mut self) -> Self {
        self.max_length = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> DebugConfig {
        DebugConfig {
            timestamp_format: self.timestamp_format,
            max_length: self.max_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // DebugConfig Default Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = DebugConfig::default();
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.max_length, None);
    }

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(DebugConfig::builder().build(), DebugConfig::default());
    }

    // =========================================================================
    // Builder Tests
    // =========================================================================

    #[test]
    fn test_custom_timestamp_format() {
        let config = DebugConfig::builder().timestamp_format("%d/%m/%Y").build();
        assert_eq!(config.timestamp_format, "%d/%m/%Y");
    }

    #[test]
    fn test_max_length_then_unbounded() {
        let config = DebugConfig::builder().max_length(10).unbounded().build();
        assert_eq!(config.max_length, None);
    }

    // =========================================================================
    // Truncation Tests
    // =========================================================================

    #[test]
    fn test_truncate_long_statement() {
        let config = DebugConfig::builder().max_length(8).build();
        assert_eq!(config.truncate("SELECT * FROM users"), "SELECT *...");
    }

    #[test]
    fn test_truncate_short_statement_untouched() {
        let config = DebugConfig::builder().max_length(100).build();
        assert_eq!(config.truncate("SELECT 1"), "SELECT 1");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let config = DebugConfig::builder().max_length(3).build();
        assert_eq!(config.truncate("日本語テキスト"), "日本語...");
    }
}
