//! Error types for query builder operations

use thiserror::Error;

/// Errors that can occur outside the (total) clause-building path
#[derive(Debug, Error)]
pub enum QueryBuilderError {
    #[error("Placeholder mismatch: statement has {placeholders} placeholder(s) but {params} parameter(s) were supplied")]
    PlaceholderMismatch { placeholders: usize, params: usize },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryBuilderError {
    pub fn placeholder_mismatch(placeholders: usize, params: usize) -> Self {
        Self::PlaceholderMismatch {
            placeholders,
            params,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryBuilderError>;
