//! SQL rendering utilities for the query builder
//!
//! Provides statement assembly, combinators, debug rendering and
//! placeholder handling.

pub mod combinator;
pub mod debug;
pub mod placeholder;
pub mod render;

pub use combinator::{union, with_recursive};
pub use debug::{replace_query_params, replace_query_params_with};
pub use placeholder::{
    bind_params, check_placeholders, count_placeholders, to_numbered_placeholders,
};
pub use render::{render_count, render_select};
