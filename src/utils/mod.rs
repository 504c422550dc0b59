//! Shared utility functions.
//!
//! - `html`: escaping record text for HTML output
//! - `query`: building page query strings

mod html;
mod query;

pub use html::html_escape;
pub use query::build_query;
