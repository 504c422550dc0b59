//! Static asset constants.

/// Stylesheet for both media pages.
pub const CSS: &str = include_str!("styles.css");
