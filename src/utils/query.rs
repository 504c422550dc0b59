//! Query string helpers for page links and redirects.

/// Build a `?a=b&c=d` query string from optional parameters.
///
/// Parameters whose value is `None` or empty are dropped. Returns an empty
/// string when nothing is left.
pub fn build_query(params: &[(&str, Option<&str>)]) -> String {
    let parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some(format!("{}={}", key, urlencoding::encode(v))),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}
