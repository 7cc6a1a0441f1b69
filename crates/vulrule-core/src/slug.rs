//! Name normalization for path segments and grouping keys.

/// Normalize a display name into a slug.
///
/// Lowercases the name and strips every leading underscore. No other
/// characters are touched, so `normalize("__SSL_New")` is `"ssl_new"` and
/// `normalize("Open SSL")` is `"open ssl"`.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase().trim_start_matches('_').to_string()
}

/// Check whether a name can be used verbatim as a single path segment.
///
/// Returns the reason the segment is rejected, if any.
pub fn segment_problem(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        return Some("name is empty");
    }
    if segment == "." || segment == ".." {
        return Some("name is a relative directory reference");
    }
    if segment.contains(['/', '\\']) {
        return Some("name contains a path separator");
    }
    if segment.chars().any(char::is_control) {
        return Some("name contains control characters");
    }
    None
}
