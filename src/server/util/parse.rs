/// Parses an optional numeric ID from a query string value
///
/// # Arguments
/// - `value` - Raw value, `None` when the parameter was absent
///
/// # Returns
/// - `Some(i32)` - The value parsed as an ID
/// - `None` - Absent, empty or non-numeric value, all meaning "no filter"
pub fn parse_optional_id(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.trim().parse::<i32>().ok())
}

/// Returns `next` if it is safe to redirect to after login
///
/// Only local absolute paths are accepted so the login form cannot be used to
/// bounce users to another site (`//host` and `/\host` are protocol-relative in
/// browsers).
pub fn local_redirect_target(next: Option<&str>) -> Option<&str> {
    let next = next?.trim();

    if next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/\\") {
        Some(next)
    } else {
        None
    }
}
