//! Dotted path utilities.
//!
//! A path is split on every `.`; there is no escaping. Keys that contain a
//! literal dot must be addressed with pre-split segments instead.

/// Split a dotted path into segments.
///
/// Examples:
/// - `"a.b.c" -> ["a", "b", "c"]`
/// - `"" -> [""]`
/// - `"a..b" -> ["a", "", "b"]`
pub fn split_path(path: &str) -> Vec<String> {
    path.split('.').map(str::to_owned).collect()
}
