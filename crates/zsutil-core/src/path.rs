//! Path prefix extraction.

/// Returns the leading ASCII-alphanumeric run of the last `/`-separated segment.
///
/// Purely syntactic; the filesystem is never consulted.
///
/// - `path_prefix("foo/bar-123")` → `"bar"`
/// - `path_prefix("noslash")` → `"noslash"`
/// - `path_prefix("dir/")` → `""`
pub fn path_prefix(path: &str) -> &str {
    let segment = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    let end = segment
        .bytes()
        .position(|b| !b.is_ascii_alphanumeric())
        .unwrap_or(segment.len());
    &segment[..end]
}
