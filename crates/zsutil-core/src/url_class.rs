//! Absolute-vs-relative URL classification.

/// True if `url` starts with a scheme, i.e. the first of `:`, `/`, `?` is a `:`
/// and is not the first character.
///
/// This is a syntactic heuristic: the scheme name is not validated, and
/// `//host/path` counts as relative.
pub fn is_url_absolute(url: &str) -> bool {
    match url.find([':', '/', '?']) {
        None | Some(0) => false,
        Some(i) => url.as_bytes()[i] == b':',
    }
}
