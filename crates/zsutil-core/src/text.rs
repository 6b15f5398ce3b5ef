//! Small ASCII text helpers.

/// Lowercases ASCII letters only; other characters are left as they are.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// True if `value` ends with `ending`. An ending longer than the value never matches.
pub fn ends_with(value: &str, ending: &str) -> bool {
    ending.len() <= value.len() && value.as_bytes().ends_with(ending.as_bytes())
}
