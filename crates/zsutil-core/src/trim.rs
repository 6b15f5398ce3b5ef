//! Whitespace trimming that reports whether anything was removed.
//!
//! Whitespace is the C-locale `isspace` set, which unlike
//! [`u8::is_ascii_whitespace`] includes vertical tab.

/// Space, `\t`, `\n`, `\x0b`, `\x0c`, `\r`.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Removes the leading whitespace run in place. Returns true if the string got shorter.
pub fn trim_leading(s: &mut String) -> bool {
    let start = s.bytes().take_while(|&b| is_space(b)).count();
    // Only ASCII bytes are counted, so `start` is a char boundary.
    s.replace_range(..start, "");
    start > 0
}

/// Removes the trailing whitespace run in place. Returns true if the string got shorter.
pub fn trim_trailing(s: &mut String) -> bool {
    let keep = s.len() - s.bytes().rev().take_while(|&b| is_space(b)).count();
    let changed = keep < s.len();
    s.truncate(keep);
    changed
}

/// Trims both ends. Returns true only if *both* ends were trimmed.
///
/// The conjunction is the historical contract that callers may depend on;
/// use [`trim_any`] for "did anything change".
pub fn trim(s: &mut String) -> bool {
    let leading = trim_leading(s);
    trim_trailing(s) && leading
}

/// Trims both ends. Returns true if either end was trimmed.
pub fn trim_any(s: &mut String) -> bool {
    let leading = trim_leading(s);
    let trailing = trim_trailing(s);
    leading || trailing
}
