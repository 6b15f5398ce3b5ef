//! `zsutil trim <text>` – trim whitespace and report the changed flag.

use zsutil_core::trim;

use crate::cli::TrimSide;

/// Returns the trimmed text and the changed flag for `side`.
pub(crate) fn apply(mut text: String, side: TrimSide) -> (String, bool) {
    let changed = match side {
        TrimSide::Leading => trim::trim_leading(&mut text),
        TrimSide::Trailing => trim::trim_trailing(&mut text),
        TrimSide::Both => trim::trim(&mut text),
        TrimSide::Any => trim::trim_any(&mut text),
    };
    (text, changed)
}

pub fn run_trim(text: String, side: TrimSide) {
    let (out, changed) = apply(text, side);
    println!("{:?}", out);
    println!("changed: {}", changed);
}
