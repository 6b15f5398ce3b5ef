//! `zsutil split <text>` – one field per line.

use zsutil_core::split::split;

pub fn run_split(text: &str, delim: char) {
    for field in split(text, delim) {
        println!("{}", field);
    }
}
