//! `zsutil prefix <path>` – alphanumeric prefix of the last path segment.

use zsutil_core::path::path_prefix;

pub fn run_prefix(path: &str) {
    println!("{}", path_prefix(path));
}
