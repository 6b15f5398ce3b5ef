//! `zsutil absolute <url>` – absolute/relative URL check.

use zsutil_core::url_class::is_url_absolute;

pub fn run_absolute(url: &str) {
    let kind = if is_url_absolute(url) {
        "absolute"
    } else {
        "relative"
    };
    println!("{}", kind);
}
