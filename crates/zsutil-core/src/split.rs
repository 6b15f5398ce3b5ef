//! Delimiter splitting with line-reader semantics.

/// Splits `text` on every `delim`, keeping empty fields between delimiters.
///
/// Behaves like reading fields one at a time until input runs out: a trailing
/// delimiter does not start a new (empty) field, and empty input has no fields.
pub fn split(text: &str, delim: char) -> Vec<String> {
    text.split_terminator(delim).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_inner_empty_fields() {
        assert_eq!(split("a,b,,c", ','), ["a", "b", "", "c"]);
    }

    #[test]
    fn empty_input_has_no_fields() {
        assert!(split("", ',').is_empty());
    }

    #[test]
    fn trailing_delimiter() {
        assert_eq!(split("a,", ','), ["a"]);
        assert_eq!(split(",", ','), [""]);
        assert_eq!(split("a,,", ','), ["a", ""]);
    }

    #[test]
    fn leading_delimiter() {
        assert_eq!(split(",a", ','), ["", "a"]);
    }

    #[test]
    fn no_delimiter() {
        assert_eq!(split("abc", ','), ["abc"]);
    }

    #[test]
    fn header_lines() {
        let header = "zsync: 0.6.2\nFilename: app.AppImage\nBlocksize: 2048\n";
        assert_eq!(
            split(header, '\n'),
            ["zsync: 0.6.2", "Filename: app.AppImage", "Blocksize: 2048"]
        );
    }
}
