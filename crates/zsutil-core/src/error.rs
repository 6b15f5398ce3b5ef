//! Error type for the fallible edges of the toolkit.
//!
//! The string and codec helpers are total; only strict decoding, redirect
//! resolution and metadata lookups surface errors.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ZsError {
    /// Base64 input contained a byte outside the alphabet at `offset`.
    #[error("base64 input truncated at byte {offset}: invalid character")]
    Base64Truncated { offset: usize },

    /// A redirect lookup was asked for a URL without a scheme.
    #[error("not an absolute URL: {0}")]
    NotAbsolute(String),

    /// stat() on a local path failed.
    #[error("cannot read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_truncated() {
        let e = ZsError::Base64Truncated { offset: 7 };
        assert_eq!(
            e.to_string(),
            "base64 input truncated at byte 7: invalid character"
        );
    }

    #[test]
    fn metadata_keeps_source() {
        use std::error::Error;
        let e = ZsError::Metadata {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(e.to_string().starts_with("cannot read metadata for /nope"));
        assert!(e.source().is_some());
    }
}
