//! SHA-256 digests of local files, rendered as lowercase hex.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::codec::hex;
use crate::{text, trim};

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(&hasher.finalize()))
}

/// Compares a computed hex digest with a user-supplied one, ignoring case and
/// surrounding whitespace.
pub fn digest_matches(actual: &str, expected: &str) -> bool {
    let mut expected = text::to_lower(expected);
    trim::trim_any(&mut expected);
    text::to_lower(actual) == expected
}
