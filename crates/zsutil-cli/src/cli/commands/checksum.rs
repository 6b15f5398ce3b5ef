//! Checksum command: compute SHA-256 of a file.

use anyhow::Result;
use std::path::Path;
use zsutil_core::checksum;

/// Fails if `expect` is given and does not match `digest`.
pub(crate) fn verify_digest(path: &Path, digest: &str, expect: Option<&str>) -> Result<()> {
    if let Some(expected) = expect {
        if !checksum::digest_matches(digest, expected) {
            anyhow::bail!("checksum mismatch for {}: expected {}", path.display(), expected);
        }
    }
    Ok(())
}

/// Compute and print SHA-256 of the given file; with `expect`, fail on mismatch.
pub fn run_checksum(path: &Path, expect: Option<&str>) -> Result<()> {
    let digest = checksum::sha256_path(path)?;
    println!("{}  {}", digest, path.display());
    verify_digest(path, &digest, expect)
}
