//! `zsutil hex <input>` – lowercase hex of text or file bytes.

use anyhow::{Context, Result};
use zsutil_core::codec::hex;

pub fn run_hex(input: &str, file: bool) -> Result<()> {
    let encoded = if file {
        let bytes = std::fs::read(input).with_context(|| format!("read {}", input))?;
        hex::encode(&bytes)
    } else {
        hex::encode(input.as_bytes())
    };
    println!("{}", encoded);
    Ok(())
}
