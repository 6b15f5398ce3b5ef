//! `zsutil b64decode <input>` – decode base64, print hex.

use anyhow::Result;
use zsutil_core::codec::{self, hex, Decoded};
use zsutil_core::config::Base64Mode;

/// Decoded bytes plus the warning to show when lenient decoding stopped early.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DecodeOutput {
    pub bytes: Vec<u8>,
    pub warning: Option<String>,
}

/// Strict if asked on the command line or by config; otherwise truncation is a warning.
pub(crate) fn decode_bytes(input: &str, strict: bool, mode: Base64Mode) -> Result<DecodeOutput> {
    if strict || mode == Base64Mode::Strict {
        let bytes = codec::decode_strict(input)?;
        return Ok(DecodeOutput {
            bytes,
            warning: None,
        });
    }
    Ok(match codec::decode_checked(input) {
        Decoded::Complete(bytes) => DecodeOutput {
            bytes,
            warning: None,
        },
        Decoded::Truncated { bytes, offset } => DecodeOutput {
            warning: Some(format!(
                "stopped at invalid character at byte {}; {} bytes decoded",
                offset,
                bytes.len()
            )),
            bytes,
        },
    })
}

pub fn run_b64decode(input: &str, strict: bool, mode: Base64Mode) -> Result<()> {
    let out = decode_bytes(input, strict, mode)?;
    if let Some(warning) = &out.warning {
        eprintln!("warning: {}", warning);
    }
    println!("{}", hex::encode(&out.bytes));
    Ok(())
}
