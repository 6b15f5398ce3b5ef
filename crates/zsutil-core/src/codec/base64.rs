//! Base64 decoding that stops at the first byte outside the alphabet.
//!
//! The standard alphabet is used, without padding support: `=` is just another
//! invalid byte and ends decoding. Pending bits that never fill a byte are
//! dropped. [`decode_checked`] reports where decoding stopped;
//! [`decode`] keeps the legacy silent-truncation behavior.

use crate::error::ZsError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Byte → 6-bit value, `-1` for bytes outside the alphabet.
const DECODE_TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Outcome of [`decode_checked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Every input byte was in the alphabet.
    Complete(Vec<u8>),
    /// Decoding stopped at the invalid byte at `offset`; `bytes` holds what was
    /// produced before it.
    Truncated { bytes: Vec<u8>, offset: usize },
}

impl Decoded {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Decoded::Complete(bytes) | Decoded::Truncated { bytes, .. } => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::Complete(bytes) | Decoded::Truncated { bytes, .. } => bytes,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Decoded::Truncated { .. })
    }
}

/// Decodes `input`, reporting whether an invalid byte cut it short.
pub fn decode_checked(input: &str) -> Decoded {
    let mut out = Vec::with_capacity(input.len() * 3 / 4);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for (offset, b) in input.bytes().enumerate() {
        let v = DECODE_TABLE[b as usize];
        if v < 0 {
            tracing::debug!(offset, decoded = out.len(), "base64 decode stopped at invalid byte");
            return Decoded::Truncated { bytes: out, offset };
        }
        // Keep at most 14 significant bits: <8 pending + 6 new.
        acc = ((acc << 6) | v as u32) & 0x3fff;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    Decoded::Complete(out)
}

/// Decodes `input`, silently returning the bytes produced before any invalid byte.
pub fn decode(input: &str) -> Vec<u8> {
    decode_checked(input).into_bytes()
}

/// Decodes `input`, failing if any byte lies outside the alphabet.
pub fn decode_strict(input: &str) -> Result<Vec<u8>, ZsError> {
    match decode_checked(input) {
        Decoded::Complete(bytes) => Ok(bytes),
        Decoded::Truncated { offset, .. } => Err(ZsError::Base64Truncated { offset }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::base64::engine::general_purpose::STANDARD_NO_PAD;
    use ::base64::Engine;

    #[test]
    fn table_matches_alphabet() {
        assert_eq!(DECODE_TABLE[b'A' as usize], 0);
        assert_eq!(DECODE_TABLE[b'a' as usize], 26);
        assert_eq!(DECODE_TABLE[b'0' as usize], 52);
        assert_eq!(DECODE_TABLE[b'+' as usize], 62);
        assert_eq!(DECODE_TABLE[b'/' as usize], 63);
        assert_eq!(DECODE_TABLE[b'=' as usize], -1);
        assert_eq!(DECODE_TABLE[b'-' as usize], -1);
        assert_eq!(DECODE_TABLE.iter().filter(|&&v| v >= 0).count(), 64);
    }

    #[test]
    fn stops_at_padding() {
        let d = decode_checked("SGVsbG8=");
        assert_eq!(
            d,
            Decoded::Truncated {
                bytes: b"Hello".to_vec(),
                offset: 7
            }
        );
        assert_eq!(decode("SGVsbG8="), b"Hello");
    }

    #[test]
    fn complete_input() {
        assert_eq!(
            decode_checked("SGVsbG8gd29ybGQ"),
            Decoded::Complete(b"Hello world".to_vec())
        );
        assert_eq!(decode_checked(""), Decoded::Complete(Vec::new()));
    }

    #[test]
    fn leftover_bits_are_dropped() {
        // One symbol is only 6 bits.
        assert_eq!(decode("S"), b"");
        assert_eq!(decode("SG"), b"H");
    }

    #[test]
    fn stops_mid_stream() {
        let d = decode_checked("SGVs bG8");
        assert!(d.is_truncated());
        assert_eq!(d.bytes(), b"Hel");
        assert_eq!(decode("!SGVs"), b"");
    }

    #[test]
    fn non_ascii_is_invalid() {
        assert_eq!(
            decode_checked("SGé"),
            Decoded::Truncated {
                bytes: b"H".to_vec(),
                offset: 2
            }
        );
    }

    #[test]
    fn strict_rejects_truncation() {
        assert_eq!(decode_strict("SGVsbG8").unwrap(), b"Hello");
        match decode_strict("SGVsbG8=") {
            Err(ZsError::Base64Truncated { offset }) => assert_eq!(offset, 7),
            other => panic!("expected truncation error, got {other:?}"),
        }
    }

    #[test]
    fn unpadded_standard_encoding_round_trips() {
        let samples: [&[u8]; 5] = [
            b"",
            b"\x00",
            b"\xff\xfe\xfd",
            b"zsync control file",
            &[0xfb, 0xff, 0xbf, 0x00, 0x10, 0x83],
        ];
        for bytes in samples {
            let encoded = STANDARD_NO_PAD.encode(bytes);
            assert_eq!(decode_checked(&encoded), Decoded::Complete(bytes.to_vec()));
        }
        let long: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        assert_eq!(decode(&STANDARD_NO_PAD.encode(&long)), long);
    }
}
