//! Lowercase hex encoding.

/// Encodes `bytes` as lowercase hex, high nibble first; output is `2 * bytes.len()` long.
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_two_digits_per_byte() {
        assert_eq!(encode(&[0x00, 0xff, 0x10]), "00ff10");
        assert_eq!(encode(&[0xab, 0x0c]), "ab0c");
    }

    #[test]
    fn empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn length_is_double() {
        let bytes: Vec<u8> = (0..=255).collect();
        let s = encode(&bytes);
        assert_eq!(s.len(), 512);
        assert!(s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        assert!(s.starts_with("000102"));
        assert!(s.ends_with("fdfeff"));
    }
}
