//! Byte codecs: lenient base64 decoding and lowercase hex encoding.

pub mod base64;
pub mod hex;

pub use self::base64::{decode, decode_checked, decode_strict, Decoded};
