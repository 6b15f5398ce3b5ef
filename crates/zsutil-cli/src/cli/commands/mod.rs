//! CLI command handlers, one file per command.

mod absolute;
mod b64decode;
mod checksum;
mod hex;
mod prefix;
mod resolve;
mod split;
mod stat;
mod trim;

pub use absolute::run_absolute;
pub use b64decode::run_b64decode;
pub use checksum::run_checksum;
pub use hex::run_hex;
pub use prefix::run_prefix;
pub use resolve::run_resolve;
pub use split::run_split;
pub use stat::run_stat;
pub use trim::run_trim;

#[cfg(test)]
pub(crate) use b64decode::{decode_bytes, DecodeOutput};
#[cfg(test)]
pub(crate) use checksum::verify_digest;
#[cfg(test)]
pub(crate) use resolve::final_url;
#[cfg(test)]
pub(crate) use trim::apply as apply_trim;
