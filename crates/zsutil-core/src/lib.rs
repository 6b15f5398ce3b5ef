//! Helper routines for the zsync file synchronization tool: string
//! normalization, path and URL classification, byte codecs, and thin
//! wrappers over local file metadata and HTTP redirect probing.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod codec;
pub mod error;
pub mod metadata;
pub mod path;
pub mod redirect;
pub mod split;
pub mod text;
pub mod trim;
pub mod url_class;

pub use error::ZsError;
