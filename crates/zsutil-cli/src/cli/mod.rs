//! CLI for the zsutil helper library.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use zsutil_core::config::{self, ZsConfig};

use commands::{
    run_absolute, run_b64decode, run_checksum, run_hex, run_prefix, run_resolve, run_split,
    run_stat, run_trim,
};

/// Top-level CLI for zsutil.
#[derive(Debug, Parser)]
#[command(name = "zsutil")]
#[command(about = "zsutil: string, URL and byte helpers for zsync", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/zsutil/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which side(s) `trim` removes whitespace from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrimSide {
    Leading,
    Trailing,
    /// Both sides; "changed" only if both sides were trimmed.
    Both,
    /// Both sides; "changed" if either side was trimmed.
    Any,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Trim whitespace and report whether the text changed.
    Trim {
        text: String,
        #[arg(long, value_enum, default_value = "both")]
        side: TrimSide,
    },

    /// Print the alphanumeric prefix of the last path segment.
    Prefix { path: String },

    /// Report whether a URL is absolute (has a scheme).
    Absolute { url: String },

    /// Decode base64 and print the bytes as hex.
    B64decode {
        input: String,
        /// Fail on any character outside the base64 alphabet.
        #[arg(long)]
        strict: bool,
    },

    /// Hex-encode text, or a file's bytes with --file.
    Hex {
        input: String,
        /// Treat INPUT as a path and encode the file contents.
        #[arg(long)]
        file: bool,
    },

    /// Split text on a delimiter, one field per line.
    Split {
        text: String,
        #[arg(long, short, default_value = ",")]
        delim: char,
    },

    /// Show mtime and permission bits of a local file.
    Stat {
        path: PathBuf,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Also report whether the file is at least as new as this mtime (seconds since epoch).
        #[arg(long, value_name = "SECS", allow_hyphen_values = true)]
        remote_mtime: Option<i64>,
    },

    /// Follow redirects with HTTP HEAD and print the final URL.
    Resolve { url: String },

    /// Compute SHA-256 of a file.
    Checksum {
        path: PathBuf,
        /// Fail unless the digest equals this hex value.
        #[arg(long, value_name = "HEX")]
        expect: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<ZsConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        run(Cli::parse()).await
    }
}

/// Runs a parsed command. Only commands with tunable behavior read the config,
/// so the pure text commands never touch (or create) the config file.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Trim { text, side } => run_trim(text, side),
        CliCommand::Prefix { path } => run_prefix(&path),
        CliCommand::Absolute { url } => run_absolute(&url),
        CliCommand::B64decode { input, strict } => {
            let cfg = load_config(cli.config.as_ref())?;
            run_b64decode(&input, strict, cfg.base64_mode)?
        }
        CliCommand::Hex { input, file } => run_hex(&input, file)?,
        CliCommand::Split { text, delim } => run_split(&text, delim),
        CliCommand::Stat {
            path,
            json,
            remote_mtime,
        } => run_stat(&path, json, remote_mtime)?,
        CliCommand::Resolve { url } => {
            let cfg = load_config(cli.config.as_ref())?;
            run_resolve(&url, &cfg).await?
        }
        CliCommand::Checksum { path, expect } => run_checksum(&path, expect.as_deref())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
