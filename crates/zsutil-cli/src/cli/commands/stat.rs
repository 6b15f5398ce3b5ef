//! `zsutil stat <path>` – mtime and permissions of a local file.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use zsutil_core::metadata::{self, FsMetadata, MetadataProvider};

#[derive(Debug, Serialize)]
struct StatOutput<'a> {
    path: &'a Path,
    mtime: i64,
    mode: String,
    is_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    up_to_date: Option<bool>,
}

pub fn run_stat(path: &Path, json: bool, remote_mtime: Option<i64>) -> Result<()> {
    let provider = FsMetadata;
    let st = metadata::stat(&provider, path)?;
    let out = StatOutput {
        path,
        mtime: st.mtime,
        mode: format!("{:04o}", st.permission_bits()),
        is_file: provider.is_file(path),
        up_to_date: remote_mtime.map(|r| metadata::is_up_to_date(&provider, path, r)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("path:     {}", out.path.display());
        println!("mtime:    {}", out.mtime);
        println!("mode:     {}", out.mode);
        println!("is_file:  {}", out.is_file);
        if let Some(up) = out.up_to_date {
            println!("current:  {}", up);
        }
    }
    Ok(())
}
