//! Local file metadata used to compare a local copy against a remote one.
//!
//! The rest of the crate talks to [`MetadataProvider`] so it can be tested
//! with fakes; [`FsMetadata`] is the real thing.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::ZsError;

/// Source of modification times and permission bits for local paths.
pub trait MetadataProvider {
    /// Modification time in whole seconds since the Unix epoch.
    fn mtime(&self, path: &Path) -> io::Result<i64>;

    /// Full mode bits (file type and permissions), as `st_mode`.
    fn permissions(&self, path: &Path) -> io::Result<u32>;

    /// True if `path` is a regular file that can be opened for reading.
    fn is_file(&self, path: &Path) -> bool;
}

/// [`MetadataProvider`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMetadata;

impl MetadataProvider for FsMetadata {
    #[cfg(unix)]
    fn mtime(&self, path: &Path) -> io::Result<i64> {
        use std::os::unix::fs::MetadataExt;
        Ok(fs::metadata(path)?.mtime())
    }

    #[cfg(not(unix))]
    fn mtime(&self, path: &Path) -> io::Result<i64> {
        let modified = fs::metadata(path)?.modified()?;
        let secs = match modified.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        Ok(secs)
    }

    #[cfg(unix)]
    fn permissions(&self, path: &Path) -> io::Result<u32> {
        use std::os::unix::fs::MetadataExt;
        Ok(fs::metadata(path)?.mode())
    }

    #[cfg(not(unix))]
    fn permissions(&self, path: &Path) -> io::Result<u32> {
        let meta = fs::metadata(path)?;
        Ok(if meta.permissions().readonly() { 0o444 } else { 0o644 })
    }

    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_file()).unwrap_or(false) && File::open(path).is_ok()
    }
}

/// Local file state gathered in one go, for display or comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub mtime: i64,
    pub mode: u32,
}

impl FileStat {
    /// Permission bits only (`mode & 0o7777`).
    pub fn permission_bits(&self) -> u32 {
        self.mode & 0o7777
    }
}

/// Reads mtime and mode through `provider`, attaching the path to any error.
pub fn stat<P: MetadataProvider + ?Sized>(provider: &P, path: &Path) -> Result<FileStat, ZsError> {
    let wrap = |source: io::Error| {
        tracing::debug!(path = %path.display(), error = %source, "metadata lookup failed");
        ZsError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    };
    let mtime = provider.mtime(path).map_err(wrap)?;
    let mode = provider.permissions(path).map_err(wrap)?;
    Ok(FileStat { mtime, mode })
}

/// True if the local file at `path` is at least as new as `remote_mtime`.
///
/// A missing or unreadable local file is never up to date.
pub fn is_up_to_date<P: MetadataProvider + ?Sized>(provider: &P, path: &Path, remote_mtime: i64) -> bool {
    match provider.mtime(path) {
        Ok(local) => local >= remote_mtime,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct Fake {
        mtime: Option<i64>,
        mode: u32,
    }

    impl MetadataProvider for Fake {
        fn mtime(&self, _path: &Path) -> io::Result<i64> {
            self.mtime
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn permissions(&self, _path: &Path) -> io::Result<u32> {
            Ok(self.mode)
        }

        fn is_file(&self, _path: &Path) -> bool {
            self.mtime.is_some()
        }
    }

    #[test]
    fn stat_with_fake() {
        let fake = Fake {
            mtime: Some(1_700_000_000),
            mode: 0o100755,
        };
        let st = stat(&fake, Path::new("app.AppImage")).unwrap();
        assert_eq!(st.mtime, 1_700_000_000);
        assert_eq!(st.permission_bits(), 0o755);
    }

    #[test]
    fn stat_error_carries_path() {
        let fake = Fake { mtime: None, mode: 0 };
        match stat(&fake, Path::new("missing")) {
            Err(ZsError::Metadata { path, source }) => {
                assert_eq!(path, Path::new("missing"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Metadata error, got {other:?}"),
        }
    }

    #[test]
    fn up_to_date_compares_mtime() {
        let fake = Fake {
            mtime: Some(100),
            mode: 0,
        };
        assert!(is_up_to_date(&fake, Path::new("x"), 100));
        assert!(is_up_to_date(&fake, Path::new("x"), 99));
        assert!(!is_up_to_date(&fake, Path::new("x"), 101));
        let missing = Fake { mtime: None, mode: 0 };
        assert!(!is_up_to_date(&missing, Path::new("x"), 0));
    }

    #[test]
    fn fs_metadata_reads_real_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"data").unwrap();
        f.flush().unwrap();
        let fs = FsMetadata;
        assert!(fs.mtime(f.path()).unwrap() > 0);
        assert!(fs.is_file(f.path()));
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(f.path(), std::fs::Permissions::from_mode(0o640)).unwrap();
            let st = stat(&fs, f.path()).unwrap();
            assert_eq!(st.permission_bits(), 0o640);
        }
    }

    #[test]
    fn fs_metadata_missing_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let fs = FsMetadata;
        assert_eq!(fs.mtime(&missing).unwrap_err().kind(), io::ErrorKind::NotFound);
        assert!(fs.permissions(&missing).is_err());
        assert!(!fs.is_file(&missing));
        assert!(!fs.is_file(dir.path()));
    }
}
