//! Existence and permission probes.
//!
//! Every probe is a point-in-time check. Nothing here holds a lock, so the
//! filesystem can change between a probe and the operation that follows it.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Whether `path` can be opened for reading (listed, for directories).
pub fn is_readable(path: &Path) -> bool {
    let readable = if path.is_dir() {
        std::fs::read_dir(path).is_ok()
    } else {
        File::open(path).is_ok()
    };
    tracing::debug!("readable({}) = {}", path.display(), readable);
    readable
}

/// Whether `path` exists and carries write permission.
pub fn is_writable(path: &Path) -> bool {
    let writable = std::fs::metadata(path)
        .map(|metadata| !metadata.permissions().readonly())
        .unwrap_or(false);
    tracing::debug!("writable({}) = {}", path.display(), writable);
    writable
}

/// Whether the directory at `path` has no entries besides `.` and `..`.
pub fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = std::fs::read_dir(path)?;
    Ok(entries.next().is_none())
}

/// Require `path` to be an existing directory.
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Require `path` to be readable.
pub fn require_readable(path: &Path) -> Result<()> {
    if !is_readable(path) {
        return Err(Error::NotReadable(path.to_path_buf()));
    }
    Ok(())
}

/// Require `path` to be writable.
pub fn require_writable(path: &Path) -> Result<()> {
    if !is_writable(path) {
        return Err(Error::NotWritable(path.to_path_buf()));
    }
    Ok(())
}

/// Require `path` to be an existing, readable and writable directory.
pub fn require_usable_dir(path: &Path) -> Result<()> {
    require_dir(path)?;
    require_readable(path)?;
    require_writable(path)
}

/// Parent directory of `path`, with `.` standing in for a bare name.
pub fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probes_on_existing_entries() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        std::fs::write(&file, b"x").unwrap();

        assert!(is_readable(tmp.path()));
        assert!(is_writable(tmp.path()));
        assert!(is_readable(&file));
        assert!(is_writable(&file));
    }

    #[test]
    fn test_probes_on_missing_entries() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        assert!(!is_readable(&missing));
        assert!(!is_writable(&missing));
        assert!(matches!(require_dir(&missing), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_readonly_file_is_not_writable() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("locked.txt");
        std::fs::write(&file, b"x").unwrap();

        let mut perms = std::fs::metadata(&file).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&file, perms).unwrap();

        assert!(matches!(require_writable(&file), Err(Error::NotWritable(_))));
    }

    #[test]
    fn test_is_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(is_empty_dir(tmp.path()).unwrap());
        std::fs::write(tmp.path().join("f"), b"").unwrap();
        assert!(!is_empty_dir(tmp.path()).unwrap());
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of(Path::new("a/b")), PathBuf::from("a"));
        assert_eq!(parent_of(Path::new("b")), PathBuf::from("."));
    }
}
