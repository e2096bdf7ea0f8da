//! File and directory removal.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::fs::access::{
    is_empty_dir, is_writable, parent_of, require_dir, require_readable, require_usable_dir,
    require_writable,
};
use crate::fs::sanitize::sanitize_dir;
use crate::ops::resolve_existing;

/// Remove an empty directory.
///
/// The parent must be readable and writable; a directory with any entry is
/// reported as `NotEmpty` and left alone.
pub fn remove_directory(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(sanitize_dir(path)?);

    require_dir(&dir)?;
    let parent = parent_of(&dir);
    require_readable(&parent)?;
    require_writable(&parent)?;

    if !is_empty_dir(&dir)? {
        return Err(Error::NotEmpty(dir));
    }

    std::fs::remove_dir(&dir).map_err(|e| Error::op("remove directory", &dir, e))?;

    tracing::info!("Removed directory {}", dir.display());
    Ok(dir)
}

/// Remove a single regular file.
pub fn remove_file(path: &str) -> Result<PathBuf> {
    let (dir, name) = resolve_existing(path)?;

    require_usable_dir(&dir)?;

    let target = dir.join(name);
    if !target.exists() {
        return Err(Error::NotFound(target));
    }
    if !target.is_file() {
        return Err(Error::InvalidInput(format!(
            "{} is not a regular file",
            target.display()
        )));
    }
    require_writable(&target)?;

    std::fs::remove_file(&target).map_err(|e| Error::op("remove file", &target, e))?;

    tracing::info!("Removed file {}", target.display());
    Ok(target)
}

/// Remove every regular file in a directory, then the directory itself.
///
/// Unwritable files are counted rather than aborting the pass. The directory is
/// only removed when the pass had no failures, and still has to be empty then
/// (subdirectories are not descended into). Returns the number of files removed.
pub fn remove_all_and_directory(path: &str) -> Result<usize> {
    let dir_str = sanitize_dir(path)?;
    let dir = PathBuf::from(&dir_str);

    require_usable_dir(&dir)?;
    require_usable_dir(&parent_of(&dir))?;

    let mut removed = 0;
    let mut failed = 0;

    for entry in std::fs::read_dir(&dir)? {
        let file = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::warn!("Failed to read entry of {}: {}", dir.display(), e);
                failed += 1;
                continue;
            }
        };

        if !file.is_file() {
            continue;
        }

        if !is_writable(&file) {
            tracing::warn!("Cannot remove unwritable {}", file.display());
            failed += 1;
            continue;
        }

        match std::fs::remove_file(&file) {
            Ok(()) => {
                tracing::debug!("Removed {}", file.display());
                removed += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Error::BatchFailed {
            failed,
            action: "removed",
        });
    }

    remove_directory(&dir_str)?;
    Ok(removed)
}
