//! Directory and file creation.

use std::fs::{DirBuilder, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::access::{require_readable, require_writable};
use crate::fs::naming::{sequence_name, split_extension};
use crate::fs::sanitize::{sanitize_dir, sanitize_new_filename};
use crate::fs::CasingPolicy;

/// Mode for directories created without an explicit one.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Create `path` and any missing ancestors with `mode` (Unix only, umask applies).
pub(crate) fn make_dirs(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)
}

/// Create an empty file, failing if anything already sits at `target`.
pub(crate) fn create_empty(target: &Path) -> Result<()> {
    if target.exists() {
        return Err(Error::AlreadyExists(target.to_path_buf()));
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                Error::AlreadyExists(target.to_path_buf())
            } else {
                Error::op("create file", target, e)
            }
        })?;

    tracing::info!("Created file {}", target.display());
    Ok(())
}

/// Make sure `dir` exists, then require it to be readable and writable.
///
/// A failed creation is only logged: the access probes that follow report it.
fn prepare_dir(dir: &Path, dir_mode: u32) -> Result<()> {
    if !dir.exists() {
        if let Err(e) = make_dirs(dir, dir_mode) {
            tracing::warn!("Could not create directory {}: {}", dir.display(), e);
        }
    }
    require_readable(dir)?;
    require_writable(dir)
}

/// Create a directory and all missing ancestors.
pub fn create_directory(path: &str, mode: u32) -> Result<PathBuf> {
    let dir = PathBuf::from(sanitize_dir(path)?);

    if dir.is_dir() {
        return Err(Error::AlreadyExists(dir));
    }

    make_dirs(&dir, mode).map_err(|e| Error::op("create directory", &dir, e))?;

    tracing::info!("Created directory {} (mode {:o})", dir.display(), mode);
    Ok(dir)
}

/// Create an empty file named `name` (sanitized under `policy`) inside `dir`.
///
/// `dir` is created with `dir_mode` when missing.
pub fn create_file(dir: &str, name: &str, policy: CasingPolicy, dir_mode: u32) -> Result<PathBuf> {
    let dir = PathBuf::from(sanitize_dir(dir)?);
    let name = sanitize_new_filename(name, policy)?;

    prepare_dir(&dir, dir_mode)?;

    let target = dir.join(name);
    create_empty(&target)?;
    Ok(target)
}

/// Create `count` empty files: `base.ext`, `base_1.ext`, ..., `base_{count-1}.ext`.
///
/// Stops at the first failure; files created before it are kept.
pub fn create_sequence(
    dir: &str,
    base_name: &str,
    policy: CasingPolicy,
    count: i64,
    dir_mode: u32,
) -> Result<Vec<PathBuf>> {
    if count <= 0 {
        return Err(Error::InvalidQuantity(count));
    }

    let dir = PathBuf::from(sanitize_dir(dir)?);
    let name = sanitize_new_filename(base_name, policy)?;
    let (stem, ext) = split_extension(&name);

    prepare_dir(&dir, dir_mode)?;

    let mut created = Vec::new();
    for index in 0..count as u64 {
        let target = dir.join(sequence_name(stem, ext, index));
        create_empty(&target)?;
        created.push(target);
    }

    tracing::info!("Created {} files in {}", created.len(), dir.display());
    Ok(created)
}
