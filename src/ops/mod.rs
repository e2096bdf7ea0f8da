//! Guard-checked filesystem operations.
//!
//! Each operation sanitizes its inputs, runs its precondition chain and then
//! performs one mutation. A violated precondition returns an error before any
//! side effect. Batch operations (`copy_all_files`, `remove_all_and_directory`,
//! `rename_all_sequential`) keep going past per-entry failures and report the
//! count once at the end.
//!
//! Checks and actions are not atomic: another process can change the tree
//! between a probe and the call that follows it.

pub mod copy;
pub mod create;
pub mod remove;
pub mod rename;
pub mod service;

use std::path::PathBuf;

use crate::error::Result;
use crate::fs::naming::validate_component;
use crate::fs::sanitize::{sanitize_dir, sanitize_new_filename};
use crate::fs::CasingPolicy;

pub use copy::{copy_all_files, copy_file, copy_file_content};
pub use create::{create_directory, create_file, create_sequence, DEFAULT_DIR_MODE};
pub use remove::{remove_all_and_directory, remove_directory, remove_file};
pub use rename::{rename, rename_all_sequential};
pub use service::FileOps;

/// Split a raw path string at its last `/` into directory part and final component.
fn split_raw(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, path),
    }
}

/// Sanitize the directory part of a raw path.
///
/// No directory part means the current directory; an empty one means `/`.
fn resolve_dir_part(dir: Option<&str>) -> Result<PathBuf> {
    match dir {
        None => Ok(PathBuf::from(".")),
        Some("") => Ok(PathBuf::from("/")),
        Some(dir) => Ok(PathBuf::from(sanitize_dir(dir)?)),
    }
}

/// Resolve a path naming an entry that should already exist.
///
/// The directory part is sanitized; the name is validated but kept verbatim.
fn resolve_existing(path: &str) -> Result<(PathBuf, String)> {
    let (dir, name) = split_raw(path);
    let name = validate_component(name)?.to_string();
    Ok((resolve_dir_part(dir)?, name))
}

/// Resolve a path naming a file about to be created.
///
/// Both the directory part and the name are sanitized.
fn resolve_new(path: &str, policy: CasingPolicy) -> Result<(PathBuf, String)> {
    let (dir, name) = split_raw(path);
    let name = sanitize_new_filename(name, policy)?;
    Ok((resolve_dir_part(dir)?, name))
}
