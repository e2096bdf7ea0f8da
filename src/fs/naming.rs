//! Filename generation and manipulation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::access::parent_of;

/// Split a filename at its last dot into stem and extension.
///
/// `"a.tar.gz"` gives `("a.tar", Some("gz"))`, `"report"` gives `("report", None)`.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(dot_pos) => (&name[..dot_pos], Some(&name[dot_pos + 1..])),
        None => (name, None),
    }
}

/// Join a stem and an optional extension back into a filename.
pub fn join_extension(stem: &str, ext: Option<&str>) -> String {
    match ext {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}

/// Name of the `index`-th file in a sequence.
///
/// The first file keeps the bare name; numbering starts at 1 for the second:
/// `a.txt`, `a_1.txt`, `a_2.txt`, ...
pub fn sequence_name(stem: &str, ext: Option<&str>, index: u64) -> String {
    if index == 0 {
        join_extension(stem, ext)
    } else {
        join_extension(&format!("{}_{}", stem, index), ext)
    }
}

/// Name of the `n`-th entry produced by a sequential rename (`stem_n.ext`).
pub fn numbered_name(stem: &str, ext: Option<&str>, n: u64) -> String {
    join_extension(&format!("{}_{}", stem, n), ext)
}

/// Validate the final component of a path that must refer to an existing entry.
///
/// Unlike new names, existing names are not rewritten, only checked for being a
/// single plain component.
pub fn validate_component(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(Error::InvalidInput("empty file name".to_string()));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidInput(format!(
            "'{}' is not a file name",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidInput(format!(
            "Path separators not allowed in file name: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidInput(format!(
            "Null bytes not allowed in file name: '{}'",
            name
        )));
    }

    Ok(name)
}

/// Pick the name a copy of `name` should take inside `dir`.
///
/// Returns `name` itself when free. Otherwise scans `dir` once and returns
/// `stem(i).ext` for the lowest positive `i` not already taken.
pub fn unique_copy_name(dir: &Path, name: &str) -> Result<String> {
    if !dir.join(name).exists() {
        return Ok(name.to_string());
    }

    let taken: HashSet<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    let (stem, ext) = split_extension(name);
    let mut counter: u64 = 1;
    loop {
        let candidate = join_extension(&format!("{}({})", stem, counter), ext);
        if !taken.contains(&candidate) {
            tracing::debug!("Name {} taken in {}, using {}", name, dir.display(), candidate);
            return Ok(candidate);
        }
        counter += 1;
    }
}

/// Split a path into its parent directory and final component.
///
/// A bare name has `.` as its parent.
pub fn split_parent(path: &Path) -> Option<(PathBuf, String)> {
    let name = path.file_name()?.to_str()?.to_string();
    Some((parent_of(path), name))
}
