//! Renaming of single entries and whole directories.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::access::{is_readable, is_writable, require_readable, require_usable_dir, require_writable};
use crate::fs::naming::{numbered_name, split_extension};
use crate::fs::sanitize::{sanitize_dir, sanitize_new_filename};
use crate::fs::CasingPolicy;
use crate::ops::{resolve_existing, resolve_new, split_raw};

/// Work out where `new_path` points.
///
/// A final component without an extension names a directory and the whole
/// path is sanitized as one; otherwise the component is a filename sanitized
/// under `policy` and joined to the sanitized parent.
fn rename_target(new_path: &str, policy: CasingPolicy) -> Result<PathBuf> {
    let (_, name) = split_raw(new_path);
    if name.contains('.') {
        let (dir, name) = resolve_new(new_path, policy)?;
        Ok(dir.join(name))
    } else {
        Ok(PathBuf::from(sanitize_dir(new_path)?))
    }
}

/// Rename a file or directory. Refuses to replace an existing target.
///
/// Trailing slashes on `old_path` are ignored, so `dir/` names `dir`.
pub fn rename(old_path: &str, new_path: &str, policy: CasingPolicy) -> Result<PathBuf> {
    let (old_dir, old_name) = resolve_existing(old_path.trim_end_matches('/'))?;
    let target = rename_target(new_path, policy)?;

    require_usable_dir(&old_dir)?;
    let source = old_dir.join(old_name);
    if !source.exists() {
        return Err(Error::NotFound(source));
    }
    require_readable(&source)?;
    require_writable(&source)?;

    if target.exists() {
        return Err(Error::op(
            "rename",
            &source,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", target.display()),
            ),
        ));
    }

    std::fs::rename(&source, &target).map_err(|e| Error::op("rename", &source, e))?;

    tracing::info!("Renamed {} to {}", source.display(), target.display());
    Ok(target)
}

/// Rename every entry of `dir` to `stem_n.ext`, with `n` counting from 1.
///
/// `base_name` is sanitized once under `policy` to get the stem and extension.
/// Entries come in the order the filesystem lists them. Every entry takes a
/// number, including ones that fail their checks, so numbering has gaps where
/// entries were skipped. Returns the new paths.
pub fn rename_all_sequential(dir: &str, base_name: &str, policy: CasingPolicy) -> Result<Vec<PathBuf>> {
    let dir = PathBuf::from(sanitize_dir(dir)?);
    let name = sanitize_new_filename(base_name, policy)?;
    let (stem, ext) = split_extension(&name);

    require_usable_dir(&dir)?;

    let mut entries = Vec::new();
    let mut unlisted = 0;
    for entry in std::fs::read_dir(&dir)? {
        match entry {
            Ok(entry) => entries.push(entry.path()),
            Err(e) => {
                tracing::warn!("Failed to read entry of {}: {}", dir.display(), e);
                unlisted += 1;
            }
        }
    }

    let (renamed, failed) = rename_in_order(&dir, &entries, stem, ext);
    let failed = failed + unlisted;

    tracing::info!(
        "Renamed {} entries in {} ({} failed)",
        renamed.len(),
        dir.display(),
        failed
    );

    if failed > 0 {
        return Err(Error::BatchFailed {
            failed,
            action: "renamed",
        });
    }

    Ok(renamed)
}

/// Rename `entries` in the given order; returns new paths and the failure count.
fn rename_in_order(
    dir: &Path,
    entries: &[PathBuf],
    stem: &str,
    ext: Option<&str>,
) -> (Vec<PathBuf>, usize) {
    let mut renamed = Vec::with_capacity(entries.len());
    let mut failed = 0;

    for (n, entry) in (1u64..).zip(entries) {
        if !is_readable(entry) || !is_writable(entry) {
            tracing::warn!("Skipping {} (#{}): not accessible", entry.display(), n);
            failed += 1;
            continue;
        }

        let target = dir.join(numbered_name(stem, ext, n));
        if target == *entry {
            renamed.push(target);
            continue;
        }
        if target.exists() {
            tracing::warn!("Skipping {}: {} already exists", entry.display(), target.display());
            failed += 1;
            continue;
        }

        match std::fs::rename(entry, &target) {
            Ok(()) => {
                tracing::debug!("Renamed {} to {}", entry.display(), target.display());
                renamed.push(target);
            }
            Err(e) => {
                tracing::warn!("Failed to rename {}: {}", entry.display(), e);
                failed += 1;
            }
        }
    }

    (renamed, failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    fn names_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rename_file_with_policy() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("draft_v1.txt");
        std::fs::write(&old, b"x").unwrap();
        let new = tmp.path().join("final report.TXT");

        let target = rename(&path_str(&old), &path_str(&new), CasingPolicy::Pascal).unwrap();
        assert_eq!(target, tmp.path().join("FinalReport.txt"));
        assert!(target.is_file());
        assert!(!old.exists());
    }

    #[test]
    fn test_rename_directory_target() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("old");
        std::fs::create_dir(&old).unwrap();

        let target = rename(&path_str(&old), &path_str(&tmp.path().join("new dir")), CasingPolicy::None)
            .unwrap();
        assert_eq!(target, tmp.path().join("newdir"));
        assert!(target.is_dir());
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("a.txt");
        let new = tmp.path().join("b.txt");
        std::fs::write(&old, b"a").unwrap();
        std::fs::write(&new, b"b").unwrap();

        let err = rename(&path_str(&old), &path_str(&new), CasingPolicy::None).unwrap_err();
        assert!(matches!(err, Error::OperationFailed { action: "rename", .. }));
        assert_eq!(std::fs::read(&new).unwrap(), b"b");
    }

    #[test]
    fn test_rename_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = rename(
            &path_str(&tmp.path().join("ghost.txt")),
            &path_str(&tmp.path().join("b.txt")),
            CasingPolicy::None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_rename_all_sequential() {
        let tmp = TempDir::new().unwrap();
        for name in ["x", "y", "z"] {
            std::fs::write(tmp.path().join(name), b"").unwrap();
        }

        let renamed = rename_all_sequential(&path_str(tmp.path()), "Photo.JPG", CasingPolicy::Lower)
            .unwrap();
        assert_eq!(renamed.len(), 3);
        assert_eq!(names_in(tmp.path()), vec!["photo_1.jpg", "photo_2.jpg", "photo_3.jpg"]);
    }

    #[test]
    fn test_missing_entry_still_takes_a_number() {
        let tmp = TempDir::new().unwrap();
        let ghost = tmp.path().join("ghost");
        let valid = tmp.path().join("valid.txt");
        std::fs::write(&valid, b"").unwrap();

        let (renamed, failed) = rename_in_order(tmp.path(), &[ghost, valid], "item", Some("txt"));
        assert_eq!(failed, 1);
        assert_eq!(renamed, vec![tmp.path().join("item_2.txt")]);
        assert_eq!(names_in(tmp.path()), vec!["item_2.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entry_still_takes_a_number() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let sealed = tmp.path().join("sealed");
        let valid = tmp.path().join("valid.txt");
        std::fs::write(&sealed, b"").unwrap();
        std::fs::write(&valid, b"").unwrap();
        std::fs::set_permissions(&sealed, std::fs::Permissions::from_mode(0o000)).unwrap();

        let (renamed, failed) = rename_in_order(tmp.path(), &[sealed.clone(), valid], "item", Some("txt"));
        assert_eq!(failed, 1);
        assert_eq!(renamed, vec![tmp.path().join("item_2.txt")]);
        assert!(sealed.exists());
        assert!(!tmp.path().join("item_1.txt").exists());
    }

    #[test]
    fn test_rename_directory_with_trailing_slash() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("olddir");
        std::fs::create_dir(&old).unwrap();

        let target = rename(
            &format!("{}/", path_str(&old)),
            &path_str(&tmp.path().join("newdir")),
            CasingPolicy::None,
        )
        .unwrap();
        assert_eq!(target, tmp.path().join("newdir"));
        assert!(target.is_dir());
        assert!(!old.exists());
    }

    #[test]
    fn test_rename_all_sequential_reports_failures() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("only"), b"").unwrap();
        let locked = tmp.path().join("locked");
        std::fs::write(&locked, b"").unwrap();
        let mut perms = std::fs::metadata(&locked).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&locked, perms).unwrap();

        let err = rename_all_sequential(&path_str(tmp.path()), "f.dat", CasingPolicy::None).unwrap_err();
        assert!(matches!(err, Error::BatchFailed { failed: 1, action: "renamed" }));
        assert!(locked.exists());
    }
}
