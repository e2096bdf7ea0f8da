//! File copying.

use std::fs::OpenOptions;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::fs::access::{is_readable, require_dir, require_readable, require_writable};
use crate::fs::naming::unique_copy_name;
use crate::fs::sanitize::sanitize_dir;
use crate::fs::CasingPolicy;
use crate::ops::create::make_dirs;
use crate::ops::{resolve_existing, resolve_new};

/// Copy one file into `destination_dir`, never overwriting.
///
/// When the name is taken the copy becomes `name(i).ext` for the lowest free `i`.
/// Returns the path of the new copy.
pub fn copy_file(origin: &str, destination_dir: &str, dir_mode: u32) -> Result<PathBuf> {
    let (origin_dir, name) = resolve_existing(origin)?;
    let destination_dir = PathBuf::from(sanitize_dir(destination_dir)?);

    require_dir(&origin_dir)?;
    let origin = origin_dir.join(&name);
    if !origin.is_file() {
        return Err(Error::NotFound(origin));
    }
    require_readable(&origin)?;
    require_writable(&origin_dir)?;

    if !destination_dir.exists() {
        make_dirs(&destination_dir, dir_mode)
            .map_err(|e| Error::op("create directory", &destination_dir, e))?;
    }
    require_writable(&destination_dir)?;

    let target = destination_dir.join(unique_copy_name(&destination_dir, &name)?);
    std::fs::copy(&origin, &target).map_err(|e| Error::op("copy", &origin, e))?;

    tracing::info!("Copied {} to {}", origin.display(), target.display());
    Ok(target)
}

/// Copy every readable regular file of `origin_dir` into `destination_dir`.
///
/// Files already present at the destination or unreadable at the origin are
/// skipped and counted; a non-zero count is reported once at the end as
/// `BatchFailed`. Returns the number of files copied otherwise.
pub fn copy_all_files(origin_dir: &str, destination_dir: &str, dir_mode: u32) -> Result<usize> {
    let origin_dir = PathBuf::from(sanitize_dir(origin_dir)?);
    let destination_dir = PathBuf::from(sanitize_dir(destination_dir)?);

    require_dir(&origin_dir)?;
    require_readable(&origin_dir)?;

    if !destination_dir.exists() {
        make_dirs(&destination_dir, dir_mode)
            .map_err(|e| Error::op("create directory", &destination_dir, e))?;
    }
    require_writable(&destination_dir)?;

    let mut copied = 0;
    let mut failed = 0;

    for entry in std::fs::read_dir(&origin_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry of {}: {}", origin_dir.display(), e);
                failed += 1;
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let target = destination_dir.join(entry.file_name());
        if target.exists() {
            tracing::warn!("Skipping {}: {} already exists", path.display(), target.display());
            failed += 1;
            continue;
        }
        if !is_readable(&path) {
            tracing::warn!("Skipping unreadable {}", path.display());
            failed += 1;
            continue;
        }

        match std::fs::copy(&path, &target) {
            Ok(_) => {
                tracing::debug!("Copied {} to {}", path.display(), target.display());
                copied += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to copy {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Copied {} files from {} to {} ({} failed)",
        copied,
        origin_dir.display(),
        destination_dir.display(),
        failed
    );

    if failed > 0 {
        return Err(Error::BatchFailed {
            failed,
            action: "copied",
        });
    }

    Ok(copied)
}

/// Overwrite the content of `dst_path` with the content of `src_path`.
///
/// The destination directory and file are created when missing. The source is
/// read whole into memory. Returns the number of bytes written.
pub fn copy_file_content(src_path: &str, dst_path: &str, dir_mode: u32) -> Result<u64> {
    let (src_dir, src_name) = resolve_existing(src_path)?;
    let (dst_dir, dst_name) = resolve_new(dst_path, CasingPolicy::None)?;

    require_dir(&src_dir)?;
    require_readable(&src_dir)?;
    let source = src_dir.join(&src_name);
    if !source.is_file() {
        return Err(Error::NotFound(source));
    }
    require_readable(&source)?;

    if !dst_dir.exists() {
        make_dirs(&dst_dir, dir_mode).map_err(|e| Error::op("create directory", &dst_dir, e))?;
    }
    let destination = dst_dir.join(&dst_name);
    if !destination.exists() {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&destination)
            .map_err(|e| Error::op("create file", &destination, e))?;
    }
    require_writable(&dst_dir)?;
    require_writable(&destination)?;

    let content = std::fs::read(&source).map_err(|e| Error::op("read", &source, e))?;
    std::fs::write(&destination, &content).map_err(|e| Error::op("write", &destination, e))?;

    tracing::info!(
        "Copied {} bytes from {} into {}",
        content.len(),
        source.display(),
        destination.display()
    );
    Ok(content.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::create::DEFAULT_DIR_MODE;
    use std::path::Path;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_copy_file_without_collision() {
        let tmp = TempDir::new().unwrap();
        let origin = tmp.path().join("report.txt");
        std::fs::write(&origin, b"data").unwrap();
        let dest = tmp.path().join("out");

        let copy = copy_file(&path_str(&origin), &path_str(&dest), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(copy, dest.join("report.txt"));
        assert_eq!(std::fs::read(&copy).unwrap(), b"data");
    }

    #[test]
    fn test_copy_file_collision_numbering() {
        let tmp = TempDir::new().unwrap();
        let origin = tmp.path().join("report.txt");
        std::fs::write(&origin, b"data").unwrap();
        let dest = tmp.path().join("out");
        std::fs::create_dir(&dest).unwrap();
        std::fs::write(dest.join("report.txt"), b"old").unwrap();

        let first = copy_file(&path_str(&origin), &path_str(&dest), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(first, dest.join("report(1).txt"));

        let second = copy_file(&path_str(&origin), &path_str(&dest), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(second, dest.join("report(2).txt"));
        assert_eq!(std::fs::read(dest.join("report.txt")).unwrap(), b"old");
    }

    #[test]
    fn test_copy_file_into_same_directory() {
        let tmp = TempDir::new().unwrap();
        let origin = tmp.path().join("photo.jpg");
        std::fs::write(&origin, b"img").unwrap();

        let copy = copy_file(&path_str(&origin), &path_str(tmp.path()), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(copy, tmp.path().join("photo(1).jpg"));
    }

    #[test]
    fn test_copy_file_missing_origin() {
        let tmp = TempDir::new().unwrap();
        let origin = tmp.path().join("ghost.txt");
        let err = copy_file(&path_str(&origin), &path_str(tmp.path()), DEFAULT_DIR_MODE).unwrap_err();
        assert!(matches!(err, Error::NotFound(p) if p == origin));

        let origin = tmp.path().join("nodir/ghost.txt");
        let err = copy_file(&path_str(&origin), &path_str(tmp.path()), DEFAULT_DIR_MODE).unwrap_err();
        assert!(matches!(err, Error::NotFound(p) if p == tmp.path().join("nodir")));
    }

    #[test]
    fn test_copy_all_files_counts_existing_targets() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        std::fs::create_dir_all(src.join("nested")).unwrap();
        std::fs::create_dir(&dst).unwrap();
        std::fs::write(src.join("a.txt"), b"a").unwrap();
        std::fs::write(src.join("b.txt"), b"b").unwrap();
        std::fs::write(src.join("c.txt"), b"c").unwrap();
        std::fs::write(dst.join("b.txt"), b"kept").unwrap();

        let err = copy_all_files(&path_str(&src), &path_str(&dst), DEFAULT_DIR_MODE).unwrap_err();
        assert!(matches!(err, Error::BatchFailed { failed: 1, .. }));
        assert_eq!(err.to_string(), "1 files cannot be copied");

        assert_eq!(std::fs::read(dst.join("a.txt")).unwrap(), b"a");
        assert_eq!(std::fs::read(dst.join("b.txt")).unwrap(), b"kept");
        assert_eq!(std::fs::read(dst.join("c.txt")).unwrap(), b"c");
        assert!(!dst.join("nested").exists());
    }

    #[test]
    fn test_copy_all_files_creates_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        std::fs::write(src.join("one"), b"1").unwrap();
        std::fs::write(src.join("two"), b"2").unwrap();
        let dst = tmp.path().join("fresh/dst");

        let copied = copy_all_files(&path_str(&src), &path_str(&dst), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(copied, 2);
        assert!(dst.join("one").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_all_files_counts_unreadable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        let sealed = src.join("sealed");
        std::fs::write(&sealed, b"s").unwrap();
        std::fs::write(src.join("open"), b"o").unwrap();
        std::fs::set_permissions(&sealed, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can open the file regardless of its mode.
        if std::fs::File::open(&sealed).is_ok() {
            return;
        }

        let dst = tmp.path().join("dst");
        let err = copy_all_files(&path_str(&src), &path_str(&dst), DEFAULT_DIR_MODE).unwrap_err();
        assert_eq!(err.to_string(), "1 files cannot be copied");
        assert!(dst.join("open").is_file());
        assert!(!dst.join("sealed").exists());
    }

    #[test]
    fn test_copy_file_content_overwrites() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dst = tmp.path().join("dst.txt");
        std::fs::write(&src, b"new content").unwrap();
        std::fs::write(&dst, b"old content that is longer").unwrap();

        let written = copy_file_content(&path_str(&src), &path_str(&dst), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(written, 11);
        assert_eq!(std::fs::read(&dst).unwrap(), b"new content");
    }

    #[test]
    fn test_copy_file_content_creates_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        std::fs::write(&src, b"hello").unwrap();
        let dst = tmp.path().join("made/here/out.txt");

        copy_file_content(&path_str(&src), &path_str(&dst), DEFAULT_DIR_MODE).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), b"hello");
    }

    #[test]
    fn test_copy_file_content_missing_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("nope.txt");
        let dst = tmp.path().join("out.txt");

        let err = copy_file_content(&path_str(&src), &path_str(&dst), DEFAULT_DIR_MODE).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(!dst.exists());
    }
}
