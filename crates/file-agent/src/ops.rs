//! Filesystem operations scoped to a working directory.
//!
//! Every operation resolves `relative_path` against `working_directory` and
//! returns a human-readable outcome. A missing target on delete is an
//! outcome, not an error; only unexpected I/O failures are returned as
//! [`io::Error`].
//!
//! These functions perform blocking I/O and take no locks. Concurrent calls
//! against the same path may race.
//!
//! Paths are joined lexically, with `.` segments dropped and `..` kept. See
//! [`crate::path`] for detecting paths that
//! escape the working directory.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Joins the paths, dropping `.` segments so the result can be removed by
/// name.
#[inline]
fn resolve(working_directory: &Path, relative_path: &str) -> PathBuf {
    working_directory.join(relative_path).components().collect()
}

/// Writes `content` to the file, replacing whatever was there.
///
/// Parent directories must already exist.
pub fn create_file(
    working_directory: impl AsRef<Path>,
    relative_path: &str,
    content: &str,
) -> io::Result<String> {
    let path = resolve(working_directory.as_ref(), relative_path);
    fs::write(&path, content)?;
    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(format!("File created or overwritten at {}", path.display()))
}

/// Appends `content` to an existing file.
///
/// The file is never created; a missing file is a [`io::ErrorKind::NotFound`]
/// error.
pub fn modify_file(
    working_directory: impl AsRef<Path>,
    relative_path: &str,
    content: &str,
) -> io::Result<String> {
    let path = resolve(working_directory.as_ref(), relative_path);
    let mut file = OpenOptions::new().append(true).open(&path)?;
    file.write_all(content.as_bytes())?;
    debug!("appended {} bytes to {}", content.len(), path.display());
    Ok(format!("Content appended to {relative_path}"))
}

/// Deletes a file if it exists.
pub fn delete_file(
    working_directory: impl AsRef<Path>,
    relative_path: &str,
) -> io::Result<String> {
    let path = resolve(working_directory.as_ref(), relative_path);
    // `symlink_metadata` so that a dangling link still counts as present.
    match fs::symlink_metadata(&path) {
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(format!("File {relative_path} does not exist."));
        }
        Err(err) => return Err(err),
    }
    fs::remove_file(&path)?;
    debug!("removed {}", path.display());
    Ok(format!("File {relative_path} deleted."))
}

/// Creates a directory along with any missing parents.
pub fn create_directory(
    working_directory: impl AsRef<Path>,
    relative_path: &str,
) -> io::Result<String> {
    let path = resolve(working_directory.as_ref(), relative_path);
    fs::create_dir_all(&path)?;
    debug!("created {}", path.display());
    Ok(format!("Directory {relative_path} created."))
}

/// Deletes a directory and everything below it.
///
/// A path that is absent, or that is not a directory, is reported as not
/// existing. Symlinks are never followed: a link to a directory is not a
/// directory here, and links found inside the tree are unlinked.
///
/// If removal fails midway, entries already removed stay removed, the rest
/// of the tree (including the directory itself) is left in place, and the
/// error is returned.
pub fn delete_directory(
    working_directory: impl AsRef<Path>,
    relative_path: &str,
) -> io::Result<String> {
    let path = resolve(working_directory.as_ref(), relative_path);
    let is_dir = match fs::symlink_metadata(&path) {
        Ok(metadata) => metadata.is_dir(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => false,
        Err(err) => return Err(err),
    };
    if !is_dir {
        return Ok(format!("Directory {relative_path} does not exist."));
    }

    let removed = remove_tree(&path)?;
    debug!("removed {} ({removed} entries)", path.display());
    Ok(format!("Directory {relative_path} deleted."))
}

/// Removes `root` and its contents in post-order, returning how many
/// entries (including `root`) were removed.
fn remove_tree(root: &Path) -> io::Result<usize> {
    let mut removed = 0;
    // Each directory is pushed twice: once to expand its children, and once
    // more (underneath them) to be removed after they are gone.
    let mut stack = vec![(root.to_path_buf(), false)];
    while let Some((dir, expanded)) = stack.pop() {
        if expanded {
            fs::remove_dir(&dir)?;
            removed += 1;
            continue;
        }

        stack.push((dir.clone(), true));
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            // `DirEntry::file_type` does not traverse symlinks.
            if entry.file_type()?.is_dir() {
                stack.push((entry.path(), false));
            } else {
                fs::remove_file(entry.path())?;
                removed += 1;
            }
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn sandbox() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_create_file_overwrites() {
        let dir = sandbox();

        let msg = create_file(dir.path(), "a.txt", "first version").unwrap();
        let expected = dir.path().join("a.txt");
        assert_eq!(
            msg,
            format!("File created or overwritten at {}", expected.display())
        );
        assert_eq!(fs::read_to_string(&expected).unwrap(), "first version");

        create_file(dir.path(), "a.txt", "v2").unwrap();
        assert_eq!(fs::read_to_string(&expected).unwrap(), "v2");
    }

    #[test]
    fn test_create_file_requires_parent() {
        let dir = sandbox();

        let err = create_file(dir.path(), "missing/a.txt", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_modify_file_appends() {
        let dir = sandbox();

        create_file(dir.path(), "a.txt", "hello").unwrap();
        let msg = modify_file(dir.path(), "a.txt", " world").unwrap();
        assert_eq!(msg, "Content appended to a.txt");
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_modify_file_requires_existing_file() {
        let dir = sandbox();

        let err = modify_file(dir.path(), "a.txt", "data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_delete_file() {
        let dir = sandbox();

        let msg = delete_file(dir.path(), "ghost.txt").unwrap();
        assert_eq!(msg, "File ghost.txt does not exist.");

        create_file(dir.path(), "a.txt", "bye").unwrap();
        let msg = delete_file(dir.path(), "a.txt").unwrap();
        assert_eq!(msg, "File a.txt deleted.");
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_delete_file_rejects_directories() {
        let dir = sandbox();

        create_directory(dir.path(), "sub").unwrap();
        assert!(delete_file(dir.path(), "sub").is_err());
        assert!(dir.path().join("sub").is_dir());
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let dir = sandbox();

        let msg = create_directory(dir.path(), "x/y/z").unwrap();
        assert_eq!(msg, "Directory x/y/z created.");
        assert!(dir.path().join("x").is_dir());
        assert!(dir.path().join("x/y").is_dir());
        assert!(dir.path().join("x/y/z").is_dir());

        create_directory(dir.path(), "x/y/z").unwrap();
        assert!(dir.path().join("x/y/z").is_dir());
    }

    #[test]
    fn test_delete_directory_recursively() {
        let dir = sandbox();

        create_directory(dir.path(), "x/y/z").unwrap();
        create_file(dir.path(), "x/y/z/file.txt", "deep").unwrap();
        create_file(dir.path(), "x/top.txt", "shallow").unwrap();
        create_directory(dir.path(), "x/empty").unwrap();

        let msg = delete_directory(dir.path(), "x").unwrap();
        assert_eq!(msg, "Directory x deleted.");
        assert!(!dir.path().join("x").exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_delete_directory_missing_or_file() {
        let dir = sandbox();

        let msg = delete_directory(dir.path(), "nope").unwrap();
        assert_eq!(msg, "Directory nope does not exist.");

        create_file(dir.path(), "plain.txt", "keep me").unwrap();
        let msg = delete_directory(dir.path(), "plain.txt").unwrap();
        assert_eq!(msg, "Directory plain.txt does not exist.");
        assert!(dir.path().join("plain.txt").is_file());
    }

    #[test]
    fn test_delete_directory_with_trailing_dot() {
        let dir = sandbox();

        create_directory(dir.path(), "x/y").unwrap();
        create_file(dir.path(), "x/keep.txt", "gone").unwrap();

        let msg = delete_directory(dir.path(), "x/.").unwrap();
        assert_eq!(msg, "Directory x/. deleted.");
        assert!(!dir.path().join("x").exists());
        assert!(dir.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_file_removes_dangling_symlink() {
        let dir = sandbox();
        std::os::unix::fs::symlink(
            dir.path().join("nowhere"),
            dir.path().join("link"),
        )
        .unwrap();

        let msg = delete_file(dir.path(), "link").unwrap();
        assert_eq!(msg, "File link deleted.");
        assert!(fs::symlink_metadata(dir.path().join("link")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_directory_does_not_follow_symlinks() {
        let dir = sandbox();
        let outside = sandbox();
        create_file(outside.path(), "precious.txt", "keep").unwrap();

        create_directory(dir.path(), "x").unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("x/link"))
            .unwrap();

        delete_directory(dir.path(), "x").unwrap();
        assert!(!dir.path().join("x").exists());
        assert!(outside.path().join("precious.txt").is_file());
    }

    #[test]
    fn test_remove_tree_counts_entries() {
        let dir = sandbox();

        create_directory(dir.path(), "t/a").unwrap();
        create_file(dir.path(), "t/a/1.txt", "").unwrap();
        create_file(dir.path(), "t/2.txt", "").unwrap();

        // t, t/a, t/a/1.txt, t/2.txt
        assert_eq!(remove_tree(&dir.path().join("t")).unwrap(), 4);
    }
}
