#![forbid(unsafe_code)]

//! Reading and writing the tag file
//!
//! Loading is tolerant: a missing or unreadable file yields an empty store so
//! a first run can bootstrap. Saving writes a private temp file next to the
//! real tag file and renames it into place, so a failed write never truncates
//! the existing tag file. A symlinked tag file is written through, and the
//! target's permissions carry over to the new contents.

use super::codec::{decode, encode};
use super::tag_entry_store::TagEntryStore;
use crate::error::StoreError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Loads the store from `path`, falling back to an empty store on failure
pub fn load(path: &Path) -> TagEntryStore {
    match fs::read(path) {
        Ok(bytes) => {
            let store = decode(&String::from_utf8_lossy(&bytes));
            tracing::debug!(path = %path.display(), entries = store.len(), "loaded tag file");
            store
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "tag file not found, starting empty");
            TagEntryStore::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read tag file, starting empty");
            TagEntryStore::new()
        }
    }
}

/// Writes the store to `path`, replacing the previous contents atomically
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the temp file cannot be created, written or
/// renamed over the tag file.
pub fn save(path: &Path, store: &TagEntryStore) -> Result<(), StoreError> {
    let target = resolve_target(path);
    let io_error = |source: std::io::Error| StoreError::Io {
        path: target.clone(),
        source,
    };

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any early return removes it
    let mut temp = NamedTempFile::new_in(parent).map_err(io_error)?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_error)?;
    }

    temp.write_all(encode(store).as_bytes()).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(&target).map_err(|e| io_error(e.error))?;

    tracing::debug!(path = %target.display(), entries = store.len(), "saved tag file");
    Ok(())
}

// Follows symlinks so the rename replaces the real file, not the link
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TagEntry;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = load(&temp_dir.path().join("nope"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = load(temp_dir.path());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_lossy_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");
        fs::write(&path, b"ok /fine\nbad /\xff\xfe\n").unwrap();

        let store = load(&path);
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().next().unwrap().directory(), "/fine");
    }

    fn sample_store() -> TagEntryStore {
        vec![
            TagEntry::new("work", "/home/u/work"),
            TagEntry::new("music", "~/My Music"),
            TagEntry::new("prev", "/home/u"),
        ]
        .into_iter()
        .collect()
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");

        let store = sample_store();
        save(&path, &store).unwrap();

        assert_eq!(load(&path), store);
        assert_eq!(
            file_names(temp_dir.path()),
            vec!["tags".to_string()],
            "temp file should be renamed away"
        );
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");
        fs::write(&path, "old /old\nstale /stale\n").unwrap();

        let store: TagEntryStore = vec![TagEntry::new("new", "/new")].into_iter().collect();
        save(&path, &store).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new /new\n");
    }

    #[test]
    fn test_save_failure_leaves_target_and_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");

        // A non-empty directory cannot be replaced by a file
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "keep /me\n").unwrap();

        let result = save(&path, &sample_store());
        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(fs::read_to_string(path.join("keep")).unwrap(), "keep /me\n");
        assert_eq!(file_names(temp_dir.path()), vec!["tags".to_string()]);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("tags");

        let result = save(&path, &TagEntryStore::new());
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_private_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");
        crate::paths::ensure_tag_file(&path).unwrap();

        save(&path, &sample_store()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");
        fs::write(&path, "old /old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        save(&path, &sample_store()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_new_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags");

        save(&path, &sample_store()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_writes_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real_tags");
        let link = temp_dir.path().join("tags");
        fs::write(&real, "a /a\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let store: TagEntryStore = vec![TagEntry::new("prev", "/x")].into_iter().collect();
        save(&link, &store).unwrap();

        assert!(
            fs::symlink_metadata(&link).unwrap().file_type().is_symlink(),
            "link should survive the save"
        );
        assert_eq!(fs::read_to_string(&real).unwrap(), "prev /x\n");
        assert_eq!(load(&link), store);
    }
}
