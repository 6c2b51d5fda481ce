#![forbid(unsafe_code)]

//! Home directory, tag file location, and tilde expansion

use crate::error::{DtError, StoreError};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Directory under `$HOME` holding dt's files
pub const DT_DIR_NAME: &str = ".dt";

/// Tag file name inside [`DT_DIR_NAME`]
pub const TAG_FILE_NAME: &str = "tags";

/// Config file name inside [`DT_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the current user's home directory
pub fn home_dir() -> Result<PathBuf, DtError> {
    dirs::home_dir().ok_or(DtError::NoHomeDirectory)
}

/// `~/.dt/tags`
pub fn default_tag_file(home: &Path) -> PathBuf {
    home.join(DT_DIR_NAME).join(TAG_FILE_NAME)
}

/// `~/.dt/config.toml`
pub fn default_config_file(home: &Path) -> PathBuf {
    home.join(DT_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Creates the tag file (and its parent directory) if it does not exist yet
///
/// An existing file is left untouched. New files are private to the user on
/// unix.
pub fn ensure_tag_file(path: &Path) -> Result<(), StoreError> {
    let io_error = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path).map_err(io_error)?;

    Ok(())
}

/// Replaces a leading `~` with the home directory
///
/// The `~` is substituted textually, so `~/src` becomes `<home>/src`.
pub fn expand_tilde(directory: &str, home: &Path) -> String {
    match directory.strip_prefix('~') {
        Some(rest) => format!("{}{}", home.display(), rest),
        None => directory.to_string(),
    }
}
