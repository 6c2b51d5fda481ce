#![forbid(unsafe_code)]

//! Error types shared across the crate
//!
//! `StoreError` covers the tag store and its file, `ConfigError` covers the
//! optional config file, and `DtError` is what the `dt` binary bubbles up.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the tag entry store and its persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// A lookup was attempted on a store with no entries
    #[error("No entries available")]
    EmptyStore,

    /// Reading or writing the tag file failed
    #[error("Failed to access tag file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading `config.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error for the `dt` driver
#[derive(Debug, Error)]
pub enum DtError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `$HOME` could not be resolved
    #[error("Could not determine the user's home directory")]
    NoHomeDirectory,

    /// Writing the reply to stdout failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
