#![forbid(unsafe_code)]

//! A single tag → directory bookmark

use serde::{Deserialize, Serialize};

/// An immutable (tag, directory) pair
///
/// Both fields are stored verbatim. The directory may start with `~` and may
/// contain whitespace; the tag is whitespace-free by contract. There is no
/// intrinsic ordering: the store sorts with explicit comparators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    tag: String,
    directory: String,
}

impl TagEntry {
    pub fn new(tag: impl Into<String>, directory: impl Into<String>) -> Self {
        TagEntry {
            tag: tag.into(),
            directory: directory.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Returns a copy of this entry pointing at `directory`
    pub fn with_directory(self, directory: impl Into<String>) -> Self {
        TagEntry {
            tag: self.tag,
            directory: directory.into(),
        }
    }
}
