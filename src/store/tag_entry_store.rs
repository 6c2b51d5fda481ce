#![forbid(unsafe_code)]

//! Ordered collection of tag entries with fuzzy lookup
//!
//! Entries keep insertion order until an explicit sort is requested. Sorts are
//! stable, so entries comparing equal keep their relative order.

use super::edit_distance::edit_distance;
use super::tag_entry::TagEntry;
use crate::error::StoreError;
use std::slice;

/// The in-memory tag list loaded from (and saved to) the tag file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEntryStore {
    entries: Vec<TagEntry>,
}

impl TagEntryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        TagEntryStore {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the end of the sequence
    pub fn push(&mut self, entry: TagEntry) {
        self.entries.push(entry);
    }

    /// Returns the entry whose tag is closest to `tag` by edit distance
    ///
    /// Entries are scanned in order and a candidate only replaces the current
    /// best when its distance is strictly smaller, so the earliest entry wins
    /// ties.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyStore`] if the store has no entries.
    pub fn lookup(&self, tag: &str) -> Result<&TagEntry, StoreError> {
        let mut best: Option<(&TagEntry, usize)> = None;

        for entry in &self.entries {
            let distance = edit_distance(tag, entry.tag());
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((entry, distance)),
            }
        }

        let (entry, distance) = best.ok_or(StoreError::EmptyStore)?;
        tracing::debug!(query = tag, matched = entry.tag(), distance, "tag lookup");
        Ok(entry)
    }

    /// Returns the first entry whose tag equals `tag` exactly
    pub fn find_exact(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.iter().find(|entry| entry.tag() == tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in current order
    pub fn iter(&self) -> slice::Iter<'_, TagEntry> {
        self.entries.iter()
    }

    /// Stable byte-wise sort by tag
    pub fn sort_by_tag(&mut self) {
        self.entries.sort_by(|a, b| a.tag().cmp(b.tag()));
    }

    /// Stable byte-wise sort by directory
    pub fn sort_by_directory(&mut self) {
        self.entries.sort_by(|a, b| a.directory().cmp(b.directory()));
    }

    /// Byte length of the longest tag, or `None` for an empty store
    pub fn max_tag_length(&self) -> Option<usize> {
        self.entries.iter().map(|entry| entry.tag().len()).max()
    }

    /// Produces a store where every entry tagged exactly `tag` points at
    /// `directory`
    ///
    /// If no entry carries the tag, `(tag, directory)` is appended instead.
    /// The returned flag tells whether an existing entry was rewritten.
    pub fn with_directory_for(self, tag: &str, directory: &str) -> (TagEntryStore, bool) {
        let found = self.find_exact(tag).is_some();
        let mut entries: Vec<TagEntry> = self
            .entries
            .into_iter()
            .map(|entry| {
                if entry.tag() == tag {
                    entry.with_directory(directory)
                } else {
                    entry
                }
            })
            .collect();

        if !found {
            entries.push(TagEntry::new(tag, directory));
        }

        (TagEntryStore { entries }, found)
    }
}

impl<'a> IntoIterator for &'a TagEntryStore {
    type Item = &'a TagEntry;
    type IntoIter = slice::Iter<'a, TagEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TagEntry> for TagEntryStore {
    fn from_iter<I: IntoIterator<Item = TagEntry>>(iter: I) -> Self {
        TagEntryStore {
            entries: iter.into_iter().collect(),
        }
    }
}
