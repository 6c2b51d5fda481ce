#![forbid(unsafe_code)]

//! Plain-text tag file format
//!
//! One entry per line: `<tag><whitespace><directory>`. Decoding splits on the
//! first ASCII whitespace, trims ASCII whitespace off the directory, and
//! silently drops lines missing either half. Other Unicode whitespace such as
//! U+00A0 is ordinary text. Encoding writes `tag`, one space, `directory`, newline, with
//! no escaping.

use super::tag_entry::TagEntry;
use super::tag_entry_store::TagEntryStore;

/// Parses tag file contents into a store
pub fn decode(text: &str) -> TagEntryStore {
    text.lines().filter_map(decode_line).collect()
}

fn decode_line(line: &str) -> Option<TagEntry> {
    let line = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (tag, rest) = line.split_once(|c: char| c.is_ascii_whitespace())?;
    let directory = rest.trim_matches(|c: char| c.is_ascii_whitespace());

    if tag.is_empty() || directory.is_empty() {
        return None;
    }

    Some(TagEntry::new(tag, directory))
}

/// Renders a store in tag file format
pub fn encode(store: &TagEntryStore) -> String {
    let mut output = String::new();
    for entry in store {
        output.push_str(entry.tag());
        output.push(' ');
        output.push_str(entry.directory());
        output.push('\n');
    }
    output
}
