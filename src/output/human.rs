#![forbid(unsafe_code)]

//! Human-readable tag listings with optional colorization

use crate::store::{TagEntry, TagEntryStore};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Which columns a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One tag per line
    TagsOnly,
    /// Tags padded to a common width, then the directory
    TagsAndDirectories,
}

/// Human-readable listing formatter
///
/// Tags are left-aligned to the longest tag in the store, followed by a single
/// space and the directory exactly as stored (no tilde expansion).
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the listing, coloring tags if the writer supports it
    pub fn write_to<W: WriteColor>(
        &self,
        out: &mut W,
        store: &TagEntryStore,
        style: ListStyle,
    ) -> io::Result<()> {
        let width = store.max_tag_length().unwrap_or(0);
        let mut tag_color = ColorSpec::new();
        tag_color.set_fg(Some(Color::Cyan)).set_bold(true);

        for entry in store {
            out.set_color(&tag_color)?;
            write!(out, "{}", entry.tag())?;
            out.reset()?;

            if style == ListStyle::TagsAndDirectories {
                write!(out, "{} {}", padding(entry, width), entry.directory())?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

// Width is measured in bytes, same as max_tag_length
fn padding(entry: &TagEntry, width: usize) -> String {
    " ".repeat(width.saturating_sub(entry.tag().len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    fn sample_store() -> TagEntryStore {
        vec![
            TagEntry::new("w", "/home/u/work"),
            TagEntry::new("music", "~/My Music"),
            TagEntry::new("src", "/usr/src"),
        ]
        .into_iter()
        .collect()
    }

    fn render(store: &TagEntryStore, style: ListStyle) -> String {
        let mut out = NoColor::new(Vec::new());
        HumanFormatter::new().write_to(&mut out, store, style).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_tags_and_directories_aligned() {
        let output = render(&sample_store(), ListStyle::TagsAndDirectories);
        assert_eq!(
            output,
            "w     /home/u/work\nmusic ~/My Music\nsrc   /usr/src\n"
        );
    }

    #[test]
    fn test_tags_only() {
        let output = render(&sample_store(), ListStyle::TagsOnly);
        assert_eq!(output, "w\nmusic\nsrc\n");
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let output = render(&TagEntryStore::new(), ListStyle::TagsAndDirectories);
        assert_eq!(output, "");
    }

    #[test]
    fn test_write_to_with_color_emits_escapes() {
        let mut out = Ansi::new(Vec::new());
        HumanFormatter::new()
            .write_to(&mut out, &sample_store(), ListStyle::TagsOnly)
            .unwrap();

        let written = String::from_utf8(out.into_inner()).unwrap();
        assert!(written.contains("\x1b["), "expected ANSI escapes: {:?}", written);
        assert!(written.contains("music"));
    }
}
