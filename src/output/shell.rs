#![forbid(unsafe_code)]

//! Replies read by the `dt` shell wrapper
//!
//! Every reply starts with a descriptor line telling the wrapper what to do
//! with the rest of stdout:
//!
//! - `switch_directory` followed by the target path (no trailing newline)
//! - `show_tag_entry_list` followed by the listing
//! - `message` followed by text to show the user

use super::human::{HumanFormatter, ListStyle};
use crate::store::TagEntryStore;
use std::io::{self, Write};
use termcolor::{NoColor, WriteColor};

pub const SWITCH_DIRECTORY: &str = "switch_directory";
pub const SHOW_TAG_ENTRY_LIST: &str = "show_tag_entry_list";
pub const MESSAGE: &str = "message";

/// What a single `dt` invocation prints to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    /// Ask the wrapper to `cd` into this path
    SwitchDirectory(String),
    /// Show the entries of a (possibly sorted) store
    TagList {
        entries: TagEntryStore,
        style: ListStyle,
    },
    /// Raw JSON lines, printed without a descriptor
    Jsonl(String),
    /// Show a message to the user
    Message(String),
    /// Print nothing
    Silent,
}

impl ShellReply {
    pub fn message(text: impl Into<String>) -> Self {
        ShellReply::Message(text.into())
    }

    /// Writes the reply, coloring listings if `out` supports it
    pub fn write_to<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        match self {
            ShellReply::SwitchDirectory(path) => {
                write!(out, "{}\n{}", SWITCH_DIRECTORY, path)?;
            }
            ShellReply::TagList { entries, style } => {
                writeln!(out, "{}", SHOW_TAG_ENTRY_LIST)?;
                HumanFormatter::new().write_to(out, entries, *style)?;
            }
            ShellReply::Jsonl(lines) => {
                write!(out, "{}", lines)?;
            }
            ShellReply::Message(text) => {
                writeln!(out, "{}\n{}", MESSAGE, text)?;
            }
            ShellReply::Silent => {}
        }
        out.flush()
    }

    /// Renders the reply as plain text
    pub fn render(&self) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }
}
