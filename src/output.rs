//! Output formatting: shell replies, human listings, and JSONL

pub mod human;
pub mod jsonl;
pub mod shell;

pub use human::{HumanFormatter, ListStyle};
pub use jsonl::JsonlFormatter;
pub use shell::ShellReply;
