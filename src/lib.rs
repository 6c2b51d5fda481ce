#![forbid(unsafe_code)]

//! dirtag: bookmark directories under short tags
//!
//! Tags and directories live in a plain-text file (`~/.dt/tags`). The `dt`
//! binary resolves a possibly misspelled tag to the closest stored tag by edit
//! distance and tells a wrapping shell function which directory to `cd` into.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod paths;
pub mod store;
