#![forbid(unsafe_code)]

//! Command-line argument definitions
//!
//! The raw flags are resolved once into a [`Command`]; nothing past this
//! module looks at flag strings.

use crate::config::{ColorOption, OutputFormat as ConfigOutputFormat};
use crate::output::ListStyle;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// dt - tag directories and jump to them by (fuzzy) name
#[derive(Debug, Parser)]
#[command(name = "dt", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .multiple(false)
        .args(["tag", "list_tags", "list_all", "list_tags_sorted", "list_all_sorted", "list_by_directory", "update_prev"])
))]
pub struct Cli {
    /// Tag to jump to; the closest tag by edit distance wins
    #[arg(value_name = "TAG")]
    pub tag: Option<String>,

    /// List tags
    #[arg(short = 'l')]
    pub list_tags: bool,

    /// List tags and directories
    #[arg(short = 'L')]
    pub list_all: bool,

    /// List tags, sorted by tag
    #[arg(short = 's')]
    pub list_tags_sorted: bool,

    /// List tags and directories, sorted by tag
    #[arg(short = 'S')]
    pub list_all_sorted: bool,

    /// List tags and directories, sorted by directory
    #[arg(short = 'd')]
    pub list_by_directory: bool,

    /// Point the `prev` tag at PATH, adding it if missing
    #[arg(long = "update-prev", value_name = "PATH")]
    pub update_prev: Option<String>,

    /// Tag file to use instead of ~/.dt/tags
    #[arg(long, value_name = "PATH")]
    pub tag_file: Option<PathBuf>,

    /// Listing format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to color listings
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
}

/// Listing format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Jsonl,
}

impl From<OutputFormat> for ConfigOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => ConfigOutputFormat::Human,
            OutputFormat::Jsonl => ConfigOutputFormat::Jsonl,
        }
    }
}

/// When to color listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorOption::Auto,
            ColorChoice::Always => ColorOption::Always,
            ColorChoice::Never => ColorOption::Never,
        }
    }
}

/// Order applied to the store before listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep file order
    Unsorted,
    ByTag,
    ByDirectory,
}

/// The single operation one `dt` invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Jump to the directory tagged `prev`
    Toggle,
    /// Jump to the directory whose tag is closest to `tag`
    Switch { tag: String },
    /// Print the tag list
    List { style: ListStyle, sort: SortOrder },
    /// Record `path` as the `prev` directory
    UpdatePrev { path: String },
}

impl Cli {
    /// Resolves the parsed flags into a [`Command`]
    pub fn resolve(&self) -> Command {
        use ListStyle::{TagsAndDirectories, TagsOnly};

        let list = |style, sort| Command::List { style, sort };

        if self.list_tags {
            list(TagsOnly, SortOrder::Unsorted)
        } else if self.list_all {
            list(TagsAndDirectories, SortOrder::Unsorted)
        } else if self.list_tags_sorted {
            list(TagsOnly, SortOrder::ByTag)
        } else if self.list_all_sorted {
            list(TagsAndDirectories, SortOrder::ByTag)
        } else if self.list_by_directory {
            list(TagsAndDirectories, SortOrder::ByDirectory)
        } else if let Some(path) = &self.update_prev {
            Command::UpdatePrev { path: path.clone() }
        } else if let Some(tag) = &self.tag {
            Command::Switch { tag: tag.clone() }
        } else {
            Command::Toggle
        }
    }
}
