#![forbid(unsafe_code)]

//! Command execution for the `dt` binary
//!
//! Each invocation loads the tag file, performs one [`Command`], and produces
//! an [`Outcome`]: the reply for the shell wrapper plus the process exit code.
//! The exit codes are part of the contract with the wrapper function.

use super::args::{Cli, Command, SortOrder};
use crate::config::{ColorOption, Config, OutputFormat};
use crate::error::{DtError, StoreError};
use crate::output::{JsonlFormatter, ListStyle, ShellReply};
use crate::paths;
use crate::store::{self, TagEntryStore};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use termcolor::{ColorChoice, StandardStream};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// A directory switch or listing was produced
pub const EXIT_CD_SUCCESS: i32 = 10;
/// The command line could not be parsed
pub const EXIT_WRONG_ARGUMENTS: i32 = 12;
/// A tag lookup was attempted with an empty tag file
pub const EXIT_NO_TAGS: i32 = 13;

/// Tag that `dt` with no arguments jumps to and `--update-prev` rewrites
pub const PREV_TAG: &str = "prev";

/// Reply and exit code of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub reply: ShellReply,
    pub exit_code: i32,
}

impl Outcome {
    fn new(reply: ShellReply, exit_code: i32) -> Self {
        Outcome { reply, exit_code }
    }
}

/// Settings resolved from CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub tag_file: PathBuf,
    pub format: OutputFormat,
    pub color: ColorOption,
}

impl Settings {
    /// CLI flags win over the config file, which wins over defaults
    pub fn resolve(cli: &Cli, config: &Config, home: &Path) -> Self {
        let tag_file = match (&cli.tag_file, &config.tag_file) {
            (Some(path), _) => path.clone(),
            (None, Some(configured)) => PathBuf::from(paths::expand_tilde(configured, home)),
            (None, None) => paths::default_tag_file(home),
        };

        Settings {
            home: home.to_path_buf(),
            tag_file,
            format: cli.format.map(Into::into).unwrap_or(config.output.format),
            color: cli.color.map(Into::into).unwrap_or(config.output.color),
        }
    }

    fn color_choice(&self) -> ColorChoice {
        match self.color {
            ColorOption::Always => ColorChoice::Always,
            ColorOption::Never => ColorChoice::Never,
            ColorOption::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorOption::Auto => ColorChoice::Never,
        }
    }
}

/// Runs a parsed command line end to end and returns the exit code
///
/// # Errors
///
/// Returns an error if the home directory or config file cannot be resolved,
/// or if the reply cannot be written to stdout.
pub fn run(cli: &Cli) -> Result<i32, DtError> {
    let home = paths::home_dir()?;
    let config = Config::load(&paths::default_config_file(&home))?;
    let settings = Settings::resolve(cli, &config, &home);
    let command = cli.resolve();

    tracing::debug!(?command, tag_file = %settings.tag_file.display(), "running");

    let outcome = execute(&command, &settings)?;

    let mut stdout = StandardStream::stdout(settings.color_choice());
    outcome.reply.write_to(&mut stdout)?;

    Ok(outcome.exit_code)
}

/// Performs `command` against the tag file named in `settings`
///
/// # Errors
///
/// Returns an error only if the tag file cannot be created. Lookup and save
/// failures are reported through the returned [`Outcome`].
pub fn execute(command: &Command, settings: &Settings) -> Result<Outcome, DtError> {
    paths::ensure_tag_file(&settings.tag_file)?;
    let store = store::load(&settings.tag_file);

    let outcome = match command {
        Command::Toggle => toggle(&store, settings),
        Command::Switch { tag } => switch(&store, tag, settings),
        Command::List { style, sort } => list(store, *style, *sort, settings.format),
        Command::UpdatePrev { path } => update_prev(store, path, &settings.tag_file),
    };

    Ok(outcome)
}

fn toggle(store: &TagEntryStore, settings: &Settings) -> Outcome {
    match store.lookup(PREV_TAG) {
        Ok(entry) => Outcome::new(
            ShellReply::SwitchDirectory(paths::expand_tilde(entry.directory(), &settings.home)),
            EXIT_SUCCESS,
        ),
        Err(_) => Outcome::new(
            ShellReply::message("No 'prev' tag in the tag file."),
            EXIT_SUCCESS,
        ),
    }
}

fn switch(store: &TagEntryStore, tag: &str, settings: &Settings) -> Outcome {
    match store.lookup(tag) {
        Ok(entry) => Outcome::new(
            ShellReply::SwitchDirectory(paths::expand_tilde(entry.directory(), &settings.home)),
            EXIT_CD_SUCCESS,
        ),
        Err(StoreError::EmptyStore) => Outcome::new(ShellReply::Silent, EXIT_NO_TAGS),
        Err(e) => Outcome::new(ShellReply::message(e.to_string()), EXIT_FAILURE),
    }
}

fn list(
    mut store: TagEntryStore,
    style: ListStyle,
    sort: SortOrder,
    format: OutputFormat,
) -> Outcome {
    match sort {
        SortOrder::Unsorted => {}
        SortOrder::ByTag => store.sort_by_tag(),
        SortOrder::ByDirectory => store.sort_by_directory(),
    }

    let reply = match format {
        OutputFormat::Jsonl => ShellReply::Jsonl(JsonlFormatter::new().format(&store)),
        OutputFormat::Human
            if style == ListStyle::TagsAndDirectories && store.is_empty() =>
        {
            ShellReply::message("Tag list is empty.")
        }
        OutputFormat::Human => ShellReply::TagList {
            entries: store,
            style,
        },
    };

    Outcome::new(reply, EXIT_CD_SUCCESS)
}

fn update_prev(store: TagEntryStore, path: &str, tag_file: &Path) -> Outcome {
    // The tag file is line based, so the path must fit on one non-blank line
    if path.trim().is_empty() || path.contains(['\n', '\r']) {
        tracing::warn!(path, "refusing to store invalid 'prev' path");
        return Outcome::new(
            ShellReply::message("Invalid path for 'prev' tag."),
            EXIT_WRONG_ARGUMENTS,
        );
    }

    let (store, existed) = store.with_directory_for(PREV_TAG, path);

    if let Err(e) = store::save(tag_file, &store) {
        tracing::error!(error = %e, "failed to rewrite tag file");
        return Outcome::new(ShellReply::message(e.to_string()), EXIT_FAILURE);
    }

    let reply = if existed {
        ShellReply::Silent
    } else {
        ShellReply::message("No 'prev' tag.")
    };
    Outcome::new(reply, EXIT_SUCCESS)
}
