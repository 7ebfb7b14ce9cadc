//! Run options.
//!
//! There is no configuration file: every option comes from the command line
//! (see [`crate::cli::Args`]) or, for library callers, from
//! [`OrganizeOptions::new`] and the builder-style setters.

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// What to do when a transliterated name is already taken in its category folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CollisionPolicy {
    /// Insert `_1`, `_2`, ... before the extension until the name is free.
    #[default]
    Suffix,
    /// Replace the existing file; the last file moved wins.
    Overwrite,
    /// Abort the run.
    Error,
}

/// How the classification report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two-column table.
    #[default]
    Text,
    /// JSON object.
    Json,
}

/// Options for one sorting run.
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Folder to sort.
    pub root: PathBuf,
    /// Print the report without touching the filesystem.
    pub dry_run: bool,
    /// Destination name collision handling.
    pub on_collision: CollisionPolicy,
    /// Report format.
    pub format: OutputFormat,
    /// Draw a progress bar while moving files.
    pub show_progress: bool,
}

impl OrganizeOptions {
    /// Creates options for `root` with every other setting at its default.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            dry_run: false,
            on_collision: CollisionPolicy::default(),
            format: OutputFormat::default(),
            show_progress: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
