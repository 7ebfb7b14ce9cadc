//! Command-line interface module for dirsort.
//!
//! This module handles argument parsing and drives one run:
//! - validating the target folder
//! - scanning and classifying its files
//! - printing the report
//! - reorganizing the folder (unless this is a dry run)

use crate::config::{CollisionPolicy, OrganizeOptions, OutputFormat};
use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::Classification;
use crate::file_organizer::{FileOrganizer, OrganizeSummary};
use crate::output::OutputFormatter;
use crate::report::Report;
use crate::scanner;
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;

/// dirsort - sort a folder into images, videos, documents, audio, archives and other
///
/// Files anywhere below the folder are renamed to a transliterated ASCII name
/// and moved into a subfolder named after their type. Archives are extracted
/// next to themselves and emptied directories are removed.
#[derive(Parser, Debug, Clone)]
#[command(name = "dirsort")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder to sort
    pub folder_path: PathBuf,

    /// Print the report without moving anything
    #[arg(short = 'n', long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// What to do when two files end up with the same name
    #[arg(long = "on-collision", value_enum, default_value_t = CollisionPolicy::Suffix)]
    pub on_collision: CollisionPolicy,

    /// Report format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for OrganizeOptions {
    fn from(args: Args) -> Self {
        OrganizeOptions::new(args.folder_path)
            .dry_run(args.dry_run)
            .on_collision(args.on_collision)
            .format(args.format)
            .show_progress(true)
    }
}

/// Runs one sort, printing the report to stdout.
///
/// Returns `None` for a dry run and the summary of the moves otherwise.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::run_cli;
/// use dirsort::config::OrganizeOptions;
///
/// match run_cli(&OrganizeOptions::new("/path/to/directory")) {
///     Ok(_) => println!("Sorted"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(options: &OrganizeOptions) -> OrganizeResult<Option<OrganizeSummary>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_with_writer(options, &mut out)?;

    if options.format == OutputFormat::Text {
        match &summary {
            Some(summary) => OutputFormatter::success(&OutputFormatter::summary_line(
                summary.operations.len(),
                &summary.per_category(),
                summary.extracted.len(),
            )),
            None => OutputFormatter::dry_run_notice("No files were moved."),
        }
    }
    Ok(summary)
}

/// Runs one sort, writing the report to `out`.
///
/// Nothing on disk is touched until the report has been written, and a
/// missing or non-directory root is rejected before scanning.
pub fn run_with_writer<W: Write>(
    options: &OrganizeOptions,
    out: &mut W,
) -> OrganizeResult<Option<OrganizeSummary>> {
    let root = options.root.as_path();
    if !root.exists() {
        return Err(OrganizeError::NotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(OrganizeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let files = scanner::collect_files(root)?;
    let classification = Classification::from_paths(files);
    let report = Report::from_classification(&classification);

    match options.format {
        OutputFormat::Text => out.write_all(report.render_text().as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    out.flush()?;

    if options.dry_run {
        tracing::info!(root = %root.display(), "dry run, nothing moved");
        return Ok(None);
    }

    let summary = FileOrganizer::new(root, options).organize(&classification)?;
    tracing::info!(
        moved = summary.operations.len(),
        extracted = summary.extracted.len(),
        pruned = summary.pruned_dirs,
        "sort complete"
    );
    Ok(Some(summary))
}
