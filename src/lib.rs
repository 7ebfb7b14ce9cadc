//! dirsort - sort a directory tree by file type
//!
//! This library scans a folder recursively, classifies every file by its
//! extension, prints a report, then moves each file into a type-named
//! subfolder under a transliterated ASCII name, extracts archives in place
//! and removes the directories left empty.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod file_category;
pub mod file_organizer;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;
pub mod transliterate;

pub use config::{CollisionPolicy, OrganizeOptions, OutputFormat};
pub use error::{ErrorKind, OrganizeError, OrganizeResult};
pub use file_category::{Category, Classification};
pub use file_organizer::{FileOrganizer, Operation, OrganizeSummary};
pub use report::Report;
pub use transliterate::transliterate;

pub use cli::{Args, run_cli, run_with_writer};
