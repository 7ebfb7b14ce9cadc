//! Output formatting and styling module.
//!
//! Status lines are colored and go through [`OutputFormatter`]; the
//! classification report itself is plain text (see [`crate::report`]).

use crate::file_category::Category;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str = "{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Manages CLI status output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::success("Sorted 12 files");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a dry-run notice.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a progress bar for moving `total` files.
    ///
    /// Returns a hidden bar when `visible` is false, so callers can drive it
    /// unconditionally.
    pub fn create_progress_bar(total: u64, visible: bool) -> ProgressBar {
        if !visible {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Formats the one-line summary printed after a successful run.
    pub fn summary_line(
        moved: usize,
        per_category: &[(Category, usize)],
        extracted: usize,
    ) -> String {
        let breakdown = per_category
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| format!("{} {}", count, category_noun(*category, *count)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut line = format!(
            "Sorted {} {}",
            moved,
            if moved == 1 { "file" } else { "files" }
        );
        if !breakdown.is_empty() {
            line.push_str(&format!(" ({})", breakdown));
        }
        if extracted > 0 {
            line.push_str(&format!(
                ", extracted {} {}",
                extracted,
                if extracted == 1 { "archive" } else { "archives" }
            ));
        }
        line
    }
}

/// Category name for a count: `1 image`, `2 images`, `3 audio`.
fn category_noun(category: Category, count: usize) -> &'static str {
    if count != 1 {
        return category.dir_name();
    }
    match category {
        Category::Image => "image",
        Category::Video => "video",
        Category::Document => "document",
        Category::Audio => "audio",
        Category::Archive => "archive",
        Category::Other => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let line = OutputFormatter::summary_line(
            3,
            &[
                (Category::Image, 2),
                (Category::Video, 0),
                (Category::Archive, 1),
            ],
            1,
        );
        assert_eq!(line, "Sorted 3 files (2 images, 1 archive), extracted 1 archive");
    }

    #[test]
    fn test_summary_line_single_file_no_archives() {
        let line = OutputFormatter::summary_line(1, &[(Category::Other, 1)], 0);
        assert_eq!(line, "Sorted 1 file (1 other)");
    }

    #[test]
    fn test_summary_line_singular_category_names() {
        let line = OutputFormatter::summary_line(
            5,
            &[
                (Category::Image, 1),
                (Category::Video, 1),
                (Category::Document, 2),
                (Category::Audio, 1),
            ],
            0,
        );
        assert_eq!(line, "Sorted 5 files (1 image, 1 video, 2 documents, 1 audio)");
    }

    #[test]
    fn test_hidden_progress_bar() {
        let pb = OutputFormatter::create_progress_bar(10, false);
        pb.inc(1);
        assert!(pb.is_hidden());
    }
}
