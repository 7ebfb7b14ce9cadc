//! Classification report.
//!
//! The report is built from a [`Classification`] without touching the
//! filesystem, so it can be printed before anything is moved.
//!
//! # Format
//!
//! ```text
//! File Type  | File Name
//! --------------------------------------------------
//! images     | Foto.JPG
//! documents  | report.PDF
//!
//! Known Extensions: JPG, PDF
//! Unknown Extensions: None
//! ```

use crate::file_category::{Category, Classification};
use crate::transliterate::safe_file_name;
use serde::Serialize;
use std::collections::BTreeSet;

const SEPARATOR_WIDTH: usize = 50;

/// One non-empty category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    /// Folder name of the category.
    pub category: &'static str,
    /// Transliterated base names (as the files will be named), sorted and
    /// de-duplicated.
    pub files: Vec<String>,
}

/// Read-only summary of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub categories: Vec<CategoryRow>,
    pub known_extensions: Vec<String>,
    pub unknown_extensions: Vec<String>,
}

impl Report {
    pub fn from_classification(classification: &Classification) -> Self {
        let categories = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let files = classification.files(category);
                if files.is_empty() {
                    return None;
                }
                let names: BTreeSet<String> = files
                    .iter()
                    .filter_map(|path| path.file_name())
                    .map(|name| safe_file_name(&name.to_string_lossy()))
                    .collect();
                Some(CategoryRow {
                    category: category.dir_name(),
                    files: names.into_iter().collect(),
                })
            })
            .collect();

        Self {
            categories,
            known_extensions: classification.known_extensions().iter().cloned().collect(),
            unknown_extensions: classification
                .unknown_extensions()
                .iter()
                .cloned()
                .collect(),
        }
    }

    /// Renders the two-column text table.
    pub fn render_text(&self) -> String {
        let mut out = format!("{:<10} | {}\n", "File Type", "File Name");
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');

        for row in &self.categories {
            out.push_str(&format!("{:<10} | {}\n", row.category, row.files.join(", ")));
        }

        let unknown = if self.unknown_extensions.is_empty() {
            "None".to_string()
        } else {
            self.unknown_extensions.join(", ")
        };
        out.push_str(&format!(
            "\nKnown Extensions: {}\nUnknown Extensions: {}\n",
            self.known_extensions.join(", "),
            unknown
        ));
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
