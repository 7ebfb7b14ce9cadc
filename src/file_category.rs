/// File categorization by extension.
///
/// Every file falls into exactly one [`Category`]. The extension after the
/// final dot of the file name is uppercased and looked up in a fixed table,
/// walking the categories in priority order; files that match nothing are
/// [`Category::Other`].
///
/// # Examples
///
/// ```
/// use dirsort::file_category::Category;
///
/// assert_eq!(Category::from_extension("JPG"), Some(Category::Image));
/// assert_eq!(Category::from_extension("ZIP"), Some(Category::Archive));
/// assert_eq!(Category::from_extension("XYZ"), None);
/// ```
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Represents a file category.
///
/// The declaration order is the lookup priority and the order in which the
/// organizer processes categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Image files (JPEG, PNG, JPG, SVG)
    Image,
    /// Video files (AVI, MP4, MOV, MKV)
    Video,
    /// Document files (DOC, DOCX, TXT, PDF, XLSX, PPTX)
    Document,
    /// Audio files (MP3, OGG, WAV, AMR)
    Audio,
    /// Archive files (ZIP, GZ, TAR)
    Archive,
    /// Everything else
    Other,
}

impl Category {
    /// All categories in priority order.
    pub const ALL: [Category; 6] = [
        Category::Image,
        Category::Video,
        Category::Document,
        Category::Audio,
        Category::Archive,
        Category::Other,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::Image.dir_name(), "images");
    /// assert_eq!(Category::Audio.dir_name(), "audio");
    /// assert_eq!(Category::Other.dir_name(), "other");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Image => "images",
            Category::Video => "videos",
            Category::Document => "documents",
            Category::Audio => "audio",
            Category::Archive => "archives",
            Category::Other => "other",
        }
    }

    /// Returns the uppercase extensions recognized for this category.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Image => &["JPEG", "PNG", "JPG", "SVG"],
            Category::Video => &["AVI", "MP4", "MOV", "MKV"],
            Category::Document => &["DOC", "DOCX", "TXT", "PDF", "XLSX", "PPTX"],
            Category::Audio => &["MP3", "OGG", "WAV", "AMR"],
            Category::Archive => &["ZIP", "GZ", "TAR"],
            Category::Other => &[],
        }
    }

    /// Finds the category recognizing an uppercase extension.
    ///
    /// Returns `None` for extensions that only [`Category::Other`] would take.
    pub fn from_extension(extension: &str) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|category| category.extensions().contains(&extension))
    }
}

/// Returns the uppercased text after the last dot of the file name.
///
/// Only the file name is considered, never the parent directories. A name
/// without a dot has an empty extension.
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    match name.rsplit_once('.') {
        Some((_, extension)) => extension.to_uppercase(),
        None => String::new(),
    }
}

/// Classifies a single path, returning its category and its uppercase extension.
pub fn classify(path: &Path) -> (Category, String) {
    let extension = extension_of(path);
    let category = Category::from_extension(&extension).unwrap_or(Category::Other);
    (category, extension)
}

/// Classified files of one directory tree.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    buckets: BTreeMap<Category, Vec<PathBuf>>,
    known_extensions: BTreeSet<String>,
    unknown_extensions: BTreeSet<String>,
}

impl Classification {
    /// Classifies every path, keeping the input order within each category.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut classification = Self::default();
        for path in paths {
            classification.add(path);
        }
        classification
    }

    /// Adds one path to its category bucket and records its extension.
    pub fn add(&mut self, path: PathBuf) {
        let (category, extension) = classify(&path);
        tracing::debug!(path = %path.display(), ?category, %extension, "classified");
        if category == Category::Other {
            self.unknown_extensions.insert(extension);
        } else {
            self.known_extensions.insert(extension);
        }
        self.buckets.entry(category).or_default().push(path);
    }

    /// Returns the files of a category.
    pub fn files(&self, category: Category) -> &[PathBuf] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Recognized extensions that were encountered, sorted.
    pub fn known_extensions(&self) -> &BTreeSet<String> {
        &self.known_extensions
    }

    /// Unrecognized extensions that were encountered, sorted.
    pub fn unknown_extensions(&self) -> &BTreeSet<String> {
        &self.unknown_extensions
    }

    /// Total number of classified files.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns true if no file was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
