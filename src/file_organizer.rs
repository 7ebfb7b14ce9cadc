/// File organization system for moving files into category directories.
///
/// This module moves every classified file into `<root>/<category>/` under
/// its transliterated name, extracts the archives it moved, and finally
/// removes every directory the moves left empty.
use crate::archive;
use crate::config::{CollisionPolicy, OrganizeOptions};
use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::{Category, Classification};
use crate::output::OutputFormatter;
use crate::transliterate::safe_file_name;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents a single file organization operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The original path of the file before organization.
    pub original_path: PathBuf,
    /// The new path of the file after organization.
    pub new_path: PathBuf,
    /// The category the file was moved to.
    pub category: Category,
}

impl Operation {
    /// Returns true if the file was already at its destination.
    pub fn is_noop(&self) -> bool {
        self.original_path == self.new_path
    }
}

/// Everything a completed run did.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    /// Moves in the order they happened.
    pub operations: Vec<Operation>,
    /// Folders archives were extracted into.
    pub extracted: Vec<PathBuf>,
    /// Number of empty directories removed.
    pub pruned_dirs: usize,
}

impl OrganizeSummary {
    /// Number of files handled per category, in category order.
    pub fn per_category(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .operations
                    .iter()
                    .filter(|op| op.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

/// Organizes files by moving them into category subdirectories.
pub struct FileOrganizer<'a> {
    base_path: &'a Path,
    on_collision: CollisionPolicy,
    show_progress: bool,
}

impl<'a> FileOrganizer<'a> {
    pub fn new(base_path: &'a Path, options: &OrganizeOptions) -> Self {
        Self {
            base_path,
            on_collision: options.on_collision,
            show_progress: options.show_progress,
        }
    }

    /// Moves every classified file into its category folder.
    ///
    /// Categories are processed in [`Category::ALL`] order. Each archive is
    /// extracted right after it is moved. Once every file is in place, empty
    /// directories anywhere under the base path are removed, including
    /// category folders that received nothing.
    ///
    /// The first failure aborts the run; files already moved stay moved.
    pub fn organize(&self, classification: &Classification) -> OrganizeResult<OrganizeSummary> {
        if !self.base_path.exists() {
            return Err(OrganizeError::NotFound {
                path: self.base_path.to_path_buf(),
            });
        }
        if !self.base_path.is_dir() {
            return Err(OrganizeError::NotADirectory {
                path: self.base_path.to_path_buf(),
            });
        }

        let mut summary = OrganizeSummary::default();
        let pb = OutputFormatter::create_progress_bar(
            classification.len() as u64,
            self.show_progress,
        );

        for category in Category::ALL {
            self.ensure_category_dir(category)?;

            for file in classification.files(category) {
                let operation = self.move_to_category(file, category)?;
                pb.set_message(
                    operation
                        .new_path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                );
                pb.inc(1);

                if category == Category::Archive {
                    let destination = self.resolve_extraction_dir(&operation.new_path)?;
                    archive::extract(&operation.new_path, &destination)?;
                    summary.extracted.push(destination);
                }
                summary.operations.push(operation);
            }
        }
        pb.finish_and_clear();

        summary.pruned_dirs = prune_empty_dirs(self.base_path)?;
        Ok(summary)
    }

    /// Creates `<base>/<category>` if it does not exist yet.
    pub fn ensure_category_dir(&self, category: Category) -> OrganizeResult<PathBuf> {
        let category_path = self.base_path.join(category.dir_name());
        fs::create_dir_all(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: category_path.clone(),
            source: e,
        })?;
        Ok(category_path)
    }

    /// Moves one file into its category folder under its transliterated name.
    ///
    /// The category folder must already exist. A file that already sits at
    /// its destination is left alone.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::config::OrganizeOptions;
    /// use dirsort::file_category::Category;
    /// use dirsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let base = Path::new("/path/to/base");
    /// let organizer = FileOrganizer::new(base, &OrganizeOptions::new(base));
    /// organizer.ensure_category_dir(Category::Image)?;
    /// let op = organizer.move_to_category(Path::new("/path/to/base/Фото.JPG"), Category::Image)?;
    /// assert!(op.new_path.ends_with("images/Foto.JPG"));
    /// # Ok::<(), dirsort::OrganizeError>(())
    /// ```
    pub fn move_to_category(
        &self,
        file_path: &Path,
        category: Category,
    ) -> OrganizeResult<Operation> {
        let category_path = self.base_path.join(category.dir_name());

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                from: file_path.to_path_buf(),
                to: category_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;
        let normalized = safe_file_name(&file_name.to_string_lossy());
        let destination = self.resolve_destination(file_path, &category_path, &normalized)?;

        if destination != file_path {
            move_file(file_path, &destination)?;
            tracing::info!(
                from = %file_path.display(),
                to = %destination.display(),
                "moved file"
            );
        }

        Ok(Operation {
            original_path: file_path.to_path_buf(),
            new_path: destination,
            category,
        })
    }

    /// Picks the folder an archive is extracted into.
    ///
    /// The folder from [`archive::extraction_dir`] is used unless something
    /// other than a directory holds that name. Then `suffix` (and
    /// `overwrite`, which only ever replaces files with files) appends `_<n>`
    /// to the folder name, and `error` fails with `NameCollision`.
    pub fn resolve_extraction_dir(&self, archive_path: &Path) -> OrganizeResult<PathBuf> {
        let candidate = archive::extraction_dir(archive_path);
        if is_free_for_dir(&candidate) {
            return Ok(candidate);
        }

        if self.on_collision == CollisionPolicy::Error {
            return Err(OrganizeError::NameCollision {
                file: archive_path.to_path_buf(),
                destination: candidate,
            });
        }

        let folder = candidate
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut n = 1usize;
        loop {
            let suffixed = candidate.with_file_name(format!("{folder}_{n}"));
            if is_free_for_dir(&suffixed) {
                tracing::debug!(
                    archive = %archive_path.display(),
                    destination = %suffixed.display(),
                    "extraction folder name taken, using suffix"
                );
                return Ok(suffixed);
            }
            n += 1;
        }
    }

    /// Picks the destination path according to the collision policy.
    ///
    /// A directory in the way (such as an extraction folder) is never
    /// overwritten; `overwrite` then falls back to a suffix.
    fn resolve_destination(
        &self,
        file_path: &Path,
        category_path: &Path,
        name: &str,
    ) -> OrganizeResult<PathBuf> {
        let candidate = category_path.join(name);
        if candidate == file_path || !is_occupied(&candidate) {
            return Ok(candidate);
        }

        match self.on_collision {
            CollisionPolicy::Overwrite if !is_real_dir(&candidate) => {
                tracing::warn!(
                    file = %file_path.display(),
                    destination = %candidate.display(),
                    "overwriting existing file"
                );
                Ok(candidate)
            }
            CollisionPolicy::Error => Err(OrganizeError::NameCollision {
                file: file_path.to_path_buf(),
                destination: candidate,
            }),
            CollisionPolicy::Suffix | CollisionPolicy::Overwrite => {
                let mut n = 1usize;
                loop {
                    let suffixed = category_path.join(suffixed_name(name, n));
                    if suffixed == file_path || !is_occupied(&suffixed) {
                        tracing::debug!(
                            file = %file_path.display(),
                            destination = %suffixed.display(),
                            "name taken, using suffix"
                        );
                        return Ok(suffixed);
                    }
                    n += 1;
                }
            }
        }
    }
}

/// Inserts `_<n>` before the final extension: `foto.jpg` becomes `foto_1.jpg`.
pub fn suffixed_name(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{stem}_{n}.{extension}"),
        _ => format!("{name}_{n}"),
    }
}

/// True if `path` is a directory itself, not a symlink to one.
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|metadata| metadata.is_dir())
}

/// True if `path` is unused or already a real directory.
fn is_free_for_dir(path: &Path) -> bool {
    !is_occupied(path) || is_real_dir(path)
}

/// True if anything, including a dangling symlink, exists at `path`.
fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Moves a file, falling back to [`copy_then_remove`] when a rename is not
/// possible (for instance across filesystems).
fn move_file(from: &Path, to: &Path) -> OrganizeResult<()> {
    let rename_error = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    tracing::debug!(
        from = %from.display(),
        error = %rename_error,
        "rename failed, copying instead"
    );

    copy_then_remove(from, to).map_err(|e| OrganizeError::FileMoveFailure {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })
}

/// Copies `from` to `to`, then deletes `from`.
///
/// The copy is written next to `to` under a temporary name and renamed into
/// place, so a failed copy leaves neither a partial file nor a damaged
/// existing `to` behind. A symlink is re-created as a symlink with the same
/// target instead of being followed.
pub fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    let staging = staging_path(to);
    let copied = copy_entry(from, &staging).and_then(|()| fs::rename(&staging, to));
    if let Err(e) = copied {
        if is_occupied(&staging) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                tracing::warn!(
                    path = %staging.display(),
                    error = %cleanup,
                    "could not remove partial copy"
                );
            }
        }
        return Err(e);
    }
    fs::remove_file(from)
}

fn copy_entry(from: &Path, to: &Path) -> io::Result<()> {
    if fs::symlink_metadata(from)?.file_type().is_symlink() {
        copy_symlink(from, to)
    } else {
        fs::copy(from, to).map(|_| ())
    }
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}

/// `<dir>/.<name>.partial`, the temporary name a copy is written under.
fn staging_path(to: &Path) -> PathBuf {
    let name = to
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    to.with_file_name(format!(".{name}.partial"))
}

/// Removes every empty directory below `root`, deepest first.
///
/// A directory whose only content was emptied directories is removed too.
/// `root` itself is never removed. Returns the number of removed directories.
pub fn prune_empty_dirs(root: &Path) -> OrganizeResult<usize> {
    let mut removed = 0;

    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| OrganizeError::Scan {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let is_empty = fs::read_dir(path)
            .map_err(|e| OrganizeError::PruneFailed {
                path: path.to_path_buf(),
                source: e,
            })?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(path).map_err(|e| OrganizeError::PruneFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
            tracing::info!(path = %path.display(), "removed empty directory");
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn organizer<'a>(base: &'a Path, policy: CollisionPolicy) -> FileOrganizer<'a> {
        FileOrganizer::new(base, &OrganizeOptions::new(base).on_collision(policy))
    }

    #[test]
    fn test_ensure_category_dir_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Suffix);

        let first = organizer.ensure_category_dir(Category::Document).unwrap();
        let second = organizer.ensure_category_dir(Category::Document).unwrap();

        assert_eq!(first, base_path.join("documents"));
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn test_move_to_category_transliterates_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Suffix);

        fs::create_dir(base_path.join("nested")).unwrap();
        let file_path = base_path.join("nested/Мій звіт.pdf");
        fs::write(&file_path, "report").unwrap();

        organizer.ensure_category_dir(Category::Document).unwrap();
        let op = organizer
            .move_to_category(&file_path, Category::Document)
            .expect("Failed to move file");

        assert_eq!(op.new_path, base_path.join("documents/Mii_zvit.pdf"));
        assert!(!file_path.exists());
        assert_eq!(fs::read_to_string(&op.new_path).unwrap(), "report");
    }

    #[test]
    fn test_file_already_in_place_is_left_alone() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Error);

        let category_dir = organizer.ensure_category_dir(Category::Image).unwrap();
        let file_path = category_dir.join("photo.png");
        fs::write(&file_path, "png").unwrap();

        let op = organizer.move_to_category(&file_path, Category::Image).unwrap();
        assert!(op.is_noop());
        assert!(file_path.exists());
    }

    #[test]
    fn test_collision_suffix_keeps_both_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Suffix);
        organizer.ensure_category_dir(Category::Image).unwrap();

        fs::write(base_path.join("фото.jpg"), "cyrillic").unwrap();
        fs::write(base_path.join("foto.jpg"), "latin").unwrap();

        let first = organizer
            .move_to_category(&base_path.join("foto.jpg"), Category::Image)
            .unwrap();
        let second = organizer
            .move_to_category(&base_path.join("фото.jpg"), Category::Image)
            .unwrap();

        assert_eq!(first.new_path, base_path.join("images/foto.jpg"));
        assert_eq!(second.new_path, base_path.join("images/foto_1.jpg"));
        assert_eq!(fs::read_to_string(&first.new_path).unwrap(), "latin");
        assert_eq!(fs::read_to_string(&second.new_path).unwrap(), "cyrillic");
    }

    #[test]
    fn test_collision_overwrite_last_move_wins() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Overwrite);
        organizer.ensure_category_dir(Category::Image).unwrap();

        fs::write(base_path.join("foto.jpg"), "latin").unwrap();
        fs::write(base_path.join("фото.jpg"), "cyrillic").unwrap();

        organizer
            .move_to_category(&base_path.join("foto.jpg"), Category::Image)
            .unwrap();
        organizer
            .move_to_category(&base_path.join("фото.jpg"), Category::Image)
            .unwrap();

        let images: Vec<_> = fs::read_dir(base_path.join("images")).unwrap().collect();
        assert_eq!(images.len(), 1);
        assert_eq!(
            fs::read_to_string(base_path.join("images/foto.jpg")).unwrap(),
            "cyrillic"
        );
    }

    #[test]
    fn test_collision_error_policy() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Error);
        organizer.ensure_category_dir(Category::Image).unwrap();

        fs::write(base_path.join("foto.jpg"), "latin").unwrap();
        fs::write(base_path.join("фото.jpg"), "cyrillic").unwrap();

        organizer
            .move_to_category(&base_path.join("foto.jpg"), Category::Image)
            .unwrap();
        let result = organizer.move_to_category(&base_path.join("фото.jpg"), Category::Image);

        assert!(matches!(result, Err(OrganizeError::NameCollision { .. })));
        assert!(base_path.join("фото.jpg").exists());
    }

    #[test]
    fn test_suffixed_name() {
        assert_eq!(suffixed_name("foto.jpg", 1), "foto_1.jpg");
        assert_eq!(suffixed_name("backup.tar.gz", 2), "backup.tar_2.gz");
        assert_eq!(suffixed_name("README", 3), "README_3");
        assert_eq!(suffixed_name(".zip", 1), ".zip_1");
    }

    #[test]
    fn test_move_missing_file_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Suffix);
        organizer.ensure_category_dir(Category::Document).unwrap();

        let result =
            organizer.move_to_category(&base_path.join("ghost.txt"), Category::Document);
        assert!(matches!(result, Err(OrganizeError::FileMoveFailure { .. })));
    }

    #[test]
    fn test_prune_removes_nested_empty_dirs_but_not_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::create_dir_all(base_path.join("a/b/c")).unwrap();
        fs::create_dir_all(base_path.join("keep")).unwrap();
        fs::write(base_path.join("keep/file.txt"), "x").unwrap();

        let removed = prune_empty_dirs(base_path).unwrap();

        assert_eq!(removed, 3);
        assert!(!base_path.join("a").exists());
        assert!(base_path.join("keep/file.txt").exists());
        assert!(base_path.exists());
    }

    #[test]
    fn test_organize_invalid_base_path() {
        let non_existent = Path::new("/non/existent/path");
        let organizer = organizer(non_existent, CollisionPolicy::Suffix);
        let result = organizer.organize(&Classification::default());
        assert!(matches!(result, Err(OrganizeError::NotFound { .. })));
    }

    #[test]
    fn test_organize_file_as_base_path_is_not_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, "x").unwrap();

        let organizer = organizer(&file_path, CollisionPolicy::Suffix);
        let result = organizer.organize(&Classification::default());
        assert!(matches!(result, Err(OrganizeError::NotADirectory { .. })));
    }

    #[test]
    fn test_name_without_letters_gets_placeholder_under_every_policy() {
        for policy in [
            CollisionPolicy::Suffix,
            CollisionPolicy::Overwrite,
            CollisionPolicy::Error,
        ] {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            let base_path = temp_dir.path();
            let organizer = organizer(base_path, policy);
            organizer.ensure_category_dir(Category::Other).unwrap();

            for name in ["ь", "ьь.", "ь.."] {
                let file_path = base_path.join(name);
                fs::write(&file_path, name).unwrap();

                let op = organizer
                    .move_to_category(&file_path, Category::Other)
                    .unwrap_or_else(|e| panic!("{policy:?} failed for {name}: {e}"));
                assert_eq!(op.new_path.parent(), Some(base_path.join("other").as_path()));
                assert!(op.new_path.is_file(), "{policy:?}: {name}");
                assert!(!file_path.exists());

                if policy == CollisionPolicy::Error {
                    // Only the first one fits without a collision.
                    break;
                }
            }
        }
    }

    #[test]
    fn test_placeholder_names_are_suffixed() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Suffix);
        organizer.ensure_category_dir(Category::Other).unwrap();
        fs::write(base_path.join("ь"), "one").unwrap();
        fs::write(base_path.join("ь.."), "two").unwrap();

        let first = organizer
            .move_to_category(&base_path.join("ь"), Category::Other)
            .unwrap();
        let second = organizer
            .move_to_category(&base_path.join("ь.."), Category::Other)
            .unwrap();

        assert_eq!(first.new_path, base_path.join("other/_"));
        assert_eq!(second.new_path, base_path.join("other/__1"));
        assert_eq!(fs::read_to_string(&second.new_path).unwrap(), "two");
    }

    #[test]
    fn test_placeholder_name_with_error_policy_reports_real_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Error);
        organizer.ensure_category_dir(Category::Other).unwrap();
        fs::write(base_path.join("other/_"), "taken").unwrap();
        fs::write(base_path.join("ь"), "new").unwrap();

        match organizer.move_to_category(&base_path.join("ь"), Category::Other) {
            Err(OrganizeError::NameCollision { destination, .. }) => {
                assert_eq!(destination, base_path.join("other/_"));
            }
            other => panic!("expected a name collision, got {other:?}"),
        }
    }

    #[test]
    fn test_extraction_dir_is_used_when_free_or_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Error);
        let archive_path = base_path.join("backup.tar.gz");

        assert_eq!(
            organizer.resolve_extraction_dir(&archive_path).unwrap(),
            base_path.join("backup.tar")
        );

        fs::create_dir(base_path.join("backup.tar")).unwrap();
        assert_eq!(
            organizer.resolve_extraction_dir(&archive_path).unwrap(),
            base_path.join("backup.tar")
        );
    }

    #[test]
    fn test_extraction_dir_taken_by_file_follows_policy() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let archive_path = base_path.join("backup.tar.gz");
        fs::write(base_path.join("backup.tar"), "a tarball").unwrap();

        for policy in [CollisionPolicy::Suffix, CollisionPolicy::Overwrite] {
            assert_eq!(
                organizer(base_path, policy)
                    .resolve_extraction_dir(&archive_path)
                    .unwrap(),
                base_path.join("backup.tar_1")
            );
        }

        fs::write(base_path.join("backup.tar_1"), "also a file").unwrap();
        assert_eq!(
            organizer(base_path, CollisionPolicy::Suffix)
                .resolve_extraction_dir(&archive_path)
                .unwrap(),
            base_path.join("backup.tar_2")
        );

        let result =
            organizer(base_path, CollisionPolicy::Error).resolve_extraction_dir(&archive_path);
        assert!(matches!(result, Err(OrganizeError::NameCollision { .. })));
        assert_eq!(
            fs::read_to_string(base_path.join("backup.tar")).unwrap(),
            "a tarball"
        );
    }

    #[test]
    fn test_overwrite_never_replaces_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let organizer = organizer(base_path, CollisionPolicy::Overwrite);
        organizer.ensure_category_dir(Category::Archive).unwrap();
        fs::create_dir(base_path.join("archives/backup.tar")).unwrap();
        fs::write(base_path.join("backup.tar"), "tar").unwrap();

        let op = organizer
            .move_to_category(&base_path.join("backup.tar"), Category::Archive)
            .unwrap();

        assert_eq!(op.new_path, base_path.join("archives/backup_1.tar"));
        assert!(base_path.join("archives/backup.tar").is_dir());
    }

    #[test]
    fn test_copy_then_remove_regular_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let from = temp_dir.path().join("src/data.bin");
        let to = temp_dir.path().join("dst/data.bin");
        fs::create_dir_all(from.parent().unwrap()).unwrap();
        fs::create_dir_all(to.parent().unwrap()).unwrap();
        fs::write(&from, b"payload").unwrap();

        copy_then_remove(&from, &to).expect("copy failed");

        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"payload");
        assert!(!staging_path(&to).exists());
    }

    #[test]
    fn test_copy_then_remove_replaces_existing_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let from = temp_dir.path().join("new.txt");
        let to = temp_dir.path().join("old.txt");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        copy_then_remove(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
        assert!(!from.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_then_remove_keeps_symlink() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("target.txt"), "target").unwrap();
        fs::create_dir(base_path.join("dst")).unwrap();
        let from = base_path.join("link.txt");
        let to = base_path.join("dst/link.txt");
        std::os::unix::fs::symlink("target.txt", &from).unwrap();

        copy_then_remove(&from, &to).unwrap();

        assert!(fs::symlink_metadata(&from).is_err());
        assert!(fs::symlink_metadata(&to).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&to).unwrap(), PathBuf::from("target.txt"));
        assert_eq!(
            fs::read_to_string(base_path.join("target.txt")).unwrap(),
            "target"
        );
    }

    #[test]
    fn test_copy_then_remove_failure_keeps_source_and_leaves_nothing_behind() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let from = base_path.join("keep.txt");
        fs::write(&from, "keep").unwrap();

        let missing_dir = base_path.join("missing/keep.txt");
        let err = copy_then_remove(&from, &missing_dir).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read_to_string(&from).unwrap(), "keep");

        // A directory source cannot be copied as a file.
        fs::create_dir(base_path.join("a_dir")).unwrap();
        fs::create_dir(base_path.join("dst")).unwrap();
        let to = base_path.join("dst/a_dir");
        assert!(copy_then_remove(&base_path.join("a_dir"), &to).is_err());
        assert!(base_path.join("a_dir").is_dir());
        assert_eq!(fs::read_dir(base_path.join("dst")).unwrap().count(), 0);
    }

    #[test]
    fn test_move_file_reports_copy_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let from = temp_dir.path().join("ghost.txt");
        let to = temp_dir.path().join("ghost_moved.txt");

        match move_file(&from, &to) {
            Err(OrganizeError::FileMoveFailure { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected a move failure, got {other:?}"),
        }
        assert!(!staging_path(&to).exists());
    }
}
