//! Extraction of archives that landed in the `archives` folder.
//!
//! The format is picked from the archive's extension. Contents go into a
//! folder next to the archive, named after it without its final extension:
//! `archives/backup.tar.gz` unpacks into `archives/backup.tar/`.
//!
//! Extracted files are not classified again, and archives found inside an
//! archive are left packed.

use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::extension_of;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Archive formats that can be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    /// A gzip stream, holding either a tarball or a single file.
    Gzip,
}

impl ArchiveFormat {
    /// Maps an uppercase extension to its format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "ZIP" => Some(Self::Zip),
            "TAR" => Some(Self::Tar),
            "GZ" => Some(Self::Gzip),
            _ => None,
        }
    }
}

/// Returns the folder an archive is extracted into.
///
/// A name with nothing before its final dot (such as `.zip`) would map onto
/// the archive's own folder, so `_extracted` is appended instead.
pub fn extraction_dir(archive: &Path) -> PathBuf {
    let name = archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => format!("{name}_extracted"),
    };
    archive.with_file_name(folder)
}

/// Extracts `archive` into `destination`, creating the folder if needed.
///
/// Existing content of `destination` is kept; entries of the archive
/// replace files with the same relative path.
pub fn extract(archive: &Path, destination: &Path) -> OrganizeResult<()> {
    let extension = extension_of(archive);
    let format =
        ArchiveFormat::from_extension(&extension).ok_or_else(|| OrganizeError::UnsupportedArchive {
            archive: archive.to_path_buf(),
            extension: extension.clone(),
        })?;

    fs::create_dir_all(destination).map_err(|e| OrganizeError::DirectoryCreationFailed {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let fail = |reason: String| OrganizeError::Extraction {
        archive: archive.to_path_buf(),
        reason,
    };

    let file = File::open(archive).map_err(|e| fail(e.to_string()))?;
    match format {
        ArchiveFormat::Zip => {
            let mut zip = zip::ZipArchive::new(file).map_err(|e| fail(e.to_string()))?;
            zip.extract(destination).map_err(|e| fail(e.to_string()))?;
        }
        ArchiveFormat::Tar => {
            tar::Archive::new(file)
                .unpack(destination)
                .map_err(|e| fail(e.to_string()))?;
        }
        ArchiveFormat::Gzip => {
            let mut payload = Vec::new();
            GzDecoder::new(file)
                .read_to_end(&mut payload)
                .map_err(|e| fail(e.to_string()))?;

            if infer::archive::is_tar(&payload) {
                tar::Archive::new(Cursor::new(payload))
                    .unpack(destination)
                    .map_err(|e| fail(e.to_string()))?;
            } else {
                let inner_name = extraction_dir(archive)
                    .file_name()
                    .map(ToOwned::to_owned)
                    .ok_or_else(|| fail("archive has no file name".to_string()))?;
                let inner = destination.join(inner_name);
                fs::write(&inner, payload).map_err(|e| fail(e.to_string()))?;
            }
        }
    }

    tracing::info!(
        archive = %archive.display(),
        destination = %destination.display(),
        ?format,
        "extracted archive"
    );
    Ok(())
}
