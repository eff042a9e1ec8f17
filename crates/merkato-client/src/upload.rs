//! Pre-submission staging for product images.
//!
//! Selected files are validated and copied into a private staging directory,
//! so later edits to the originals cannot change what gets uploaded. The
//! selection is bounded to [`MAX_IMAGES`] entries, and every staged copy is
//! released exactly once: when its entry is removed, or when the staging
//! area is dropped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::UploadError;

/// Upper bound on staged images per product.
pub const MAX_IMAGES: usize = 5;

/// Upper bound on a single image file, in bytes (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Accepted image content types, keyed by file extension.
const ACCEPTED_IMAGE_TYPES: [(&str, &str); 4] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

static STAGING_SEQ: AtomicU32 = AtomicU32::new(0);

/// One staged image: the original selection and its private staging copy.
#[derive(Debug)]
pub struct StagedImage {
    source: PathBuf,
    staged: PathBuf,
    content_type: &'static str,
}

impl StagedImage {
    /// The file the user selected.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The staging copy that will be uploaded.
    #[must_use]
    pub fn staged_path(&self) -> &Path {
        &self.staged
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }
}

/// A bounded staging area for images selected on the product form.
#[derive(Debug)]
pub struct UploadStaging {
    dir: PathBuf,
    images: Vec<StagedImage>,
    next_name: u32,
}

impl UploadStaging {
    /// Creates an empty staging area backed by a fresh private directory.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Io`] if the directory cannot be created.
    pub fn new() -> Result<Self, UploadError> {
        let dir = std::env::temp_dir().join(format!(
            "merkato-staging-{}-{}",
            std::process::id(),
            STAGING_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).map_err(|e| UploadError::Io {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self {
            dir,
            images: Vec::new(),
            next_name: 0,
        })
    }

    /// Validates a candidate file without staging it: accepted type and
    /// within the size bound.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UnsupportedType`], [`UploadError::TooLarge`],
    /// or [`UploadError::Io`] if the file cannot be inspected.
    pub fn validate_image(path: &Path) -> Result<(), UploadError> {
        if content_type_for(path).is_none() {
            return Err(UploadError::UnsupportedType {
                path: path.to_path_buf(),
            });
        }
        let metadata = fs::metadata(path).map_err(|e| UploadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(UploadError::TooLarge {
                path: path.to_path_buf(),
                max_bytes: MAX_FILE_SIZE,
            });
        }
        Ok(())
    }

    /// Stages a batch of selected files, preserving selection order.
    ///
    /// The whole batch is rejected up front when it would push the selection
    /// past [`MAX_IMAGES`]; nothing is staged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::TooManyImages`] when the bound would be
    /// exceeded, or the first per-file validation or I/O error.
    pub fn add_files(&mut self, paths: &[PathBuf]) -> Result<(), UploadError> {
        if self.images.len() + paths.len() > MAX_IMAGES {
            return Err(UploadError::TooManyImages { limit: MAX_IMAGES });
        }
        for path in paths {
            self.add_file(path)?;
        }
        Ok(())
    }

    /// Removes one staged entry, releasing its staging copy, and returns the
    /// original source path. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        if index >= self.images.len() {
            return None;
        }
        let image = self.images.remove(index);
        if let Err(error) = fs::remove_file(&image.staged) {
            tracing::warn!(%error, staged = %image.staged.display(), "error releasing staged image");
        }
        Some(image.source)
    }

    /// The staged images, in selection order.
    #[must_use]
    pub fn images(&self) -> &[StagedImage] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn add_file(&mut self, path: &Path) -> Result<(), UploadError> {
        Self::validate_image(path)?;
        let content_type = content_type_for(path).unwrap_or("image/jpeg");

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let staged = self.dir.join(format!("{:02}-{file_name}", self.next_name));
        self.next_name += 1;

        fs::copy(path, &staged).map_err(|e| UploadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.images.push(StagedImage {
            source: path.to_path_buf(),
            staged,
            content_type,
        });
        Ok(())
    }
}

impl Drop for UploadStaging {
    fn drop(&mut self) {
        for image in self.images.drain(..) {
            let _ = fs::remove_file(&image.staged);
        }
        let _ = fs::remove_dir(&self.dir);
    }
}

/// Maps a file extension to its accepted content type, if any.
fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_string_lossy().to_lowercase();
    ACCEPTED_IMAGE_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    static SOURCE_SEQ: AtomicU32 = AtomicU32::new(0);

    /// A throwaway directory of source files for one test.
    struct SourceDir {
        dir: PathBuf,
    }

    impl SourceDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!(
                "merkato-upload-test-{}-{}",
                std::process::id(),
                SOURCE_SEQ.fetch_add(1, Ordering::Relaxed)
            ));
            fs::create_dir_all(&dir).expect("test dir should be creatable");
            Self { dir }
        }

        fn file(&self, name: &str, bytes: &[u8]) -> PathBuf {
            let path = self.dir.join(name);
            fs::write(&path, bytes).expect("test file should be writable");
            path
        }
    }

    impl Drop for SourceDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn stages_accepted_files_in_order() {
        let sources = SourceDir::new();
        let a = sources.file("a.png", b"png-bytes");
        let b = sources.file("b.jpg", b"jpg-bytes");

        let mut staging = UploadStaging::new().unwrap();
        staging.add_files(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(staging.len(), 2);
        assert_eq!(staging.images()[0].source(), a.as_path());
        assert_eq!(staging.images()[1].source(), b.as_path());
        assert_eq!(staging.images()[0].content_type(), "image/png");
        assert!(staging.images()[0].staged_path().exists());
    }

    #[test]
    fn rejects_batch_exceeding_bound_without_staging() {
        let sources = SourceDir::new();
        let paths: Vec<PathBuf> = (0..6)
            .map(|i| sources.file(&format!("img-{i}.png"), b"x"))
            .collect();

        let mut staging = UploadStaging::new().unwrap();
        let result = staging.add_files(&paths);
        assert!(matches!(
            result,
            Err(UploadError::TooManyImages { limit: MAX_IMAGES })
        ));
        assert!(staging.is_empty());
    }

    #[test]
    fn bound_counts_already_staged_images() {
        let sources = SourceDir::new();
        let first: Vec<PathBuf> = (0..4)
            .map(|i| sources.file(&format!("first-{i}.png"), b"x"))
            .collect();
        let second: Vec<PathBuf> = (0..2)
            .map(|i| sources.file(&format!("second-{i}.png"), b"x"))
            .collect();

        let mut staging = UploadStaging::new().unwrap();
        staging.add_files(&first).unwrap();
        assert!(matches!(
            staging.add_files(&second),
            Err(UploadError::TooManyImages { .. })
        ));
        assert_eq!(staging.len(), 4);
    }

    #[test]
    fn rejects_unsupported_type() {
        let sources = SourceDir::new();
        let gif = sources.file("anim.gif", b"gif-bytes");
        assert!(matches!(
            UploadStaging::validate_image(&gif),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn rejects_oversized_file() {
        let sources = SourceDir::new();
        let big = sources.file("big.png", &vec![0u8; (MAX_FILE_SIZE + 1) as usize]);
        assert!(matches!(
            UploadStaging::validate_image(&big),
            Err(UploadError::TooLarge { .. })
        ));
    }

    #[test]
    fn remove_releases_the_staged_copy() {
        let sources = SourceDir::new();
        let a = sources.file("a.png", b"x");

        let mut staging = UploadStaging::new().unwrap();
        staging.add_files(&[a.clone()]).unwrap();
        let staged_path = staging.images()[0].staged_path().to_path_buf();
        assert!(staged_path.exists());

        let removed = staging.remove(0);
        assert_eq!(removed, Some(a));
        assert!(!staged_path.exists());
        assert!(staging.is_empty());
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut staging = UploadStaging::new().unwrap();
        assert!(staging.remove(0).is_none());
    }

    #[test]
    fn drop_releases_remaining_copies() {
        let sources = SourceDir::new();
        let a = sources.file("a.png", b"x");

        let staged_path;
        {
            let mut staging = UploadStaging::new().unwrap();
            staging.add_files(&[a]).unwrap();
            staged_path = staging.images()[0].staged_path().to_path_buf();
            assert!(staged_path.exists());
        }
        assert!(!staged_path.exists());
    }
}
