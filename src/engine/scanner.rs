use std::io;
use std::path::PathBuf;

use walkdir::{DirEntry, WalkDir};

use crate::errors::{Result, SkipReason, UploaderError};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub include_hidden: bool,
    pub max_depth: usize,
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_hidden: true,
            max_depth: usize::MAX,
            follow_symlinks: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawFileMetadata {
    pub path: PathBuf,
    pub size: u64,
    pub is_file: bool,
    pub is_symlink: bool,
}

pub struct Scanner {
    inner: walkdir::IntoIter,
    config: ScanConfig,
}

impl Scanner {
    pub fn new<P: Into<PathBuf>>(root: P, config: ScanConfig) -> Self {
        let walker = WalkDir::new(root.into())
            .min_depth(1)
            .max_depth(config.max_depth)
            .follow_links(config.follow_symlinks);

        Self {
            inner: walker.into_iter(),
            config,
        }
    }

    fn process_entry(&self, entry: &DirEntry) -> Result<RawFileMetadata> {
        if !self.config.include_hidden && is_hidden(entry) {
            return Err(UploaderError::Skipped {
                path: entry.path().to_path_buf(),
                reason: SkipReason::Hidden,
            });
        }

        let metadata = entry.metadata().map_err(|_| UploaderError::Skipped {
            path: entry.path().to_path_buf(),
            reason: SkipReason::MetadataUnreadable,
        })?;

        if metadata.is_dir() {
            return Err(UploaderError::Skipped {
                path: entry.path().to_path_buf(),
                reason: SkipReason::IsDir,
            });
        }

        Ok(RawFileMetadata {
            path: entry.path().to_path_buf(),
            size: metadata.len(),
            is_file: metadata.is_file(),
            is_symlink: metadata.file_type().is_symlink(),
        })
    }
}

impl Iterator for Scanner {
    type Item = Result<RawFileMetadata>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Ok(entry) => {
                // Don't descend into hidden directories when they are excluded.
                if !self.config.include_hidden && entry.file_type().is_dir() && is_hidden(&entry) {
                    self.inner.skip_current_dir();
                }
                Some(self.process_entry(&entry))
            }
            Err(err) => {
                // Keep the failing entry's path so per-file reports don't
                // blame the root directory.
                let path = err
                    .path()
                    .map(std::path::Path::to_path_buf)
                    .unwrap_or_default();
                Some(Err(UploaderError::Walk {
                    path,
                    source: io::Error::other(err),
                }))
            }
        }
    }
}

/// UNIX hidden detection (dotfiles)
#[cfg(unix)]
fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Windows hidden detection (dotfile OR FILE_ATTRIBUTE_HIDDEN)
#[cfg(windows)]
fn is_hidden(entry: &DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    if entry.file_name().to_string_lossy().starts_with('.') {
        return true;
    }
    if let Ok(metadata) = entry.metadata() {
        return (metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN) != 0;
    }
    false
}

/// Extension trait for filtering scan results
pub trait ScannerExt: Iterator<Item = Result<RawFileMetadata>> + Sized {
    fn filter_ok(self) -> impl Iterator<Item = RawFileMetadata>;
    fn filter_skipped(self) -> impl Iterator<Item = (PathBuf, SkipReason)>;
}

impl<I> ScannerExt for I
where
    I: Iterator<Item = Result<RawFileMetadata>>,
{
    fn filter_ok(self) -> impl Iterator<Item = RawFileMetadata> {
        self.filter_map(|res| match res {
            Ok(file) => Some(file),
            _ => None,
        })
    }

    fn filter_skipped(self) -> impl Iterator<Item = (PathBuf, SkipReason)> {
        self.filter_map(|res| match res {
            Err(UploaderError::Skipped { path, reason }) => Some((path, reason)),
            _ => None,
        })
    }
}
