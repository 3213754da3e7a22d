use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::storage::StorageError;

pub type Result<T, E = UploaderError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum UploaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid source path: {0}")]
    InvalidPath(PathBuf),

    #[error("Walk error at {path}: {source}")]
    Walk { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Skipped {path} ({reason})")]
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Why a scanned entry produced no upload attempt. Skips are routing
/// decisions, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No type label could be inferred from the file name.
    Unclassified,
    /// The label has no destination in the routing table.
    Unrouted,
    Hidden,
    IsDir,
    MetadataUnreadable,
}

impl SkipReason {
    pub const VARIANTS: [SkipReason; 5] = [
        SkipReason::Unclassified,
        SkipReason::Unrouted,
        SkipReason::Hidden,
        SkipReason::IsDir,
        SkipReason::MetadataUnreadable,
    ];

    #[inline]
    pub fn as_index(&self) -> usize {
        match self {
            SkipReason::Unclassified => 0,
            SkipReason::Unrouted => 1,
            SkipReason::Hidden => 2,
            SkipReason::IsDir => 3,
            SkipReason::MetadataUnreadable => 4,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::Unclassified => "no type label",
            SkipReason::Unrouted => "no destination for label",
            SkipReason::Hidden => "hidden",
            SkipReason::IsDir => "directory",
            SkipReason::MetadataUnreadable => "metadata unreadable",
        };
        write!(f, "{s}")
    }
}
