use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use phf::{Set, phf_set};

/// Pinned extension tables. Classification must behave the same on every
/// platform, so the fixed sets are checked before any MIME guessing and the
/// fallback uses mime_guess's compiled table, never the host MIME database.
static IMAGE_EXTENSIONS: Set<&'static str> = phf_set! {
    "jpg", "jpeg", "png", "svg", "webp",
};

static AUDIO_EXTENSIONS: Set<&'static str> = phf_set! {
    "mp3", "mp4", "wmv", "3gp", "webm",
};

static DOCUMENT_EXTENSIONS: Set<&'static str> = phf_set! {
    "doc", "docx", "csv", "pdf",
};

/// Semantic type label for a file. The fixed variants cover the pinned
/// extension sets; everything else falls back to the primary component of a
/// guessed MIME type ("text", "application", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeLabel {
    Image,
    Audio,
    Document,
    Mime(String),
}

impl TypeLabel {
    pub fn as_str(&self) -> &str {
        match self {
            TypeLabel::Image => "image",
            TypeLabel::Audio => "audio",
            TypeLabel::Document => "document",
            TypeLabel::Mime(primary) => primary,
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Infer a type label from a file name. Returns `None` when nothing can be
/// inferred (no extension, non-UTF-8 extension, or an extension with no
/// guessable MIME type); an unrecognized file is a skip, never an error.
pub fn classify(path: &Path) -> Option<TypeLabel> {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)?;

    if IMAGE_EXTENSIONS.contains(ext.as_str()) {
        return Some(TypeLabel::Image);
    }
    if AUDIO_EXTENSIONS.contains(ext.as_str()) {
        return Some(TypeLabel::Audio);
    }
    if DOCUMENT_EXTENSIONS.contains(ext.as_str()) {
        return Some(TypeLabel::Document);
    }

    let mime = mime_guess::from_ext(&ext).first()?;
    Some(TypeLabel::Mime(mime.type_().as_str().to_string()))
}

/// Ephemeral per-file unit of work: source path, object name (the base
/// filename), and the inferred label. Consumed immediately by the router.
#[derive(Debug, Clone)]
pub struct FileTask {
    pub path: PathBuf,
    pub object_name: String,
    pub label: TypeLabel,
}

impl FileTask {
    pub fn from_path(path: &Path) -> Option<Self> {
        let label = classify(path)?;
        let object_name = path.file_name()?.to_string_lossy().into_owned();

        Some(Self {
            path: path.to_path_buf(),
            object_name,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_sets_win_over_mime_guess() {
        // mp4 and webm would be "video" by MIME; the pinned table says audio.
        assert_eq!(classify(Path::new("clip.mp4")), Some(TypeLabel::Audio));
        assert_eq!(classify(Path::new("clip.webm")), Some(TypeLabel::Audio));
        // csv would be "text" by MIME; the pinned table says document.
        assert_eq!(classify(Path::new("table.csv")), Some(TypeLabel::Document));
    }

    #[test]
    fn file_task_uses_base_filename_as_object_name() {
        let task = FileTask::from_path(Path::new("/data/photos/holiday.png")).unwrap();
        assert_eq!(task.object_name, "holiday.png");
        assert_eq!(task.label, TypeLabel::Image);
    }
}
