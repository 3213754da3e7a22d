#[cfg(test)]
mod tests {
    use std::path::Path;

    use proptest::prelude::*;

    use updraft::classifier::{FileTask, TypeLabel, classify};

    // ---------------------------
    // Pinned extension sets
    // ---------------------------

    #[test]
    fn test_image_extensions() {
        for name in ["a.jpg", "a.jpeg", "a.png", "a.svg", "a.webp"] {
            assert_eq!(classify(Path::new(name)), Some(TypeLabel::Image), "{name}");
        }
    }

    #[test]
    fn test_audio_extensions() {
        for name in ["a.mp3", "a.mp4", "a.wmv", "a.3gp", "a.webm"] {
            assert_eq!(classify(Path::new(name)), Some(TypeLabel::Audio), "{name}");
        }
    }

    #[test]
    fn test_document_extensions() {
        for name in ["a.doc", "a.docx", "a.csv", "a.pdf"] {
            assert_eq!(classify(Path::new(name)), Some(TypeLabel::Document), "{name}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify(Path::new("PHOTO.PNG")), Some(TypeLabel::Image));
        assert_eq!(classify(Path::new("Song.Mp3")), Some(TypeLabel::Audio));
        assert_eq!(classify(Path::new("REPORT.PDF")), Some(TypeLabel::Document));
    }

    // ---------------------------
    // MIME fallback
    // ---------------------------

    #[test]
    fn test_fallback_uses_mime_primary_type() {
        assert_eq!(
            classify(Path::new("notes.txt")),
            Some(TypeLabel::Mime("text".into()))
        );
        assert_eq!(
            classify(Path::new("page.html")),
            Some(TypeLabel::Mime("text".into()))
        );
        assert_eq!(
            classify(Path::new("data.json")),
            Some(TypeLabel::Mime("application".into()))
        );
        assert_eq!(
            classify(Path::new("movie.avi")),
            Some(TypeLabel::Mime("video".into()))
        );
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(TypeLabel::Image.as_str(), "image");
        assert_eq!(TypeLabel::Audio.as_str(), "audio");
        assert_eq!(TypeLabel::Document.as_str(), "document");
        assert_eq!(TypeLabel::Mime("text".into()).as_str(), "text");
    }

    // ---------------------------
    // Unclassifiable inputs — skips, never errors
    // ---------------------------

    #[test]
    fn test_unknown_extension_yields_none() {
        assert_eq!(classify(Path::new("unknown.xyz")), None);
        assert_eq!(classify(Path::new("weird.qqqq")), None);
    }

    #[test]
    fn test_no_extension_yields_none() {
        assert_eq!(classify(Path::new("Makefile")), None);
        assert_eq!(classify(Path::new("noext")), None);
        assert_eq!(classify(Path::new(".hidden")), None);
    }

    #[test]
    fn test_file_task_none_for_unclassifiable() {
        assert!(FileTask::from_path(Path::new("/tmp/unknown.xyz")).is_none());
    }

    proptest! {
        // classify is a total function of the name: any extension is either
        // labeled or skipped, and repeated calls agree.
        #[test]
        fn classify_never_panics_and_is_deterministic(ext in "[a-zA-Z0-9]{0,10}") {
            let name = format!("file.{ext}");
            let first = classify(Path::new(&name));
            let second = classify(Path::new(&name));
            prop_assert_eq!(first, second);
        }
    }
}
