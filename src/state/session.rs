/// The active compression session
///
/// One file context at a time: accepting a new file replaces everything that
/// belonged to the previous one in a single step, so stale artifacts can
/// never outlive the file they were produced from.

use std::sync::Arc;

use crate::media::format::MediaFormat;

/// A validated, fully-read input file.
///
/// Replaced wholesale when the next valid selection is accepted; never
/// partially mutated.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// Display name, e.g. "holiday.jpeg"
    pub name: String,
    /// The declared media-type label the file was validated against
    pub media_type: String,
    /// Parsed format (PNG or JPEG)
    pub format: MediaFormat,
    /// Byte length of the content
    pub size: u64,
    /// File content, shared cheaply with background compress tasks
    pub bytes: Arc<Vec<u8>>,
}

/// The byte buffer produced by one successful re-encode.
///
/// Only the most recent artifact is kept; no history.
#[derive(Debug, Clone)]
pub struct CompressedArtifact {
    /// Output format: PNG for PNG input, JPEG for everything else
    pub format: MediaFormat,
    /// Encoded byte length
    pub size: u64,
    /// Encoded content
    pub bytes: Vec<u8>,
}

/// Session state: the selected file and its latest compressed output.
///
/// Lives for the lifetime of the application window; there is no teardown.
#[derive(Debug, Default)]
pub struct Session {
    file: Option<SelectedFile>,
    artifact: Option<CompressedArtifact>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a validated file, atomically discarding the previous file and
    /// any artifact compressed from it.
    pub fn accept(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.artifact = None;
    }

    /// Record the latest compressed output. Ignored while no file is
    /// selected: an artifact can only exist alongside its original.
    pub fn set_artifact(&mut self, artifact: CompressedArtifact) {
        if self.file.is_some() {
            self.artifact = Some(artifact);
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn artifact(&self) -> Option<&CompressedArtifact> {
        self.artifact.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            media_type: "image/png".to_string(),
            format: MediaFormat::Png,
            size: 4,
            bytes: Arc::new(vec![0u8; 4]),
        }
    }

    fn sample_artifact() -> CompressedArtifact {
        CompressedArtifact {
            format: MediaFormat::Png,
            size: 2,
            bytes: vec![0u8; 2],
        }
    }

    #[test]
    fn test_starts_empty() {
        let session = Session::new();
        assert!(!session.is_loaded());
        assert!(session.file().is_none());
        assert!(session.artifact().is_none());
    }

    #[test]
    fn test_accept_replaces_file_and_clears_artifact() {
        let mut session = Session::new();
        session.accept(sample_file("a.png"));
        session.set_artifact(sample_artifact());
        assert!(session.artifact().is_some());

        session.accept(sample_file("b.png"));
        assert_eq!(session.file().map(|f| f.name.as_str()), Some("b.png"));
        assert!(session.artifact().is_none());
    }

    #[test]
    fn test_artifact_requires_a_file() {
        let mut session = Session::new();
        session.set_artifact(sample_artifact());
        assert!(session.artifact().is_none());
    }

    #[test]
    fn test_artifact_is_replaced_not_accumulated() {
        let mut session = Session::new();
        session.accept(sample_file("a.png"));
        session.set_artifact(CompressedArtifact {
            format: MediaFormat::Png,
            size: 10,
            bytes: vec![1u8; 10],
        });
        session.set_artifact(sample_artifact());
        assert_eq!(session.artifact().map(|a| a.size), Some(2));
    }
}
