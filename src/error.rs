/// Error types for the compression pipeline
///
/// Every failure ends the operation that triggered it and is surfaced to the
/// user through the notification banner. None of them are fatal: the user can
/// always pick another file or move the slider again.

use thiserror::Error;

/// All the ways a pipeline attempt can fail.
///
/// The `Display` strings double as the user-facing banner text, so they are
/// written as plain sentences rather than debug output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PressError {
    /// The declared media type is not PNG or JPEG
    #[error("Please choose a PNG, JPG or JPEG image ({0} is not supported)")]
    UnsupportedType(String),

    /// The file exceeds the 10 MB intake ceiling; carries the offending size
    #[error("Image is too large. Please pick one under 10 MB")]
    TooLarge(u64),

    /// The bytes could not be decoded into a bitmap
    #[error("Failed to load the image. The file may be corrupt ({0})")]
    Decode(String),

    /// The encoder produced no usable output
    #[error("Compression failed, please try again ({0})")]
    Encode(String),

    /// Download was requested before anything was compressed
    #[error("Upload and compress an image first")]
    NoArtifact,

    /// Reading or writing the file on disk failed
    #[error("File error: {0}")]
    Io(String),
}

/// Convenience result type for pipeline operations.
pub type PressResult<T> = Result<T, PressError>;
