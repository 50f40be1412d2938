/// Media-type labels and output format selection

use std::ffi::OsStr;
use std::path::Path;

/// The two formats the compressor accepts and emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Png,
    Jpeg,
}

impl MediaFormat {
    /// Parse a declared media-type label.
    ///
    /// JPEG has two accepted label variants; everything else is rejected.
    pub fn from_mime(label: &str) -> Option<Self> {
        match label {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Output format for the re-encode: PNG stays PNG, anything else is
    /// encoded as JPEG regardless of the exact input label.
    pub fn output(self) -> Self {
        match self {
            Self::Png => Self::Png,
            _ => Self::Jpeg,
        }
    }

    /// Extension used when saving an artifact to disk.
    pub fn download_extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Declared media type for a path, derived from its extension.
///
/// Mirrors how a file picker reports types: well-known image extensions get
/// their usual label (including types the validator will reject, so the
/// rejection message can name them), anything else a generic binary label.
pub fn mime_from_path(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let label = match extension.as_str() {
        "png" => "image/png",
        "jpeg" => "image/jpeg",
        "jpg" => "image/jpg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    };

    label.to_string()
}

/// Suggested file name for a saved artifact.
///
/// The original's last extension segment is stripped and `_compressed` is
/// appended, e.g. `photo.jpeg` becomes `photo_compressed.jpg`. A name with
/// no extension (or one whose only `.` leads the name) is kept whole.
pub fn download_file_name(original: &str, format: MediaFormat) -> String {
    let base = match original.rfind('.') {
        Some(index) if index > 0 => &original[..index],
        _ => original,
    };

    format!("{}_compressed.{}", base, format.download_extension())
}
