/// File intake and bitmap decoding
///
/// Intake is gated by validation before any content is read, so an oversized
/// or mistyped file is rejected from its metadata alone.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;
use tracing::info;

use crate::error::{PressError, PressResult};
use crate::media::format;
use crate::state::session::SelectedFile;
use crate::validate;

/// Read a picked file from disk into a validated [`SelectedFile`].
///
/// # Errors
/// * `UnsupportedType` / `TooLarge` - validation failed
/// * `Io` - the file could not be statted or read
pub async fn load_file(path: PathBuf) -> PressResult<SelectedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let media_type = format::mime_from_path(&path);

    // Validate from metadata before touching the content
    let metadata = fs::metadata(&path)
        .await
        .map_err(|e| PressError::Io(e.to_string()))?;
    let media_format = validate::validate(&media_type, metadata.len())?;

    let bytes = fs::read(&path)
        .await
        .map_err(|e| PressError::Io(e.to_string()))?;
    let size = bytes.len() as u64;

    info!(name = %name, media_type = %media_type, size, "accepted image file");

    Ok(SelectedFile {
        name,
        media_type,
        format: media_format,
        size,
        bytes: Arc::new(bytes),
    })
}

/// Decode image bytes into a bitmap.
///
/// Corrupt or unsupported data signals a decode failure; there is no retry.
pub fn decode(bytes: &[u8]) -> PressResult<image::DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| PressError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_file_rejects_missing_path() {
        let result = load_file(PathBuf::from("/nonexistent/picture.png")).await;
        assert!(matches!(result, Err(PressError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_file_rejects_unsupported_type() {
        let path = std::env::temp_dir().join("pix_press_loader_test.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let result = load_file(path.clone()).await;
        std::fs::remove_file(&path).ok();

        assert_eq!(
            result.unwrap_err(),
            PressError::UnsupportedType("image/gif".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(&[0u8; 32]);
        assert!(matches!(result, Err(PressError::Decode(_))));
    }
}
