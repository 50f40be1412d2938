/// Off-screen re-encoding at an adjustable quality
///
/// Each invocation is independent: the original bytes are re-decoded from
/// scratch, drawn onto a fresh surface and re-encoded. Overlapping calls
/// (rapid slider drags) are neither serialized nor cancelled; the caller
/// decides which completion to keep via the sequence number it attached.

use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{imageops, DynamicImage, GenericImageView, RgbaImage};
use tokio::task;
use tracing::debug;

use crate::error::{PressError, PressResult};
use crate::media::format::MediaFormat;
use crate::media::loader;
use crate::state::quality::Quality;
use crate::state::session::CompressedArtifact;

/// Re-encode `bytes` at `quality` on a blocking worker thread.
pub async fn compress(
    bytes: Arc<Vec<u8>>,
    format: MediaFormat,
    quality: Quality,
) -> PressResult<CompressedArtifact> {
    // Decode and encode are CPU-bound, keep them off the UI executor
    task::spawn_blocking(move || compress_blocking(&bytes, format, quality))
        .await
        .map_err(|e| PressError::Encode(format!("worker task failed: {e}")))?
}

/// Blocking implementation of the decode -> draw -> encode pipeline.
pub fn compress_blocking(
    bytes: &[u8],
    format: MediaFormat,
    quality: Quality,
) -> PressResult<CompressedArtifact> {
    let bitmap = loader::decode(bytes)?;
    let (width, height) = bitmap.dimensions();

    // Off-screen surface at the bitmap's natural size, drawn at the origin
    // with identity scale. No downscaling, no orientation correction.
    let mut surface = RgbaImage::new(width, height);
    imageops::replace(&mut surface, &bitmap.to_rgba8(), 0, 0);

    let output = format.output();
    let mut encoded = Vec::new();
    match output {
        MediaFormat::Png => {
            // Lossless path: the quality factor is accepted but has no effect
            let encoder = PngEncoder::new(&mut encoded);
            surface
                .write_with_encoder(encoder)
                .map_err(|e| PressError::Encode(e.to_string()))?;
        }
        MediaFormat::Jpeg => {
            // The encoder expresses the normalized quality factor as a percentage
            let percent = (quality.factor() * 100.0).round() as u8;
            let encoder = JpegEncoder::new_with_quality(&mut encoded, percent);
            // JPEG has no alpha channel, flatten the surface first
            let flattened = DynamicImage::ImageRgba8(surface).to_rgb8();
            flattened
                .write_with_encoder(encoder)
                .map_err(|e| PressError::Encode(e.to_string()))?;
        }
    }

    if encoded.is_empty() {
        return Err(PressError::Encode("encoder produced no data".to_string()));
    }

    debug!(
        width,
        height,
        quality = quality.percent(),
        input = bytes.len(),
        output = encoded.len(),
        "re-encoded image"
    );

    Ok(CompressedArtifact {
        format: output,
        size: encoded.len() as u64,
        bytes: encoded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// A small gradient so JPEG actually has something to quantize.
    fn sample_bitmap() -> RgbaImage {
        RgbaImage::from_fn(32, 24, |x, y| {
            Rgba([(x * 8) as u8, (y * 10) as u8, 128, 255])
        })
    }

    fn sample_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        sample_bitmap()
            .write_with_encoder(PngEncoder::new(&mut bytes))
            .unwrap();
        bytes
    }

    fn sample_jpeg() -> Vec<u8> {
        let mut bytes = Vec::new();
        let flattened = DynamicImage::ImageRgba8(sample_bitmap()).to_rgb8();
        flattened
            .write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, 90))
            .unwrap();
        bytes
    }

    #[test]
    fn test_png_input_stays_png() {
        let artifact =
            compress_blocking(&sample_png(), MediaFormat::Png, Quality::new(10)).unwrap();
        assert_eq!(artifact.format, MediaFormat::Png);
        // PNG signature
        assert_eq!(&artifact.bytes[..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(artifact.size, artifact.bytes.len() as u64);
    }

    #[test]
    fn test_jpeg_input_stays_jpeg() {
        let artifact =
            compress_blocking(&sample_jpeg(), MediaFormat::Jpeg, Quality::new(50)).unwrap();
        assert_eq!(artifact.format, MediaFormat::Jpeg);
        // JPEG start-of-image marker
        assert_eq!(&artifact.bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_garbage_bytes_signal_decode_failure() {
        let result = compress_blocking(&[0u8; 64], MediaFormat::Jpeg, Quality::default());
        assert!(matches!(result, Err(PressError::Decode(_))));
    }

    #[test]
    fn test_same_input_and_quality_is_stable() {
        let input = sample_jpeg();
        let first = compress_blocking(&input, MediaFormat::Jpeg, Quality::new(40)).unwrap();
        let second = compress_blocking(&input, MediaFormat::Jpeg, Quality::new(40)).unwrap();
        assert_eq!(first.size, second.size);
    }

    #[tokio::test]
    async fn test_async_wrapper_propagates_decode_failure() {
        let bytes = Arc::new(vec![0u8; 64]);
        let result = compress(bytes, MediaFormat::Jpeg, Quality::default()).await;
        assert!(matches!(result, Err(PressError::Decode(_))));
    }
}
