/// Intake validation
///
/// Files are gated before their content is read: the declared media type must
/// be PNG or JPEG and the size must stay within the intake ceiling. A failure
/// aborts the intake with no side effects on the current session.

use crate::error::{PressError, PressResult};
use crate::media::format::MediaFormat;

/// Largest accepted upload: 10 MiB, exclusive bound (exactly 10 MiB passes).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Check a file's declared media type and byte length.
///
/// Returns the parsed format on success so the caller does not have to parse
/// the label twice.
pub fn validate(media_type: &str, size: u64) -> PressResult<MediaFormat> {
    let format = MediaFormat::from_mime(media_type)
        .ok_or_else(|| PressError::UnsupportedType(media_type.to_string()))?;

    if size > MAX_FILE_SIZE {
        return Err(PressError::TooLarge(size));
    }

    Ok(format)
}
