/// Image intake and re-encoding module
///
/// This module handles:
/// - Media-type labels and output format selection (format.rs)
/// - Reading picked files and decoding bitmaps (loader.rs)
/// - The off-screen draw + re-encode pipeline (compressor.rs)

pub mod compressor;
pub mod format;
pub mod loader;
