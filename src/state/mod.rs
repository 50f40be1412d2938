/// State management module
///
/// This module holds all mutable application state:
/// - The active session: selected file and latest artifact (session.rs)
/// - The quality setting driven by the slider (quality.rs)

pub mod quality;
pub mod session;
