//! Desktop screenshot capture.
//!
//! This module provides:
//! - A single `desktop()` entry point returning an RGBA frame
//! - Platform-specific capture sources selected at compile time
//! - PNG encoding and file saving

pub mod file;
pub mod types;

mod frame;
mod sources;

pub use frame::Frame;
#[allow(unused_imports)]
pub use frame::dib_stride;
pub use types::{CaptureError, SaveError};

/// Capture the entire desktop as an RGBA frame.
///
/// Queries the desktop dimensions at call time; every pixel in the
/// returned frame has a fully opaque alpha channel.
pub fn desktop() -> Result<Frame, CaptureError> {
    sources::capture_desktop()
}
