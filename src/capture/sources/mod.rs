use crate::capture::frame::Frame;
use crate::capture::types::CaptureError;

#[cfg(windows)]
mod gdi;

/// Grab the desktop through the platform capture source.
#[cfg(windows)]
pub(crate) fn capture_desktop() -> Result<Frame, CaptureError> {
    gdi::capture_desktop()
}

/// No capture source exists for this platform yet.
#[cfg(not(windows))]
pub(crate) fn capture_desktop() -> Result<Frame, CaptureError> {
    Err(CaptureError::Unsupported(std::env::consts::OS))
}
