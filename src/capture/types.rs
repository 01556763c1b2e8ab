//! Error types for screenshot capture and saving.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while capturing the desktop.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// No capture source exists for the running platform.
    #[error("desktop capture is not supported on {0}")]
    Unsupported(&'static str),

    /// An OS graphics call failed; carries the name of the failing call.
    #[error("{call} failed")]
    Graphics { call: &'static str },

    /// The desktop reported a non-positive client rectangle.
    #[error("invalid desktop dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// The readback buffer is smaller than the dimensions require.
    #[error("pixel buffer too small: got {got} bytes, need {need}")]
    ShortBuffer { got: usize, need: usize },
}

/// Errors that can occur while encoding and writing the output file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The current user's home directory could not be resolved.
    #[error("could not determine the current user's home directory")]
    UserLookup,

    /// The destination file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The captured frame does not form a valid image.
    #[error("captured frame does not form a valid image")]
    MalformedImage,

    /// PNG serialization failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
