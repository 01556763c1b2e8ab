//! Library exports for the deskshot capture pipeline.
//!
//! Exposes the frame conversion and PNG saving logic so integration
//! tests (and other binaries) can exercise them without touching the
//! platform capture backends.

pub mod capture;

pub use capture::{CaptureError, Frame, SaveError};
