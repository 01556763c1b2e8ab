//! PNG encoding and file output for captured frames.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use super::frame::Frame;
use super::types::SaveError;

/// Output file name, fixed under the user's home directory.
pub const OUTPUT_FILE_NAME: &str = "ss.png";

/// Resolve the destination path: `<home>/ss.png`.
pub fn default_output_path() -> Result<PathBuf, SaveError> {
    dirs::home_dir()
        .map(|home| home.join(OUTPUT_FILE_NAME))
        .ok_or(SaveError::UserLookup)
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: RgbaImage) -> Result<Vec<u8>, SaveError> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Encode a frame and write it to `path`, overwriting any existing file.
///
/// Encoding happens fully in memory before the file is created, so an
/// encode failure leaves no file behind.
pub fn save_screenshot(frame: Frame, path: &Path) -> Result<PathBuf, SaveError> {
    let image = frame.into_image().ok_or(SaveError::MalformedImage)?;
    let data = encode_png(image)?;

    log::info!(
        "Saving screenshot to: {} ({} bytes)",
        path.display(),
        data.len()
    );

    fs::write(path, &data).map_err(|source| SaveError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::dib_stride;
    use tempfile::TempDir;

    /// Builds a frame whose every source pixel is BGRX red.
    fn solid_red_frame(width: u32, height: u32) -> Frame {
        let stride = dib_stride(width, 32);
        let mut data = vec![0u8; stride * height as usize];
        for row in data.chunks_mut(stride) {
            for px in row[..width as usize * 4].chunks_mut(4) {
                px.copy_from_slice(&[0, 0, 255, 0]);
            }
        }
        Frame::from_bgra(width, height, stride, &data).unwrap()
    }

    #[test]
    fn default_path_points_at_home() {
        let path = default_output_path().unwrap();
        assert!(path.ends_with(OUTPUT_FILE_NAME));
        assert!(path.parent().is_some());
    }

    #[test]
    fn encode_produces_png_bytes() {
        let image = solid_red_frame(4, 4).into_image().unwrap();
        let data = encode_png(image).unwrap();
        // PNG signature
        assert_eq!(&data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn saved_file_round_trips_solid_red() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ss.png");

        save_screenshot(solid_red_frame(8, 5), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 5));
        assert!(decoded.pixels().all(|px| px.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn overwriting_an_existing_file_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ss.png");

        save_screenshot(solid_red_frame(2, 2), &path).unwrap();
        save_screenshot(solid_red_frame(4, 4), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
    }

    #[test]
    fn missing_destination_directory_is_a_create_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("ss.png");

        let err = save_screenshot(solid_red_frame(2, 2), &path).unwrap_err();
        assert!(matches!(err, SaveError::Create { .. }));
        assert!(!path.exists());
    }
}
