//! RGBA frame buffer produced by the capture sources.

use image::RgbaImage;

use crate::capture::types::CaptureError;

const BYTES_PER_PIXEL: usize = 4;

/// Row stride in bytes for a device-independent bitmap row.
///
/// Rows are padded out to 32-bit word boundaries. For 32-bit pixels the
/// result coincides with `width * 4`, but the word-aligned formula is
/// what the bitmap format specifies, so allocations use it.
pub fn dib_stride(width: u32, bits_per_pixel: u32) -> usize {
    ((width as usize * bits_per_pixel as usize).div_ceil(32)) * 4
}

/// A desktop-sized RGBA pixel buffer, row-major, top-to-bottom.
///
/// Alpha is forced to fully opaque on construction: the compositor does
/// not expose meaningful per-pixel transparency for screen content.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Builds a frame from a top-down 32-bit BGRA/BGRX readback buffer.
    ///
    /// # Arguments
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    /// * `stride` - Source row length in bytes, including alignment padding
    /// * `data` - Raw readback bytes, at least `stride * height` long
    ///
    /// The walk is an indexed loop over bounded slices, so a wrong stride
    /// surfaces as an error instead of a read past the buffer end.
    pub fn from_bgra(
        width: u32,
        height: u32,
        stride: usize,
        data: &[u8],
    ) -> Result<Self, CaptureError> {
        let (w, h) = (width as usize, height as usize);
        if w == 0 || h == 0 {
            return Err(CaptureError::InvalidDimensions {
                width: width as i32,
                height: height as i32,
            });
        }

        let row_bytes = w * BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(CaptureError::ShortBuffer {
                got: stride,
                need: row_bytes,
            });
        }
        let need = stride * h;
        if data.len() < need {
            return Err(CaptureError::ShortBuffer {
                got: data.len(),
                need,
            });
        }

        let mut pixels = Vec::with_capacity(w * h * BYTES_PER_PIXEL);
        for y in 0..h {
            let row = &data[y * stride..y * stride + row_bytes];
            for x in 0..w {
                let src = &row[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL];
                // BGRX in, RGBA out; the captured alpha byte is ignored.
                pixels.push(src[2]);
                pixels.push(src[1]);
                pixels.push(src[0]);
                pixels.push(u8::MAX);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` of them.
    #[allow(dead_code)]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Converts the frame into an `image` RGBA buffer for encoding.
    ///
    /// Returns `None` if the pixel count does not match the dimensions.
    pub fn into_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels)
    }
}
