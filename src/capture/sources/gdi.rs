//! Win32 GDI capture source.
//!
//! Classic GDI screenshot sequence: take the desktop window's device
//! context, blit it into a compatible bitmap selected into a memory
//! context, then read the pixels back as a top-down 32-bit DIB.
//! Every acquired handle is wrapped in a guard so it is released in
//! reverse acquisition order on success and failure alike.

use core::ffi::c_void;
use std::mem;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC,
    DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, GetDIBits, HBITMAP, HDC, HGDIOBJ, ReleaseDC,
    SRCCOPY, SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{GetClientRect, GetDesktopWindow};

use crate::capture::frame::{Frame, dib_stride};
use crate::capture::types::CaptureError;

/// Device context borrowed from a window, released on drop.
struct WindowDc {
    hwnd: HWND,
    hdc: HDC,
}

impl WindowDc {
    fn acquire(hwnd: HWND) -> Result<Self, CaptureError> {
        let hdc = unsafe { GetDC(Some(hwnd)) };
        if hdc.is_invalid() {
            return Err(CaptureError::Graphics { call: "GetDC" });
        }
        Ok(Self { hwnd, hdc })
    }
}

impl Drop for WindowDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(Some(self.hwnd), self.hdc);
        }
    }
}

/// Off-screen memory context, deleted on drop.
struct MemoryDc {
    hdc: HDC,
}

impl MemoryDc {
    fn compatible_with(screen: &WindowDc) -> Result<Self, CaptureError> {
        let hdc = unsafe { CreateCompatibleDC(Some(screen.hdc)) };
        if hdc.is_invalid() {
            return Err(CaptureError::Graphics {
                call: "CreateCompatibleDC",
            });
        }
        Ok(Self { hdc })
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.hdc);
        }
    }
}

/// Bitmap matching the screen's color format, deleted on drop.
struct CompatibleBitmap {
    handle: HBITMAP,
}

impl CompatibleBitmap {
    fn create(screen: &WindowDc, width: i32, height: i32) -> Result<Self, CaptureError> {
        let handle = unsafe { CreateCompatibleBitmap(screen.hdc, width, height) };
        if handle.is_invalid() {
            return Err(CaptureError::Graphics {
                call: "CreateCompatibleBitmap",
            });
        }
        Ok(Self { handle })
    }
}

impl Drop for CompatibleBitmap {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.handle.into());
        }
    }
}

/// Keeps the bitmap selected into the memory context; restores the
/// previously selected object on drop.
struct Selection {
    hdc: HDC,
    previous: HGDIOBJ,
}

impl Selection {
    fn select(target: &MemoryDc, bitmap: &CompatibleBitmap) -> Result<Self, CaptureError> {
        let previous = unsafe { SelectObject(target.hdc, bitmap.handle.into()) };
        if previous.is_invalid() {
            return Err(CaptureError::Graphics {
                call: "SelectObject",
            });
        }
        Ok(Self {
            hdc: target.hdc,
            previous,
        })
    }
}

impl Drop for Selection {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.hdc, self.previous);
        }
    }
}

pub(crate) fn capture_desktop() -> Result<Frame, CaptureError> {
    let hwnd = unsafe { GetDesktopWindow() };

    let mut rect = RECT::default();
    unsafe { GetClientRect(hwnd, &mut rect) }.map_err(|_| CaptureError::Graphics {
        call: "GetClientRect",
    })?;

    let width = rect.right - rect.left;
    let height = rect.bottom - rect.top;
    if width <= 0 || height <= 0 {
        return Err(CaptureError::InvalidDimensions { width, height });
    }
    log::debug!("Desktop client rectangle: {width}x{height}");

    let screen = WindowDc::acquire(hwnd)?;
    let memory = MemoryDc::compatible_with(&screen)?;
    let bitmap = CompatibleBitmap::create(&screen, width, height)?;
    let _selection = Selection::select(&memory, &bitmap)?;

    unsafe { BitBlt(memory.hdc, 0, 0, width, height, Some(screen.hdc), 0, 0, SRCCOPY) }
        .map_err(|_| CaptureError::Graphics { call: "BitBlt" })?;

    let stride = dib_stride(width as u32, 32);
    let mut data = vec![0u8; stride * height as usize];

    let mut info = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            // Negative height requests top-down rows, so no flip later.
            biHeight: -height,
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let copied = unsafe {
        GetDIBits(
            screen.hdc,
            bitmap.handle,
            0,
            height as u32,
            Some(data.as_mut_ptr() as *mut c_void),
            &mut info,
            DIB_RGB_COLORS,
        )
    };
    if copied == 0 {
        return Err(CaptureError::Graphics { call: "GetDIBits" });
    }

    Frame::from_bgra(width as u32, height as u32, stride, &data)
}
