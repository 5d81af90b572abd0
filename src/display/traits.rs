/*
 *  display/traits.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Core trait definitions for the display sink abstraction.
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use crate::display::error::DisplayError;

/// Pixel encoding of a panel and its framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 1 bit per pixel, rows grouped in vertical bands of 8
    Monochrome,

    /// 4 bits per pixel, 16 levels, two vertically adjacent pixels per byte
    Gray4,
}

/// Dimensions and pixel encoding of a panel.
#[derive(Debug, Clone)]
pub struct DisplayCapabilities {
    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Color depth (monochrome or grayscale)
    pub color_depth: ColorDepth,
}

impl DisplayCapabilities {
    /// Packed framebuffer size in bytes for this panel.
    pub fn buffer_len(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        match self.color_depth {
            ColorDepth::Monochrome => w * h.div_ceil(8),
            ColorDepth::Gray4 => w * h.div_ceil(2),
        }
    }
}

/// The opaque sink a finished frame is handed to.
///
/// The rendering engine never talks to hardware itself; it produces a
/// packed byte image and passes it here. Implementations cover the real
/// panel controller and the mock used by the test suite.
pub trait DisplayDriver {
    /// Returns the capabilities of this display
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the display dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Initialize the display hardware
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Write a packed frame to the display
    ///
    /// The buffer layout matches [`crate::display::framebuffer::FrameBuffer::as_bytes`]
    /// for the panel's color depth and must be exactly
    /// [`DisplayCapabilities::buffer_len`] bytes long.
    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError>;

    /// Flush buffered pixel data to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Blank the panel
    fn clear(&mut self) -> Result<(), DisplayError>;
}
