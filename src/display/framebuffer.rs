/*
 *  display/framebuffer.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Bit-packed framebuffer with a single bounds-checked pixel path.
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

use core::convert::Infallible;

use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::display::traits::{ColorDepth, DisplayCapabilities};

/// Where a pixel lives inside its byte.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Monochrome: single bit, mask `1 << (y % 8)`
    Bit(u8),
    /// Gray4: low nibble (even rows)
    Low,
    /// Gray4: high nibble (odd rows)
    High,
}

/// In-memory pixel grid mirroring the physical panel.
///
/// Storage is packed to the panel's native wire format:
/// - monochrome: byte `(y/8)*W + x` holds 8 stacked rows, bit `y % 8`;
/// - 4-bit grayscale: byte `(y/2)*W + x` holds two rows, low nibble even.
///
/// The buffer is allocated once and never resized. Every read and write
/// goes through [`Self::locate`], so out-of-range coordinates are a silent
/// no-op rather than a fault; UI code never needs its own bounds checks.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    depth: ColorDepth,
    buf: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a zeroed framebuffer for the given panel.
    pub fn new(caps: &DisplayCapabilities) -> Self {
        Self {
            width: caps.width,
            height: caps.height,
            depth: caps.color_depth,
            buf: vec![0u8; caps.buffer_len()],
        }
    }

    /// Convenience constructor used heavily by tests.
    pub fn with_size(width: u32, height: u32, depth: ColorDepth) -> Self {
        Self::new(&DisplayCapabilities {
            width,
            height,
            color_depth: depth,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Full intensity for this depth: 1 for monochrome, 15 for grayscale.
    pub fn max_level(&self) -> u8 {
        match self.depth {
            ColorDepth::Monochrome => 1,
            ColorDepth::Gray4 => 0x0F,
        }
    }

    /// Map `(x, y)` to a byte index and an in-byte slot.
    ///
    /// The single audited packing path; returns `None` for any coordinate
    /// outside `[0,W) x [0,H)`.
    #[inline]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, Slot)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let (x, y, w) = (x as usize, y as usize, self.width as usize);
        match self.depth {
            ColorDepth::Monochrome => Some(((y / 8) * w + x, Slot::Bit(1 << (y % 8)))),
            ColorDepth::Gray4 => {
                let slot = if y % 2 == 0 { Slot::Low } else { Slot::High };
                Some(((y / 2) * w + x, slot))
            }
        }
    }

    /// Write `level` at `(x, y)`; out-of-range coordinates are a no-op.
    ///
    /// In monochrome mode any nonzero level sets the pixel and zero clears
    /// it. In grayscale mode the low 4 bits are stored as-is.
    pub fn set_pixel(&mut self, x: i32, y: i32, level: u8) {
        if let Some((idx, slot)) = self.locate(x, y) {
            let byte = &mut self.buf[idx];
            match slot {
                Slot::Bit(mask) => {
                    if level != 0 {
                        *byte |= mask;
                    } else {
                        *byte &= !mask;
                    }
                }
                Slot::Low => *byte = (*byte & 0xF0) | (level & 0x0F),
                Slot::High => *byte = (*byte & 0x0F) | ((level & 0x0F) << 4),
            }
        }
    }

    /// Read the pixel at `(x, y)`; out-of-range reads return background (0).
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        match self.locate(x, y) {
            Some((idx, Slot::Bit(mask))) => u8::from(self.buf[idx] & mask != 0),
            Some((idx, Slot::Low)) => self.buf[idx] & 0x0F,
            Some((idx, Slot::High)) => self.buf[idx] >> 4,
            None => 0,
        }
    }

    /// Reset every pixel to background.
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Packed byte image in the panel's wire format, for the display sink.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// embedded-graphics seam: lets application layers render its primitives
/// straight into the packed buffer. `On` maps to full intensity.
impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let max = self.max_level();
        for Pixel(p, c) in pixels {
            self.set_pixel(p.x, p.y, if c.is_on() { max } else { 0 });
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        if color.is_on() {
            let max = self.max_level();
            for y in 0..self.height as i32 {
                for x in 0..self.width as i32 {
                    self.set_pixel(x, y, max);
                }
            }
        } else {
            self.buf.fill(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_packing_bands_of_eight() {
        let mut fb = FrameBuffer::with_size(128, 64, ColorDepth::Monochrome);
        fb.set_pixel(0, 0, 1);
        fb.set_pixel(0, 7, 1);
        fb.set_pixel(1, 8, 1);
        assert_eq!(fb.as_bytes()[0], 0b1000_0001);
        assert_eq!(fb.as_bytes()[128 + 1], 0b0000_0001);
        assert_eq!(fb.get_pixel(0, 0), 1);
        assert_eq!(fb.get_pixel(0, 1), 0);
    }

    #[test]
    fn gray4_packing_nibble_pairs() {
        let mut fb = FrameBuffer::with_size(212, 64, ColorDepth::Gray4);
        fb.set_pixel(3, 0, 0x9);
        fb.set_pixel(3, 1, 0xC);
        assert_eq!(fb.as_bytes()[3], 0xC9);
        assert_eq!(fb.get_pixel(3, 0), 0x9);
        assert_eq!(fb.get_pixel(3, 1), 0xC);
        // overwrite one nibble, the other must survive
        fb.set_pixel(3, 0, 0x2);
        assert_eq!(fb.as_bytes()[3], 0xC2);
    }

    #[test]
    fn out_of_range_writes_are_silent() {
        let mut fb = FrameBuffer::with_size(128, 64, ColorDepth::Monochrome);
        let blank = fb.as_bytes().to_vec();
        fb.set_pixel(-1, 0, 1);
        fb.set_pixel(0, -1, 1);
        fb.set_pixel(128, 0, 1);
        fb.set_pixel(0, 64, 1);
        fb.set_pixel(i32::MIN, i32::MAX, 1);
        assert_eq!(fb.as_bytes(), &blank[..]);
        assert_eq!(fb.get_pixel(-5, 1000), 0);
    }

    #[test]
    fn clear_resets_to_background() {
        let mut fb = FrameBuffer::with_size(212, 64, ColorDepth::Gray4);
        fb.set_pixel(10, 10, 0xF);
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn buffer_len_matches_depth() {
        let mono = FrameBuffer::with_size(128, 64, ColorDepth::Monochrome);
        assert_eq!(mono.as_bytes().len(), 128 * 8);
        let gray = FrameBuffer::with_size(212, 64, ColorDepth::Gray4);
        assert_eq!(gray.as_bytes().len(), 212 * 32);
    }

    #[test]
    fn draw_target_seam_writes_full_intensity() {
        use embedded_graphics::geometry::Point;
        use embedded_graphics::primitives::{Line, PrimitiveStyle};

        let mut fb = FrameBuffer::with_size(212, 64, ColorDepth::Gray4);
        Line::new(Point::new(0, 5), Point::new(10, 5))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.get_pixel(0, 5), 0xF);
        assert_eq!(fb.get_pixel(10, 5), 0xF);
        assert_eq!(fb.get_pixel(11, 5), 0);
    }
}
