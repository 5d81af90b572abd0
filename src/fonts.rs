/*
 *  fonts.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Size-variant glyph metrics over the embedded-graphics font tables.
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

use embedded_graphics::geometry::Point;
use embedded_graphics::image::GetPixel;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_5X8, FONT_6X12};
use embedded_graphics::prelude::*;

/// Text size variant selected by the draw-call flags.
///
/// Variants are mutually exclusive; the precedence when several flags are
/// OR'd together is `Double > Mid > Small > Standard`, made structural by
/// [`crate::text::LcdFlags::font_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Standard,
    Mid,
    Double,
}

/// Read-only glyph resource: a pre-supplied bitmap table plus an integer
/// scale. DOUBLE reuses the standard table and renders each glyph pixel
/// as a 2x2 block.
#[derive(Clone, Copy)]
pub struct Font {
    mono: &'static MonoFont<'static>,
    scale: i32,
}

/// Glyph table and scale for a size variant.
pub fn font_for(size: FontSize) -> Font {
    match size {
        FontSize::Small => Font {
            mono: &FONT_4X6,
            scale: 1,
        },
        FontSize::Standard => Font {
            mono: &FONT_5X8,
            scale: 1,
        },
        FontSize::Mid => Font {
            mono: &FONT_6X12,
            scale: 1,
        },
        FontSize::Double => Font {
            mono: &FONT_5X8,
            scale: 2,
        },
    }
}

impl Font {
    /// Unscaled glyph cell width, including inter-character spacing.
    pub fn glyph_cols(&self) -> i32 {
        (self.mono.character_size.width + self.mono.character_spacing) as i32
    }

    /// Unscaled glyph cell height.
    pub fn glyph_rows(&self) -> i32 {
        self.mono.character_size.height as i32
    }

    /// Pixel-doubling factor (2 for DOUBLE, else 1).
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// On-screen cursor advance per character.
    pub fn advance(&self) -> i32 {
        self.glyph_cols() * self.scale
    }

    /// On-screen cell height.
    pub fn cell_height(&self) -> i32 {
        self.glyph_rows() * self.scale
    }

    /// On-screen width of a whole string.
    pub fn text_width(&self, s: &str) -> i32 {
        s.chars().count() as i32 * self.advance()
    }

    /// Whether the unscaled glyph pixel `(gx, gy)` of `c` is set.
    ///
    /// Coordinates outside the glyph's bitmap (the spacing column, or any
    /// clipped request) read as unset. The table stores glyphs in a grid
    /// inside one packed image; unknown characters resolve to the table's
    /// replacement glyph.
    pub fn glyph_pixel(&self, c: char, gx: i32, gy: i32) -> bool {
        let gw = self.mono.character_size.width as i32;
        let gh = self.mono.character_size.height as i32;
        if gx < 0 || gy < 0 || gx >= gw || gy >= gh {
            return false;
        }
        let index = self.mono.glyph_mapping.index(c) as i32;
        let per_row = (self.mono.image.size().width as i32 / gw).max(1);
        let origin = Point::new((index % per_row) * gw, (index / per_row) * gh);
        self.mono
            .image
            .pixel(origin + Point::new(gx, gy))
            .is_some_and(|p| p.is_on())
    }
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("character_size", &self.mono.character_size)
            .field("scale", &self.scale)
            .finish()
    }
}
