/*
 *  text.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Glyph layout, size variants, inversion, and numeric formatting.
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

use arrayvec::ArrayString;
use bitflags::bitflags;

use crate::display::framebuffer::FrameBuffer;
use crate::fonts::{self, Font, FontSize};

bitflags! {
    /// OR-combinable attributes attached to a draw call.
    ///
    /// The external convention stays a bitmask so menu code can write
    /// `INVERS | DBLSIZE | PREC1`; internally the mutually exclusive
    /// groups are resolved to tagged enums ([`LcdFlags::font_size`],
    /// [`LcdFlags::precision`]) so precedence is structural.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LcdFlags: u16 {
        /// Anchor numbers at `x` on the left (default is right-anchored)
        const LEFT    = 1 << 0;
        /// Swap foreground/background over the whole glyph cell
        const INVERS  = 1 << 1;
        /// Small size variant
        const SMLSIZE = 1 << 2;
        /// Mid size variant
        const MIDSIZE = 1 << 3;
        /// Double size variant: each glyph pixel becomes a 2x2 block
        const DBLSIZE = 1 << 4;
        /// One implied decimal: value is in tenths
        const PREC1   = 1 << 5;
        /// Two implied decimals: value is in hundredths
        const PREC2   = 1 << 6;
        /// Reinterpret the value's bit pattern as unsigned
        const UNSIGN  = 1 << 7;
        /// Line drawing: pattern "off" steps clear instead of skipping
        const FORCE   = 1 << 8;
    }
}

/// Implied decimal places for number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    None,
    /// Value is in tenths
    Tenths,
    /// Value is in hundredths
    Hundredths,
}

impl Precision {
    fn digits(self) -> usize {
        match self {
            Precision::None => 0,
            Precision::Tenths => 1,
            Precision::Hundredths => 2,
        }
    }
}

impl LcdFlags {
    /// Resolve the size-variant flags; `DBLSIZE > MIDSIZE > SMLSIZE`.
    pub fn font_size(self) -> FontSize {
        if self.contains(LcdFlags::DBLSIZE) {
            FontSize::Double
        } else if self.contains(LcdFlags::MIDSIZE) {
            FontSize::Mid
        } else if self.contains(LcdFlags::SMLSIZE) {
            FontSize::Small
        } else {
            FontSize::Standard
        }
    }

    /// Resolve the precision flags; `PREC2` wins when both are set.
    pub fn precision(self) -> Precision {
        if self.contains(LcdFlags::PREC2) {
            Precision::Hundredths
        } else if self.contains(LcdFlags::PREC1) {
            Precision::Tenths
        } else {
            Precision::None
        }
    }
}

/// Draw one glyph cell with per-pixel clipping.
///
/// Inverted cells paint their full background; normal cells only touch the
/// glyph's set pixels, so text composes over existing artwork. A cell that
/// lies fully outside the framebuffer is skipped outright.
fn draw_glyph(fb: &mut FrameBuffer, x: i32, y: i32, c: char, font: &Font, invers: bool) {
    let (w, h) = (fb.width() as i32, fb.height() as i32);
    let s = font.scale();
    if x >= w || y >= h || x.saturating_add(font.advance()) <= 0 || y.saturating_add(font.cell_height()) <= 0
    {
        return;
    }
    let max = fb.max_level();
    for gy in 0..font.glyph_rows() {
        for gx in 0..font.glyph_cols() {
            let on = font.glyph_pixel(c, gx, gy);
            let level = if invers {
                if on { 0 } else { max }
            } else if on {
                max
            } else {
                continue;
            };
            for sy in 0..s {
                for sx in 0..s {
                    fb.set_pixel(x + gx * s + sx, y + gy * s + sy, level);
                }
            }
        }
    }
}

/// Draw `s` left-to-right starting at `x`.
///
/// The logical cursor advances for every character, including ones whose
/// cells were clipped away, and the final cursor x is returned. Overflow
/// past the right edge is clipped, never wrapped.
pub fn draw_text(fb: &mut FrameBuffer, x: i32, y: i32, s: &str, flags: LcdFlags) -> i32 {
    let font = fonts::font_for(flags.font_size());
    let invers = flags.contains(LcdFlags::INVERS);
    let mut cx = x;
    for c in s.chars() {
        draw_glyph(fb, cx, y, c, &font, invers);
        cx = cx.saturating_add(font.advance());
    }
    cx
}

/// Format `value` per the `UNSIGN`/`PREC1`/`PREC2` flags.
///
/// The digit string always carries a leading digit before the implied
/// decimal point (`2` with PREC2 formats as `0.02`), and a `-` is emitted
/// for negative signed values only.
pub fn format_number(value: i32, flags: LcdFlags) -> ArrayString<16> {
    let unsign = flags.contains(LcdFlags::UNSIGN);
    let negative = !unsign && value < 0;
    let mut magnitude: u32 = if unsign {
        value as u32
    } else {
        value.unsigned_abs()
    };

    let point_at = flags.precision().digits();

    // digits collected least-significant first, zero-padded so the point
    // always lands after a leading digit
    let mut digits = [0u8; 10];
    let mut n = 0;
    loop {
        digits[n] = (magnitude % 10) as u8;
        magnitude /= 10;
        n += 1;
        if magnitude == 0 {
            break;
        }
    }
    while n <= point_at {
        digits[n] = 0;
        n += 1;
    }

    let mut out = ArrayString::<16>::new();
    if negative {
        out.push('-');
    }
    for i in (0..n).rev() {
        out.push(char::from(b'0' + digits[i]));
        if point_at > 0 && i == point_at {
            out.push('.');
        }
    }
    out
}

/// Format and draw a number, right-anchored at `x` unless `LEFT` is set.
///
/// Returns the final cursor x of the rendered text.
pub fn draw_number(fb: &mut FrameBuffer, x: i32, y: i32, value: i32, flags: LcdFlags) -> i32 {
    let s = format_number(value, flags);
    let anchor = if flags.contains(LcdFlags::LEFT) {
        x
    } else {
        let font = fonts::font_for(flags.font_size());
        x.saturating_sub(font.text_width(&s))
    };
    draw_text(fb, anchor, y, &s, flags)
}

/// Physical position of a three-way toggle switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchPos {
    Up,
    Mid,
    Down,
}

impl SwitchPos {
    /// Directional suffix glyph for the label.
    fn glyph(self) -> char {
        match self {
            SwitchPos::Up => '^',
            SwitchPos::Mid => '-',
            SwitchPos::Down => 'v',
        }
    }
}

/// One of the transmitter's toggle switches, `SA` through `SH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch {
    /// Switch index, 0 = `SA` .. 7 = `SH`
    pub index: u8,
    pub pos: SwitchPos,
}

impl Switch {
    /// Short display label: bank letter plus direction, e.g. `SA^`.
    pub fn label(&self) -> ArrayString<4> {
        let mut out = ArrayString::<4>::new();
        out.push('S');
        out.push(char::from(b'A' + self.index.min(7)));
        out.push(self.pos.glyph());
        out
    }
}

/// Resolve a switch to its label and render it via the text path.
pub fn draw_switch(fb: &mut FrameBuffer, x: i32, y: i32, sw: Switch, flags: LcdFlags) -> i32 {
    draw_text(fb, x, y, &sw.label(), flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::traits::ColorDepth;

    #[test]
    fn format_plain_and_negative() {
        assert_eq!(&format_number(0, LcdFlags::empty())[..], "0");
        assert_eq!(&format_number(1234567, LcdFlags::empty())[..], "1234567");
        assert_eq!(&format_number(-1234567, LcdFlags::empty())[..], "-1234567");
    }

    #[test]
    fn format_precision_inserts_point() {
        assert_eq!(&format_number(200, LcdFlags::PREC2)[..], "2.00");
        assert_eq!(&format_number(-150, LcdFlags::PREC1)[..], "-15.0");
        assert_eq!(&format_number(2, LcdFlags::PREC2)[..], "0.02");
        assert_eq!(&format_number(2, LcdFlags::PREC1)[..], "0.2");
        assert_eq!(&format_number(-5, LcdFlags::PREC2)[..], "-0.05");
    }

    #[test]
    fn format_unsigned_reinterprets_bits() {
        assert_eq!(&format_number(65530, LcdFlags::UNSIGN)[..], "65530");
        // a negative signed value displays as its unsigned magnitude
        assert_eq!(&format_number(-1, LcdFlags::UNSIGN)[..], "4294967295");
        assert_eq!(&format_number(i32::MIN, LcdFlags::empty())[..], "-2147483648");
    }

    #[test]
    fn size_precedence_is_structural() {
        assert_eq!(LcdFlags::empty().font_size(), FontSize::Standard);
        assert_eq!(LcdFlags::SMLSIZE.font_size(), FontSize::Small);
        assert_eq!(
            (LcdFlags::SMLSIZE | LcdFlags::MIDSIZE).font_size(),
            FontSize::Mid
        );
        assert_eq!(
            (LcdFlags::SMLSIZE | LcdFlags::MIDSIZE | LcdFlags::DBLSIZE).font_size(),
            FontSize::Double
        );
        assert_eq!(
            (LcdFlags::PREC1 | LcdFlags::PREC2).precision(),
            Precision::Hundredths
        );
    }

    #[test]
    fn switch_labels() {
        let sw = Switch {
            index: 0,
            pos: SwitchPos::Up,
        };
        assert_eq!(&sw.label()[..], "SA^");
        let sw = Switch {
            index: 7,
            pos: SwitchPos::Down,
        };
        assert_eq!(&sw.label()[..], "SHv");
        // out-of-range banks saturate rather than walk off the alphabet
        let sw = Switch {
            index: 200,
            pos: SwitchPos::Mid,
        };
        assert_eq!(&sw.label()[..], "SH-");
    }

    #[test]
    fn cursor_advances_past_clipped_glyphs() {
        let mut fb = FrameBuffer::with_size(128, 64, ColorDepth::Monochrome);
        let end = draw_text(&mut fb, 120, 0, "TEST", LcdFlags::empty());
        assert_eq!(end, 120 + 4 * 5);
    }

    #[test]
    fn number_is_right_anchored_by_default() {
        let mut left = FrameBuffer::with_size(128, 64, ColorDepth::Monochrome);
        let mut right = FrameBuffer::with_size(128, 64, ColorDepth::Monochrome);
        draw_number(&mut left, 0, 0, 42, LcdFlags::LEFT);
        draw_number(&mut right, 10, 0, 42, LcdFlags::empty());
        // two glyphs at advance 5 end exactly at the anchor
        assert_eq!(left.as_bytes(), right.as_bytes());
    }
}
