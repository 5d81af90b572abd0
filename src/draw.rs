/*
 *  draw.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Geometric primitives over the packed framebuffer. Everything clips;
 *  nothing here can fault on wild coordinates.
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

use crate::bitmap::{BitDepth, Bitmap};
use crate::display::framebuffer::FrameBuffer;
use crate::display::traits::ColorDepth;

/// Dash mask with every pixel drawn.
pub const SOLID: u8 = 0xFF;
/// Dash mask with alternating pixels drawn.
pub const DOTTED: u8 = 0x55;

/// Dash lookup: bit `i % 8` of `pattern` gates pixel `i` along a line.
/// The phase is anchored at the line's logical start, so clipping the
/// near end does not shift the dashes.
#[inline]
fn pattern_bit(pattern: u8, step: i64) -> bool {
    pattern & (1u8 << (step % 8)) != 0
}

/// Draw `len` contiguous pixels downward from `(x, y_start)`.
///
/// A negative start or an overrun past the bottom edge truncates to the
/// visible span; `len <= 0` draws nothing.
pub fn draw_solid_vertical_line(fb: &mut FrameBuffer, x: i32, y_start: i32, len: i32) {
    if len <= 0 {
        return;
    }
    let max = fb.max_level();
    let y0 = y_start.max(0);
    let y1 = (y_start as i64 + len as i64).min(fb.height() as i64) as i32;
    for y in y0..y1 {
        fb.set_pixel(x, y, max);
    }
}

/// Draw a dashed horizontal line of `w` pixels rightward from `(x, y)`.
pub fn draw_horizontal_line(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, pattern: u8) {
    if w <= 0 || y < 0 || y >= fb.height() as i32 || x >= fb.width() as i32 {
        return;
    }
    let max = fb.max_level();
    let start = (-(x as i64)).max(0);
    let end = (w as i64).min(fb.width() as i64 - x as i64);
    for i in start..end {
        if pattern_bit(pattern, i) {
            fb.set_pixel(x + i as i32, y, max);
        }
    }
}

/// Draw a dashed vertical line of `h` pixels downward from `(x, y)`.
pub fn draw_vertical_line(fb: &mut FrameBuffer, x: i32, y: i32, h: i32, pattern: u8) {
    if h <= 0 || x < 0 || x >= fb.width() as i32 || y >= fb.height() as i32 {
        return;
    }
    let max = fb.max_level();
    let start = (-(y as i64)).max(0);
    let end = (h as i64).min(fb.height() as i64 - y as i64);
    for i in start..end {
        if pattern_bit(pattern, i) {
            fb.set_pixel(x, y + i as i32, max);
        }
    }
}

/// Fill the rectangle intersected with the framebuffer bounds.
pub fn draw_filled_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32) {
    if w <= 0 || h <= 0 {
        return;
    }
    let max = fb.max_level();
    let x0 = x.max(0) as i64;
    let y0 = y.max(0) as i64;
    let x1 = (x as i64 + w as i64).min(fb.width() as i64);
    let y1 = (y as i64 + h as i64).min(fb.height() as i64);
    for py in y0..y1 {
        for px in x0..x1 {
            fb.set_pixel(px as i32, py as i32, max);
        }
    }
}

/// Rasterize a line between two arbitrary points.
///
/// Incremental error accumulation over the dominant axis, one pixel per
/// step. Endpoints are canonicalized into ascending dominant-axis order
/// first, so `draw_line(a, b)` and `draw_line(b, a)` produce the identical
/// pixel set with the identical dash phase.
///
/// `pattern` gates each step; both endpoints are set regardless of phase.
/// With `force`, "off" steps overwrite to background; without it they
/// leave whatever an earlier segment drew, so dashed paths sharing
/// endpoints do not erase each other.
pub fn draw_line(
    fb: &mut FrameBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    pattern: u8,
    force: bool,
) {
    let (w, h) = (fb.width() as i64, fb.height() as i64);
    let (mut x0, mut y0, mut x1, mut y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    // reject lines entirely off one side; the rest is per-pixel clipped
    if (x0 < 0 && x1 < 0)
        || (y0 < 0 && y1 < 0)
        || (x0 >= w && x1 >= w)
        || (y0 >= h && y1 >= h)
    {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let max = fb.max_level();

    let mut plot = |px: i64, py: i64, step: i64, endpoint: bool| {
        if endpoint || pattern_bit(pattern, step) {
            fb.set_pixel(px as i32, py as i32, max);
        } else if force {
            fb.set_pixel(px as i32, py as i32, 0);
        }
    };

    if dx >= dy {
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }
        let ystep = if y0 <= y1 { 1 } else { -1 };
        let mut err = dx / 2;
        let mut y = y0;
        for (step, x) in (x0..=x1).enumerate() {
            plot(x, y, step as i64, x == x0 || x == x1);
            err -= dy;
            if err < 0 {
                err += dx;
                y += ystep;
            }
        }
    } else {
        if y0 > y1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }
        let xstep = if x0 <= x1 { 1 } else { -1 };
        let mut err = dy / 2;
        let mut x = x0;
        for (step, y) in (y0..=y1).enumerate() {
            plot(x, y, step as i64, y == y0 || y == y1);
            err -= dx;
            if err < 0 {
                err += dy;
                x += xstep;
            }
        }
    }
}

/// Source pixel mapped to this framebuffer's intensity range.
#[inline]
fn blit_level(src_depth: BitDepth, dst_depth: ColorDepth, level: u8) -> u8 {
    match (src_depth, dst_depth) {
        (BitDepth::Mono, ColorDepth::Gray4) => {
            if level != 0 {
                0x0F
            } else {
                0
            }
        }
        (BitDepth::Gray4, ColorDepth::Monochrome) => u8::from(level >= 8),
        _ => level,
    }
}

/// Blit a decoded bitmap with its top-left corner at `(x, y)`.
///
/// An origin at or beyond the right/bottom edge is a no-op; partial
/// overlap draws only the visible sub-rectangle, and only the matching
/// sub-region of the bitmap's packed data is read.
pub fn draw_bitmap(fb: &mut FrameBuffer, x: i32, y: i32, bmp: &Bitmap<'_>) {
    let (w, h) = (fb.width() as i64, fb.height() as i64);
    if x as i64 >= w || y as i64 >= h {
        return;
    }
    let (bw, bh) = (bmp.width() as i64, bmp.height() as i64);
    let src_depth = bmp.depth();
    let dst_depth = fb.depth();

    let sx0 = (-(x as i64)).max(0);
    let sy0 = (-(y as i64)).max(0);
    let sx1 = bw.min(w - x as i64);
    let sy1 = bh.min(h - y as i64);
    for sy in sy0..sy1 {
        for sx in sx0..sx1 {
            let level = bmp.pixel(sx as u32, sy as u32);
            fb.set_pixel(
                x + sx as i32,
                y + sy as i32,
                blit_level(src_depth, dst_depth, level),
            );
        }
    }
}
