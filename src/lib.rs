/*
 *  lib.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
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

//! Low-level rendering engine for the monochrome/grayscale LCDs used on
//! RC transmitters.
//!
//! The crate owns a packed [`FrameBuffer`] and every primitive that writes
//! pixels into it: lines, rectangles, text, numbers, and decoded BMP
//! images. All geometry is clipped against the framebuffer bounds; drawing
//! with wild coordinates is always safe and never an error. A finished
//! frame is handed to an external [`DisplayDriver`] sink via
//! [`display::refresh`].

pub mod bitmap;
pub mod constants;
pub mod display;
pub mod draw;
pub mod fonts;
pub mod text;

pub use bitmap::{BitDepth, Bitmap, BitmapHeader, DecodeError, buffer_size, decode_bmp};
pub use constants::{FH, LCD_H, LCD_W};
pub use display::error::DisplayError;
pub use display::framebuffer::FrameBuffer;
pub use display::refresh;
pub use display::traits::{ColorDepth, DisplayCapabilities, DisplayDriver};
pub use draw::{DOTTED, SOLID};
pub use text::{LcdFlags, Switch, SwitchPos};
