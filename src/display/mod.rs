/*
 *  display/mod.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Display subsystem - packed framebuffer plus the driver seam that
 *  carries a finished frame to the panel hardware.
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

pub mod error;
pub mod framebuffer;
pub mod traits;

// Drivers that transfer the packed buffer to a panel (or capture it in tests)
pub mod drivers;

use error::DisplayError;
use framebuffer::FrameBuffer;
use traits::DisplayDriver;

/// Hand the finished frame to the display sink.
///
/// The driver receives the framebuffer's packed byte image and is asked to
/// flush it to the panel. Rendering state is untouched; callers typically
/// `clear()` and redraw afterwards.
pub fn refresh(fb: &FrameBuffer, driver: &mut dyn DisplayDriver) -> Result<(), DisplayError> {
    driver.write_buffer(fb.as_bytes())?;
    driver.flush()
}
