/*
 *  display/error.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Error types for the display sink.
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

use thiserror::Error;

/// Failures reported by a [`crate::display::traits::DisplayDriver`].
///
/// Rendering itself never fails: out-of-range geometry is clipped, not
/// reported. Only the transfer of a finished frame to the panel can error.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Driver used before `init()` succeeded
    #[error("display driver not initialized")]
    NotInitialized,

    /// Buffer handed to the driver does not match the panel's frame size
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Transport or hardware failure described by the driver
    #[error("{0}")]
    Other(String),
}
