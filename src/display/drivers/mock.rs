/*
 *  display/drivers/mock.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Mock display sink for testing without hardware.
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

use log::debug;

use crate::display::error::DisplayError;
use crate::display::traits::{ColorDepth, DisplayCapabilities, DisplayDriver};

/// Display sink that records what it is handed instead of driving a panel.
///
/// Used by unit and integration tests and in CI, where no hardware is
/// attached. The last buffer written is kept for inspection, and the call
/// counters let tests assert the refresh cadence.
#[derive(Debug, Clone)]
pub struct MockDriver {
    capabilities: DisplayCapabilities,
    initialized: bool,
    last_buffer: Option<Vec<u8>>,

    /// Number of times `init()` was called
    pub init_count: usize,
    /// Number of times `flush()` was called
    pub flush_count: usize,
    /// Number of times `clear()` was called
    pub clear_count: usize,
    /// Total bytes accepted via `write_buffer`
    pub bytes_written: usize,

    /// Make the next `flush()` fail (for error-path tests)
    pub simulate_flush_failure: bool,
}

impl MockDriver {
    pub fn new(capabilities: DisplayCapabilities) -> Self {
        Self {
            capabilities,
            initialized: false,
            last_buffer: None,
            init_count: 0,
            flush_count: 0,
            clear_count: 0,
            bytes_written: 0,
            simulate_flush_failure: false,
        }
    }

    /// Mock for a given panel size and depth.
    pub fn with_size(width: u32, height: u32, color_depth: ColorDepth) -> Self {
        Self::new(DisplayCapabilities {
            width,
            height,
            color_depth,
        })
    }

    /// The most recent frame handed to `write_buffer`, if any.
    pub fn last_buffer(&self) -> Option<&[u8]> {
        self.last_buffer.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl DisplayDriver for MockDriver {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.init_count += 1;
        self.initialized = true;
        Ok(())
    }

    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let expected = self.capabilities.buffer_len();
        if buffer.len() != expected {
            return Err(DisplayError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        self.bytes_written += buffer.len();
        self.last_buffer = Some(buffer.to_vec());
        debug!("mock sink captured {} byte frame", buffer.len());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.simulate_flush_failure {
            return Err(DisplayError::Other("simulated flush failure".to_string()));
        }
        self.flush_count += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clear_count += 1;
        self.last_buffer = Some(vec![0u8; self.capabilities.buffer_len()]);
        Ok(())
    }
}
