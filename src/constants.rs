//! Device constants shared across the display and drawing modules.

use crate::display::traits::{ColorDepth, DisplayCapabilities};

/// The total width of the stock transmitter LCD in pixels.
pub const LCD_W: u32 = 212;
/// The total height of the stock transmitter LCD in pixels.
pub const LCD_H: u32 = 64;

/// Standard font row pitch; menu lines are laid out on this spacing.
pub const FH: i32 = 8;

impl DisplayCapabilities {
    /// Capabilities of the stock 4-bit grayscale panel.
    pub fn grayscale_lcd() -> Self {
        DisplayCapabilities {
            width: LCD_W,
            height: LCD_H,
            color_depth: ColorDepth::Gray4,
        }
    }

    /// Capabilities of the 1-bit panel fitted to the entry-level models.
    pub fn mono_lcd() -> Self {
        DisplayCapabilities {
            width: 128,
            height: 64,
            color_depth: ColorDepth::Monochrome,
        }
    }
}
