/*
 *  bitmap.rs
 *
 *  txgfx - glass for the radio
 *  (c) 2025-26 the txgfx authors
 *
 *  Defensive BMP decoder producing framebuffer-packed bitmaps.
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

use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use thiserror::Error;

/// Pixel encoding of a decoded bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// 1 bit per pixel, on/off
    Mono,
    /// 4 bits per pixel, 16 grayscale levels
    Gray4,
}

/// Why a source image was rejected. The destination buffer is untouched
/// in every one of these cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Source ended before the header or pixel payload it declares
    #[error("source truncated")]
    Truncated,

    /// Missing `BM` signature
    #[error("not a BMP file")]
    BadSignature,

    /// Header fields are inconsistent or out of range
    #[error("malformed BMP header")]
    BadHeader,

    /// Only 1- and 4-bit images are supported
    #[error("unsupported bit depth {0}")]
    UnsupportedDepth(u16),

    /// Compressed payloads are not supported
    #[error("unsupported compression {0}")]
    UnsupportedCompression(u32),

    /// Declared width exceeds the caller's limit
    #[error("image {width} px wide exceeds limit {max}")]
    TooWide { width: u32, max: u32 },

    /// Declared height exceeds the caller's limit
    #[error("image {height} px tall exceeds limit {max}")]
    TooTall { height: u32, max: u32 },

    /// Destination buffer too small for what the source claims to hold
    #[error("destination holds {available} bytes, image needs {needed}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Destination buffer size in bytes for a decoded image.
///
/// Deterministic in (width, height, depth); the decoder writes exactly
/// this many bytes on success and callers size their buffers with it.
pub fn buffer_size(width: u32, height: u32, depth: BitDepth) -> usize {
    let (w, h) = (width as usize, height as usize);
    match depth {
        BitDepth::Mono => w * h.div_ceil(8),
        BitDepth::Gray4 => w * h.div_ceil(2),
    }
}

/// Dimensions and depth of a successfully decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
}

/// A decoded image: header plus its framebuffer-packed pixel payload.
///
/// The view is only constructible over a payload at least
/// [`buffer_size`] bytes long, so blitting can never read past the
/// caller's buffer.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    header: BitmapHeader,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    pub fn new(header: BitmapHeader, data: &'a [u8]) -> Result<Self, DecodeError> {
        let needed = buffer_size(header.width, header.height, header.depth);
        if data.len() < needed {
            return Err(DecodeError::BufferTooSmall {
                needed,
                available: data.len(),
            });
        }
        Ok(Self { header, data })
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    pub fn depth(&self) -> BitDepth {
        self.header.depth
    }

    /// Intensity at `(x, y)`: 0/1 for mono, 0-15 for grayscale.
    /// Out-of-range reads return background.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        if x >= self.header.width || y >= self.header.height {
            return 0;
        }
        let (x, y, w) = (x as usize, y as usize, self.header.width as usize);
        match self.header.depth {
            BitDepth::Mono => (self.data[(y / 8) * w + x] >> (y % 8)) & 1,
            BitDepth::Gray4 => {
                let byte = self.data[(y / 2) * w + x];
                if y % 2 == 0 { byte & 0x0F } else { byte >> 4 }
            }
        }
    }
}

// BMP layout offsets (file header + BITMAPINFOHEADER)
const FILE_HEADER_LEN: usize = 14;
const MIN_DIB_LEN: u32 = 40;
const MIN_HEADER_LEN: usize = 54;

/// Perceived brightness of a BGRX palette entry, 0-255.
fn palette_luma(entry: &[u8]) -> u16 {
    (entry[0] as u16 + entry[1] as u16 + entry[2] as u16) / 3
}

/// Decode a BMP image into `dest`, packed in framebuffer layout.
///
/// Every validation runs before the first byte is written: signature and
/// header shape, declared dimensions against the caller's `max_width` /
/// `max_height`, bit depth, destination capacity, and the presence of the
/// full pixel payload. A failed decode leaves `dest` untouched; a
/// successful one writes exactly [`buffer_size`] bytes and no more.
///
/// Rows arrive bottom-to-top padded to 4 bytes and are transcoded to the
/// top-down band/nibble packing of [`crate::display::framebuffer::FrameBuffer`],
/// so blitting is a straight copy. The 1-bit palette collapses to on/off
/// by darkness; the 4-bit palette maps to intensity 15 for black down to
/// 0 for white.
pub fn decode_bmp(
    dest: &mut [u8],
    src: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<BitmapHeader, DecodeError> {
    if src.len() < 2 {
        return Err(DecodeError::Truncated);
    }
    if &src[0..2] != b"BM" {
        debug!("decode rejected: bad signature");
        return Err(DecodeError::BadSignature);
    }
    if src.len() < MIN_HEADER_LEN {
        return Err(DecodeError::Truncated);
    }

    let data_offset = LittleEndian::read_u32(&src[10..14]) as usize;
    let dib_len = LittleEndian::read_u32(&src[14..18]);
    let width = LittleEndian::read_i32(&src[18..22]);
    let height = LittleEndian::read_i32(&src[22..26]);
    let bpp = LittleEndian::read_u16(&src[28..30]);
    let compression = LittleEndian::read_u32(&src[30..34]);

    if dib_len < MIN_DIB_LEN || width <= 0 || height <= 0 {
        debug!("decode rejected: malformed header (dib {dib_len}, {width}x{height})");
        return Err(DecodeError::BadHeader);
    }
    let (width, height) = (width as u32, height as u32);
    if width > max_width {
        debug!("decode rejected: {width} px wide, limit {max_width}");
        return Err(DecodeError::TooWide {
            width,
            max: max_width,
        });
    }
    if height > max_height {
        debug!("decode rejected: {height} px tall, limit {max_height}");
        return Err(DecodeError::TooTall {
            height,
            max: max_height,
        });
    }

    let depth = match bpp {
        1 => BitDepth::Mono,
        4 => BitDepth::Gray4,
        other => {
            debug!("decode rejected: {other} bpp");
            return Err(DecodeError::UnsupportedDepth(other));
        }
    };
    if compression != 0 {
        debug!("decode rejected: compression {compression}");
        return Err(DecodeError::UnsupportedCompression(compression));
    }

    let needed = buffer_size(width, height, depth);
    if needed > dest.len() {
        debug!(
            "decode rejected: needs {needed} bytes, destination holds {}",
            dest.len()
        );
        return Err(DecodeError::BufferTooSmall {
            needed,
            available: dest.len(),
        });
    }

    // palette sits between the DIB header and the pixel payload
    let palette_start = FILE_HEADER_LEN + dib_len as usize;
    let entries = 1usize << bpp;
    let palette_end = palette_start
        .checked_add(entries * 4)
        .ok_or(DecodeError::BadHeader)?;
    if palette_end > src.len() {
        return Err(DecodeError::Truncated);
    }

    // rows are padded to 4-byte boundaries
    let stride = ((width as u64 * bpp as u64 + 31) / 32 * 4) as usize;
    let payload_end = (stride as u64)
        .checked_mul(height as u64)
        .and_then(|len| len.checked_add(data_offset as u64))
        .ok_or(DecodeError::BadHeader)?;
    if data_offset < palette_end || payload_end > src.len() as u64 {
        debug!("decode rejected: payload truncated");
        return Err(DecodeError::Truncated);
    }

    // all validations passed; dest is only touched from here on
    let mut on = [false; 2];
    let mut levels = [0u8; 16];
    for i in 0..entries {
        let entry = &src[palette_start + i * 4..palette_start + i * 4 + 4];
        match depth {
            BitDepth::Mono => on[i] = palette_luma(entry) < 128,
            BitDepth::Gray4 => levels[i] = 15 - (palette_luma(entry) * 15 / 255) as u8,
        }
    }

    let out = &mut dest[..needed];
    out.fill(0);
    let w = width as usize;
    for row in 0..height as usize {
        // source rows run bottom to top
        let src_row = height as usize - 1 - row;
        let line = &src[data_offset + src_row * stride..data_offset + (src_row + 1) * stride];
        for col in 0..w {
            match depth {
                BitDepth::Mono => {
                    let bit = (line[col / 8] >> (7 - col % 8)) & 1;
                    if on[bit as usize] {
                        out[(row / 8) * w + col] |= 1 << (row % 8);
                    }
                }
                BitDepth::Gray4 => {
                    let nibble = if col % 2 == 0 {
                        line[col / 2] >> 4
                    } else {
                        line[col / 2] & 0x0F
                    };
                    let level = levels[nibble as usize];
                    if row % 2 == 0 {
                        out[(row / 2) * w + col] |= level;
                    } else {
                        out[(row / 2) * w + col] |= level << 4;
                    }
                }
            }
        }
    }

    Ok(BitmapHeader {
        width,
        height,
        depth,
    })
}
