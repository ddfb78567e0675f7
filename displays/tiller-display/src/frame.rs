//! Page-organized monochrome frame buffer
//!
//! 128x64, one bit per pixel, laid out in eight 8-row pages the way
//! SSD1306/SH1106 controllers expect their RAM. All drawing happens
//! here; bus drivers stream [`pages`](FrameBuffer::pages) to the panel
//! when the menu core flushes.

use tiller_core::traits::display::{DisplayBackend, DisplayError};

use crate::font;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// In-RAM frame buffer implementing the menu rendering contract
///
/// `flush` only does bookkeeping here; wrapping drivers override the
/// bus transfer and then mark the buffer clean.
pub struct FrameBuffer {
    buffer: [[u8; WIDTH]; PAGES],
    dirty: bool,
    flushes: u32,
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            buffer: [[0; WIDTH]; PAGES],
            dirty: true,
            flushes: 0,
        }
    }

    /// Set or clear a single pixel; out-of-range coordinates are clipped
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let mask = 1u8 << (y % 8);
        if on {
            self.buffer[y / 8][x] |= mask;
        } else {
            self.buffer[y / 8][x] &= !mask;
        }
        self.dirty = true;
    }

    /// Read back a pixel; out-of-range reads are off
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw page data in controller RAM order
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.buffer
    }

    /// Whether the buffer changed since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as committed to the panel
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of completed flushes
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for FrameBuffer {
    fn width(&self) -> u16 {
        WIDTH as u16
    }

    fn height(&self) -> u16 {
        HEIGHT as u16
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in &mut self.buffer {
            page.fill(0);
        }
        self.dirty = true;
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, inverted: bool) -> Result<(), DisplayError> {
        let mut cursor = x;
        for ch in text.chars() {
            if cursor as usize >= WIDTH {
                break;
            }
            let glyph = font::glyph(ch);
            for (column, bits) in glyph.iter().enumerate() {
                for row in 0..font::GLYPH_HEIGHT as u16 {
                    if bits & (1 << row) != 0 {
                        // Inverted text is carved out of the highlight
                        // band; normal text leaves the background alone.
                        self.set_pixel(cursor + column as u16, y + row, !inverted);
                    }
                }
            }
            cursor += font::GLYPH_WIDTH as u16;
        }
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        on: bool,
    ) -> Result<(), DisplayError> {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, on);
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes += 1;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FrameBuffer({}x{}, dirty: {})",
            WIDTH,
            HEIGHT,
            self.dirty
        );
    }
}
