//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLEDs via blocking I2C. All drawing
//! goes through the shared frame buffer; only `flush` touches the bus,
//! streaming the buffer page by page.

use embedded_hal::i2c::I2c;

use tiller_core::traits::display::{DisplayBackend, DisplayError};
use tiller_display::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const ENTIRE_ON_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver over a shared frame buffer
pub struct Ssd1306<I2C> {
    i2c: I2C,
    frame: FrameBuffer,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            frame: FrameBuffer::new(),
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Initialization sequence for SSD1306, page addressing mode
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEM_MODE,
            0x02,                  // Page addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF, // High contrast
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::ENTIRE_ON_RESUME,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SSD1306_ADDR, &[0x00, cmd])
            .map_err(|_| DisplayError::Communication)
    }

    /// Set display contrast (0-255)
    #[allow(dead_code)]
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }
}

impl<I2C> DisplayBackend for Ssd1306<I2C>
where
    I2C: I2c,
{
    fn width(&self) -> u16 {
        self.frame.width()
    }

    fn height(&self) -> u16 {
        self.frame.height()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame.clear()
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, inverted: bool) -> Result<(), DisplayError> {
        self.frame.draw_text(x, y, text, inverted)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        on: bool,
    ) -> Result<(), DisplayError> {
        self.frame.fill_rect(x, y, width, height, on)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            // Set page address, column 0
            self.command(cmd::SET_PAGE_ADDR | (page as u8))?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            // Send page data
            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.frame.pages()[page]);
            self.i2c
                .write(SSD1306_ADDR, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        self.frame.mark_clean();
        Ok(())
    }
}
