//! SSD1306 OLED backend
//!
//! 128x64 panel on blocking I2C, drawn through the `ssd1306` frame buffer.
//! Text uses a 6x8 cell (21 columns x 8 rows), so each text row is one
//! controller page. `flush` only sends the area touched since the last
//! flush, which keeps Rapid-mode repaints to a fraction of a page.

use display_interface_i2c::I2CInterface;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use paramdial_display::{DisplayBackend, DisplayError};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Display dimensions
const WIDTH: u16 = 128;
const HEIGHT: u16 = 64;

/// Character cell
const CELL_WIDTH: u8 = 6;
const CELL_HEIGHT: u8 = 8;
const COLS: u8 = (WIDTH / CELL_WIDTH as u16) as u8;
const ROWS: u8 = (HEIGHT / CELL_HEIGHT as u16) as u8;

/// 5x8 glyphs on a 6-pixel pitch
const FONT_6X8: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 OLED driver
pub struct Oled<I2C> {
    display: Display<I2C>,
    /// Opaque text so new glyphs overwrite old ones
    style: MonoTextStyle<'static, BinaryColor>,
    initialized: bool,
}

impl<I2C: I2c> Oled<I2C> {
    /// Wrap the bus; no I2C traffic until [`init`](Self::init)
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X8)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build();

        Self {
            display,
            style,
            initialized: false,
        }
    }

    /// Send the controller init sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display
            .init()
            .map_err(|_| DisplayError::Communication)?;
        self.initialized = true;
        Ok(())
    }
}

impl<I2C: I2c> DisplayBackend for Oled<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        let origin = Point::new(
            i32::from(col) * i32::from(CELL_WIDTH),
            i32::from(row) * i32::from(CELL_HEIGHT),
        );
        // Pixels past the right edge are clipped by the frame buffer
        Text::with_baseline(text, origin, self.style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn draw_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.display.set_pixel(u32::from(x), u32::from(y), on);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.display
            .flush()
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS, ROWS)
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }
}
