//! Parameter presenter
//!
//! Two paint modes share the screen:
//!
//! - **Full**: progress bar, parameter name, value and software label.
//! - **Rapid**: the value alone, used while the knob is spinning so each
//!   repaint touches a single text row.
//!
//! The screen is cleared only when the mode actually changes. Repaints in
//! the same mode overdraw in place, with trailing spaces erasing whatever
//! longer text was there before.

use core::fmt::{self, Write};

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Pixel row of the progress bar
pub const BAR_Y: u16 = 0;
/// Text row of the parameter name (Full mode)
pub const ROW_PARAMETER: u8 = 3;
/// Text row of the value (Full mode)
pub const ROW_VALUE: u8 = 4;
/// Text row of the software label
pub const ROW_SOFTWARE: u8 = 7;
/// Text row of the value (Rapid mode)
pub const ROW_RAPID: u8 = 3;
/// Text column of the value (Rapid mode), roughly centred on 21 columns
pub const COL_RAPID: u8 = 8;
/// Characters cleared for the rapid value (fits `-2147483648`)
pub const RAPID_FIELD_WIDTH: usize = 11;

/// Formatting scratch size; comfortably above a 21-column row
const TEXT_CAP: usize = 64;

/// Paint mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    #[default]
    Full,
    Rapid,
}

/// Full / Rapid paint state machine
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    mode: DisplayMode,
}

impl Presenter {
    /// Create a presenter in Full mode
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::Full,
        }
    }

    /// Current paint mode
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switch mode, clearing the screen only on an actual change
    fn enter<D: DisplayBackend>(
        &mut self,
        display: &mut D,
        mode: DisplayMode,
    ) -> Result<(), DisplayError> {
        if self.mode != mode {
            display.clear()?;
            self.mode = mode;
        }
        Ok(())
    }

    /// Clear unconditionally and start over in Full mode
    pub fn reset<D: DisplayBackend>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        display.clear()?;
        self.mode = DisplayMode::Full;
        Ok(())
    }

    /// Boot screen shown until the host registers something
    pub fn render_splash<D: DisplayBackend>(
        &mut self,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        self.reset(display)?;
        display.draw_text(0, 0, "Waiting for")?;
        display.draw_text(1, 0, "parameters...")?;
        display.flush()
    }

    /// Full view: bar, name, value and label
    pub fn render_full<D: DisplayBackend>(
        &mut self,
        display: &mut D,
        name: &str,
        value: i32,
        min: i32,
        max: i32,
        label: &str,
    ) -> Result<(), DisplayError> {
        self.enter(display, DisplayMode::Full)?;

        draw_row(display, ROW_PARAMETER, 0, format_args!("Parameter: {}", name))?;
        draw_row(display, ROW_VALUE, 0, format_args!("Value: {}", value))?;

        let (width, _) = display.pixel_dimensions();
        let fill = bar_fill(value, min, max, width);
        for x in 0..width {
            display.draw_pixel(x, BAR_Y, x < fill)?;
        }

        draw_label(display, label)?;
        display.flush()
    }

    /// Rapid view: the value alone
    pub fn render_rapid<D: DisplayBackend>(
        &mut self,
        display: &mut D,
        value: i32,
    ) -> Result<(), DisplayError> {
        self.enter(display, DisplayMode::Rapid)?;

        let mut text: String<TEXT_CAP> = String::new();
        write!(text, "{:<width$}", value, width = RAPID_FIELD_WIDTH)
            .map_err(|_| DisplayError::InvalidCoordinates)?;
        display.draw_text(ROW_RAPID, COL_RAPID, &text)?;
        display.flush()
    }

    /// Label line alone on a cleared screen (nothing selected yet)
    pub fn render_label_only<D: DisplayBackend>(
        &mut self,
        display: &mut D,
        label: &str,
    ) -> Result<(), DisplayError> {
        display.clear()?;
        draw_label(display, label)?;
        display.flush()
    }
}

/// Draw the `Software:` row
fn draw_label<D: DisplayBackend>(display: &mut D, label: &str) -> Result<(), DisplayError> {
    draw_row(display, ROW_SOFTWARE, 0, format_args!("Software: {}", label))
}

/// Format a row and pad it with spaces to the right edge
fn draw_row<D: DisplayBackend>(
    display: &mut D,
    row: u8,
    col: u8,
    args: fmt::Arguments<'_>,
) -> Result<(), DisplayError> {
    let mut text: String<TEXT_CAP> = String::new();
    // Longer text is cut by the backend at the screen edge anyway
    let _ = text.write_fmt(args);

    let (cols, _) = display.dimensions();
    let visible = usize::from(cols.saturating_sub(col));
    while text.len() < visible {
        if text.push(' ').is_err() {
            break;
        }
    }
    display.draw_text(row, col, &text)
}

/// Progress bar boundary for `value` in `[min, max]` over `width` pixels
///
/// Pixels `0..fill` are lit. `value` is clamped into range first; the
/// linear map is rounded to the nearest pixel. A degenerate range
/// (`min >= max`) shows a full bar.
pub fn bar_fill(value: i32, min: i32, max: i32, width: u16) -> u16 {
    if min >= max {
        return width;
    }
    let value = i64::from(value.clamp(min, max));
    let span = i64::from(max) - i64::from(min);
    let offset = value - i64::from(min);
    let scaled = offset * i64::from(width);
    // Round half up; every term is non-negative here
    let fill = (2 * scaled + span) / (2 * span);
    fill.clamp(0, i64::from(width)) as u16
}
