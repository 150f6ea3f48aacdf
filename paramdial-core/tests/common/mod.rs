//! In-memory board for driving `AppState` on the host

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use paramdial_core::{AppState, Board, UiConfig};
use paramdial_display::{DisplayBackend, DisplayError};
use paramdial_hal::{
    AdcError, AnalogInputs, Clock, DigitalInputs, GpioError, InputPin, Line, LineRx, LineTx,
    RotaryEncoder, RxError,
};

pub const COLS: u8 = 21;
pub const ROWS: u8 = 8;
pub const WIDTH: u16 = 128;
pub const HEIGHT: u16 = 64;

#[derive(Default)]
pub struct FakeSerial {
    pub incoming: VecDeque<Result<Line, RxError>>,
    pub sent: Vec<String>,
}

impl FakeSerial {
    pub fn push(&mut self, text: &str) {
        let mut line = Line::new();
        line.push_str(text).unwrap();
        self.incoming.push_back(Ok(line));
    }
}

impl LineRx for FakeSerial {
    fn poll_line(&mut self) -> Result<Option<Line>, RxError> {
        self.incoming.pop_front().transpose()
    }
}

impl LineTx for FakeSerial {
    type Error = core::convert::Infallible;

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.sent.push(text.into());
        Ok(())
    }
}

/// Character grid plus pixel map, with counters for clears and flushes
pub struct FakeDisplay {
    pub cells: [[char; COLS as usize]; ROWS as usize],
    pub pixels: Vec<bool>,
    pub clears: usize,
    pub flushes: usize,
}

impl Default for FakeDisplay {
    fn default() -> Self {
        Self {
            cells: [[' '; COLS as usize]; ROWS as usize],
            pixels: vec![false; usize::from(WIDTH) * usize::from(HEIGHT)],
            clears: 0,
            flushes: 0,
        }
    }
}

impl FakeDisplay {
    /// Visible text of `row` without trailing blanks
    pub fn row(&self, row: u8) -> String {
        let text: String = self.cells[usize::from(row)].iter().collect();
        text.trim_end().into()
    }

    /// Lit pixels on the bar row
    pub fn bar(&self) -> usize {
        self.pixels[..usize::from(WIDTH)].iter().filter(|p| **p).count()
    }
}

impl DisplayBackend for FakeDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        *self = Self {
            clears: self.clears + 1,
            flushes: self.flushes,
            ..Self::default()
        };
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        for (offset, c) in text.chars().enumerate() {
            let x = usize::from(col) + offset;
            if x >= usize::from(COLS) {
                break;
            }
            self.cells[usize::from(row)][x] = c;
        }
        Ok(())
    }

    fn draw_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.pixels[usize::from(y) * usize::from(WIDTH) + usize::from(x)] = on;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes += 1;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS, ROWS)
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }
}

#[derive(Default)]
pub struct FakeEncoder {
    /// Detents delivered on the next tick
    pub pending: i32,
    count: i32,
}

impl RotaryEncoder for FakeEncoder {
    fn tick(&mut self) {
        self.count += self.pending;
        self.pending = 0;
    }

    fn delta(&self) -> i32 {
        self.count
    }

    fn reset_delta(&mut self) {
        self.count = 0;
    }
}

/// Button level, active low; queued samples are consumed before `pressed`
#[derive(Default)]
pub struct FakeButton {
    pub pressed: bool,
    pub samples: VecDeque<bool>,
}

impl InputPin for FakeButton {
    fn is_high(&mut self) -> bool {
        !self.samples.pop_front().unwrap_or(self.pressed)
    }
}

/// Pins 0..=29; pins listed in `reserved` are refused
#[derive(Default)]
pub struct FakePins {
    pub high: Vec<u8>,
    pub reserved: Vec<u8>,
}

impl DigitalInputs for FakePins {
    fn read_digital(&mut self, pin: u8) -> Result<bool, GpioError> {
        if pin >= 30 {
            return Err(GpioError::InvalidPin);
        }
        if self.reserved.contains(&pin) {
            return Err(GpioError::Reserved);
        }
        Ok(self.high.contains(&pin))
    }
}

/// Channels 0..=4; each reads `base + index`
#[derive(Default)]
pub struct FakeAnalog {
    pub base: u16,
    pub broken: bool,
}

impl AnalogInputs for FakeAnalog {
    fn read_analog(&mut self, index: u8) -> Result<u16, AdcError> {
        if index > 4 {
            return Err(AdcError::InvalidChannel);
        }
        if self.broken {
            return Err(AdcError::Conversion);
        }
        Ok(self.base + u16::from(index))
    }
}

#[derive(Default)]
pub struct FakeClock {
    pub now: u64,
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

#[derive(Default)]
pub struct FakeDelay {
    pub total_ns: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[derive(Default)]
pub struct FakeBoard {
    pub serial: FakeSerial,
    pub display: FakeDisplay,
    pub encoder: FakeEncoder,
    pub button: FakeButton,
    pub pins: FakePins,
    pub analog: FakeAnalog,
    pub clock: FakeClock,
    pub delay: FakeDelay,
}

impl Board for FakeBoard {
    type Serial = FakeSerial;
    type Display = FakeDisplay;
    type Encoder = FakeEncoder;
    type Button = FakeButton;
    type Pins = FakePins;
    type Analog = FakeAnalog;
    type Clock = FakeClock;
    type Delay = FakeDelay;

    fn serial(&mut self) -> &mut FakeSerial {
        &mut self.serial
    }

    fn display(&mut self) -> &mut FakeDisplay {
        &mut self.display
    }

    fn encoder(&mut self) -> &mut FakeEncoder {
        &mut self.encoder
    }

    fn button(&mut self) -> &mut FakeButton {
        &mut self.button
    }

    fn pins(&mut self) -> &mut FakePins {
        &mut self.pins
    }

    fn analog(&mut self) -> &mut FakeAnalog {
        &mut self.analog
    }

    fn clock(&self) -> &FakeClock {
        &self.clock
    }

    fn delay(&mut self) -> &mut FakeDelay {
        &mut self.delay
    }
}

/// Fresh app and board with the boot splash drawn
pub fn boot() -> (AppState, FakeBoard) {
    let mut app = AppState::new(&UiConfig::default());
    let mut board = FakeBoard::default();
    app.start(&mut board);
    (app, board)
}

/// Queue `line`, run one tick and return what the panel sent
pub fn send(app: &mut AppState, board: &mut FakeBoard, line: &str) -> Vec<String> {
    board.serial.push(line);
    app.tick(board);
    board.serial.sent.drain(..).collect()
}

/// Turn the knob by `detents` at `now` and run one tick
pub fn turn(app: &mut AppState, board: &mut FakeBoard, detents: i32, now: u64) -> Vec<String> {
    board.clock.now = now;
    board.encoder.pending = detents;
    app.tick(board);
    board.serial.sent.drain(..).collect()
}

/// Press and release the button, one tick each
pub fn press(app: &mut AppState, board: &mut FakeBoard) -> Vec<String> {
    board.button.pressed = true;
    app.tick(board);
    board.button.pressed = false;
    app.tick(board);
    board.serial.sent.drain(..).collect()
}
