//! Panel board wiring
//!
//! Pin assignments for the reference panel (Raspberry Pi Pico):
//!
//! | Function         | GPIO   |
//! |------------------|--------|
//! | UART0 TX / RX    | 0 / 1  |
//! | Select button    | 2      |
//! | Encoder A / B    | 3 / 4  |
//! | I2C1 SDA / SCL   | 6 / 7  |
//! | ADC channels 0-3 | 26-29  |
//!
//! Every other GPIO goes into the [`PinBank`] for host digital reads.

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::{I2C1, UART0};
use embassy_rp::uart::{self, BufferedInterruptHandler, BufferedUart, Uart};
use embassy_rp::Peripherals;
use embassy_time::Delay;
use paramdial_core::Board;
use paramdial_hal::{DataBits, Parity, StopBits, UartConfig};
use paramdial_hal_rp2040::{AnalogBank, Button, EmbassyClock, GpioEncoder, PinBank};
use paramdial_protocol::SerialPort;
use static_cell::StaticCell;

use crate::oled::Oled;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Host link buffer sizes
const TX_BUF_SIZE: usize = 256;
const RX_BUF_SIZE: usize = 256;

/// OLED bus speed
const I2C_FREQUENCY: u32 = 400_000;

// UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; RX_BUF_SIZE]> = StaticCell::new();

/// All panel peripherals
pub struct PanelBoard {
    serial: SerialPort<BufferedUart>,
    display: Oled<I2c<'static, I2C1, Blocking>>,
    encoder: GpioEncoder,
    button: Button,
    pins: PinBank,
    analog: AnalogBank,
    clock: EmbassyClock,
    delay: Delay,
}

impl PanelBoard {
    /// Claim the panel peripherals
    ///
    /// A display that fails to initialize is logged and left dark; the
    /// serial protocol keeps working without it.
    pub fn new(p: Peripherals, uart_config: &UartConfig) -> Self {
        let tx_buf = TX_BUF.init([0u8; TX_BUF_SIZE]);
        let rx_buf = RX_BUF.init([0u8; RX_BUF_SIZE]);
        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, to_embassy(uart_config));
        let serial = SerialPort::new(uart.into_buffered(Irqs, tx_buf, rx_buf));

        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = I2C_FREQUENCY;
        let i2c = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c_config);
        let mut display = Oled::new(i2c);
        if let Err(e) = display.init() {
            defmt::warn!("OLED init failed: {}", e);
        }

        let adc = Adc::new_blocking(p.ADC, adc::Config::default());
        let analog = AnalogBank::new(
            adc,
            [
                Channel::new_pin(p.PIN_26, Pull::None),
                Channel::new_pin(p.PIN_27, Pull::None),
                Channel::new_pin(p.PIN_28, Pull::None),
                Channel::new_pin(p.PIN_29, Pull::None),
                Channel::new_temp_sensor(p.ADC_TEMP_SENSOR),
            ],
        );

        let pins = PinBank::new([
            None, // UART0 TX
            None, // UART0 RX
            None, // button
            None, // encoder A
            None, // encoder B
            Some(p.PIN_5.into()),
            None, // I2C1 SDA
            None, // I2C1 SCL
            Some(p.PIN_8.into()),
            Some(p.PIN_9.into()),
            Some(p.PIN_10.into()),
            Some(p.PIN_11.into()),
            Some(p.PIN_12.into()),
            Some(p.PIN_13.into()),
            Some(p.PIN_14.into()),
            Some(p.PIN_15.into()),
            Some(p.PIN_16.into()),
            Some(p.PIN_17.into()),
            Some(p.PIN_18.into()),
            Some(p.PIN_19.into()),
            Some(p.PIN_20.into()),
            Some(p.PIN_21.into()),
            Some(p.PIN_22.into()),
            Some(p.PIN_23.into()),
            Some(p.PIN_24.into()),
            Some(p.PIN_25.into()),
            None, // ADC0
            None, // ADC1
            None, // ADC2
            None, // ADC3
        ]);

        Self {
            serial,
            display,
            encoder: GpioEncoder::new(p.PIN_3.into(), p.PIN_4.into()),
            button: Button::new(p.PIN_2.into()),
            pins,
            analog,
            clock: EmbassyClock,
            delay: Delay,
        }
    }
}

/// Map the portable UART settings onto embassy-rp's
fn to_embassy(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

impl Board for PanelBoard {
    type Serial = SerialPort<BufferedUart>;
    type Display = Oled<I2c<'static, I2C1, Blocking>>;
    type Encoder = GpioEncoder;
    type Button = Button;
    type Pins = PinBank;
    type Analog = AnalogBank;
    type Clock = EmbassyClock;
    type Delay = Delay;

    fn serial(&mut self) -> &mut Self::Serial {
        &mut self.serial
    }

    fn display(&mut self) -> &mut Self::Display {
        &mut self.display
    }

    fn encoder(&mut self) -> &mut Self::Encoder {
        &mut self.encoder
    }

    fn button(&mut self) -> &mut Self::Button {
        &mut self.button
    }

    fn pins(&mut self) -> &mut Self::Pins {
        &mut self.pins
    }

    fn analog(&mut self) -> &mut Self::Analog {
        &mut self.analog
    }

    fn clock(&self) -> &Self::Clock {
        &self.clock
    }

    fn delay(&mut self) -> &mut Self::Delay {
        &mut self.delay
    }
}
