//! Paramdial - Parameter Panel Firmware
//!
//! Main firmware binary for an RP2040 front panel: an OLED, a rotary
//! encoder and a select button in front of a host that registers tunable
//! integer parameters over a serial line protocol.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use paramdial_core::{AppState, UiConfig};
use paramdial_hal::UartConfig;
use {defmt_rtt as _, panic_probe as _};

use crate::board::PanelBoard;

mod board;
mod oled;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Paramdial firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let uart_config = UartConfig::default();
    let mut board = PanelBoard::new(p, &uart_config);
    info!("Host link at {} baud", uart_config.baudrate);

    let config = UiConfig::default();
    let mut app = AppState::new(&config);
    app.start(&mut board);
    info!("Panel ready");

    loop {
        app.tick(&mut board);
        Timer::after_millis(config.loop_period_ms).await;
    }
}
