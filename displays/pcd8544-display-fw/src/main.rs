//! PCD8544 Display Firmware
//!
//! Brings up a Nokia 5110 LCD on an STM32F042K6 and plays the power-up
//! intro, then shows uptime.
//!
//! # Wiring
//!
//! | LCD  | MCU  | Function            |
//! |------|------|---------------------|
//! | CLK  | PA5  | SPI1 SCK            |
//! | DIN  | PA7  | SPI1 MOSI           |
//! | CE   | PA4  | Chip enable (GPIO)  |
//! | DC   | PB0  | Data/command (GPIO) |
//! | RST  | PB1  | Reset (GPIO)        |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use pcd8544_display::font::FontTag;
use pcd8544_display::intro::{self, INTRO};
use pcd8544_display::{reset, DisplayConfig, Pcd8544, SpiTransport};

/// The PCD8544 serial interface is rated for 4 Mbit/s
const SPI_FREQUENCY_HZ: u32 = 4_000_000;

/// Status line refresh interval
const HEARTBEAT_MS: u64 = 1000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("PCD8544 Display Firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Control lines. RST is held high until the reset pulse.
    let mut rst = Output::new(p.PB1, Level::High, Speed::Low);
    let dc = Output::new(p.PB0, Level::Low, Speed::Low);
    let ce = Output::new(p.PA4, Level::High, Speed::Low);

    // SPI1 transmit-only, mode 0 (PA5=SCK, PA7=MOSI)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(SPI_FREQUENCY_HZ);
    spi_config.mode = spi::MODE_0;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, spi_config);

    let mut delay = Delay;
    if let Err(e) = reset(&mut rst, &mut delay) {
        error!("Reset pulse failed: {:?}", e);
    }

    let transport = match SpiTransport::new(spi, dc, ce) {
        Ok(transport) => transport,
        Err(e) => {
            error!("Failed to set up transport: {:?}", e);
            return;
        }
    };

    let mut display = Pcd8544::new(transport);
    if let Err(e) = display.init(&DisplayConfig::default()) {
        error!("Failed to initialize display: {:?}", e);
        return;
    }
    info!("LCD initialized");

    if let Err(e) = intro::play(&mut display, &INTRO, &mut delay) {
        warn!("Intro aborted: {:?}", e);
    }
    info!("Intro finished");

    display
        .draw_text(0, 0, 0, "READY", FontTag::Bold)
        .unwrap_or_else(|e| warn!("Draw failed: {:?}", e));

    let mut heartbeat = Ticker::every(Duration::from_millis(HEARTBEAT_MS));
    let mut seconds: u32 = 0;

    loop {
        heartbeat.next().await;
        seconds = seconds.wrapping_add(1);

        if let Err(e) =
            display.draw_fmt(0, 5, 0, FontTag::Regular, format_args!("Up {}s", seconds))
        {
            warn!("Status update failed: {:?}", e);
        }
        trace!("Heartbeat {}", seconds);
    }
}
