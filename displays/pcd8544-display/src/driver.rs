//! PCD8544 driver
//!
//! Owns the transport and mirrors the controller's RAM write pointer. There
//! is no frame buffer: every drawing operation is a sequence of writes
//! straight into display RAM.
//!
//! Out-of-range coordinates are ignored rather than reported. Transport
//! failures are always propagated.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::command::{self, DisplayMode, InstructionSet};
use crate::config::DisplayConfig;
use crate::cursor::{Cursor, RAM_SIZE};
use crate::transport::{DisplayError, Mode, Transport};

/// Reset pulse length. The datasheet asks for at least 100 ns.
const RESET_PULSE_US: u32 = 1_000;

/// PCD8544 display driver
pub struct Pcd8544<T> {
    transport: T,
    /// Where the next data byte lands
    cursor: Cursor,
}

impl<T: Transport> Pcd8544<T> {
    /// Create a driver. The controller starts at the origin after reset.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cursor: Cursor::ORIGIN,
        }
    }

    /// Send the power-up sequence for `config` and clear display RAM
    pub fn init(&mut self, config: &DisplayConfig) -> Result<(), DisplayError> {
        for byte in command::init_sequence(config) {
            self.command(byte)?;
        }
        self.clear_display()
    }

    /// Current RAM write pointer
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Send an instruction byte
    pub(crate) fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.transport.transmit(Mode::Command, byte)
    }

    /// Write one byte of display RAM at the cursor and advance it
    pub fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.transport.transmit(Mode::Data, byte)?;
        self.cursor = self.cursor.advance();
        Ok(())
    }

    /// Move the RAM write pointer
    ///
    /// Addresses off the panel (`x > 83` or `y > 5`) are ignored and nothing
    /// is sent.
    pub fn set_address(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        let Some(cursor) = Cursor::new(x, y) else {
            return Ok(());
        };

        self.command(command::set_x_address(x))?;
        self.command(command::set_y_address(y))?;
        self.cursor = cursor;
        Ok(())
    }

    /// Zero all of display RAM in one pass
    ///
    /// The pointer wraps back to the origin after the last byte.
    pub fn clear_display(&mut self) -> Result<(), DisplayError> {
        self.set_address(0, 0)?;
        for _ in 0..RAM_SIZE {
            self.write_data(0x00)?;
        }
        Ok(())
    }

    /// Change the display control mode
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<(), DisplayError> {
        self.command(command::display_control(mode))
    }

    /// Change Vop (0-127)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(command::function_set(InstructionSet::Extended))?;
        self.command(command::set_vop(contrast))?;
        self.command(command::function_set(InstructionSet::Basic))
    }
}

/// Pulse the reset line
///
/// Must run within 100 ms of power-up, before the first instruction.
pub fn reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), DisplayError>
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_low().map_err(|_| DisplayError::Pin)?;
    delay.delay_us(RESET_PULSE_US);
    rst.set_high().map_err(|_| DisplayError::Pin)
}
