//! Byte transport to the controller
//!
//! The PCD8544 takes one byte per transfer, with the D/C line selecting
//! whether the byte is an instruction or display RAM data.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Display transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Bus,
    /// A control line (D/C, CE or RST) could not be driven
    Pin,
}

/// Meaning of a transmitted byte, selected by the D/C line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// D/C low: the byte is an instruction
    Command,
    /// D/C high: the byte is written to display RAM at the cursor
    Data,
}

/// Blocking byte transport
///
/// Implementations must not return until the byte has left the bus.
pub trait Transport {
    /// Transmit a single byte in the given mode
    fn transmit(&mut self, mode: Mode, byte: u8) -> Result<(), DisplayError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transmit(&mut self, mode: Mode, byte: u8) -> Result<(), DisplayError> {
        (**self).transmit(mode, byte)
    }
}

/// SPI transport with separate D/C and chip-enable lines
///
/// The bus is flushed after every byte, so D/C may change safely between
/// transfers.
pub struct SpiTransport<SPI, DC, CE> {
    spi: SPI,
    dc: DC,
    ce: CE,
}

impl<SPI, DC, CE> SpiTransport<SPI, DC, CE>
where
    SPI: SpiBus,
    DC: OutputPin,
    CE: OutputPin,
{
    /// Create a new transport. CE is driven high (deselected).
    pub fn new(spi: SPI, dc: DC, mut ce: CE) -> Result<Self, DisplayError> {
        ce.set_high().map_err(|_| DisplayError::Pin)?;
        Ok(Self { spi, dc, ce })
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, CE) {
        (self.spi, self.dc, self.ce)
    }
}

impl<SPI, DC, CE> Transport for SpiTransport<SPI, DC, CE>
where
    SPI: SpiBus,
    DC: OutputPin,
    CE: OutputPin,
{
    fn transmit(&mut self, mode: Mode, byte: u8) -> Result<(), DisplayError> {
        match mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        }
        .map_err(|_| DisplayError::Pin)?;

        self.ce.set_low().map_err(|_| DisplayError::Pin)?;
        let sent = self
            .spi
            .write(&[byte])
            .and_then(|()| self.spi.flush())
            .map_err(|_| DisplayError::Bus);
        // Deselect even if the transfer failed
        self.ce.set_high().map_err(|_| DisplayError::Pin)?;

        sent
    }
}
