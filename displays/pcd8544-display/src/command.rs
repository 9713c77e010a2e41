//! PCD8544 instruction set
//!
//! Instructions are single command bytes. The controller has two
//! instruction pages selected by the H bit of the function set:
//!
//! - Basic (H=0): display control, X and Y address
//! - Extended (H=1): temperature coefficient, bias system, Vop (contrast)
//!
//! Only horizontal addressing (V=0) is used: the X address increments after
//! every data byte and wraps into the next bank after column 83.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// Raw instruction opcodes
pub mod op {
    /// Function set (both pages)
    pub const FUNCTION_SET: u8 = 0x20;
    /// Function set flag: power down
    pub const POWER_DOWN: u8 = 0x04;
    /// Function set flag: vertical addressing
    pub const VERTICAL_ADDRESSING: u8 = 0x02;
    /// Function set flag: extended instruction set
    pub const EXTENDED: u8 = 0x01;

    /// Display control (basic page)
    pub const DISPLAY_CONTROL: u8 = 0x08;
    /// Set Y address of RAM, 0..=5 (basic page)
    pub const SET_Y_ADDRESS: u8 = 0x40;
    /// Set X address of RAM, 0..=83 (basic page)
    pub const SET_X_ADDRESS: u8 = 0x80;

    /// Temperature coefficient, 0..=3 (extended page)
    pub const TEMPERATURE_CONTROL: u8 = 0x04;
    /// Bias system, 0..=7 (extended page)
    pub const BIAS_SYSTEM: u8 = 0x10;
    /// Operating voltage Vop, 0..=127 (extended page)
    pub const SET_VOP: u8 = 0x80;
}

/// Highest bias system value
pub const MAX_BIAS: u8 = 7;
/// Highest Vop (contrast) value
pub const MAX_CONTRAST: u8 = 0x7F;
/// Highest temperature coefficient
pub const MAX_TEMPERATURE_COEFFICIENT: u8 = 3;

/// Instruction page selected by the function set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InstructionSet {
    /// H=0
    Basic,
    /// H=1
    Extended,
}

/// Display control mode (D and E bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum DisplayMode {
    /// All pixels off, RAM untouched
    Blank = 0b000,
    /// Set bits are dark
    #[default]
    Normal = 0b100,
    /// All pixels on, RAM untouched
    AllOn = 0b001,
    /// Set bits are light
    Inverse = 0b101,
}

/// Function set selecting the instruction page (active, horizontal addressing)
pub const fn function_set(set: InstructionSet) -> u8 {
    match set {
        InstructionSet::Basic => op::FUNCTION_SET,
        InstructionSet::Extended => op::FUNCTION_SET | op::EXTENDED,
    }
}

/// Display control instruction for `mode`
pub const fn display_control(mode: DisplayMode) -> u8 {
    op::DISPLAY_CONTROL | mode as u8
}

/// X address instruction; `x` must be at most 83
pub const fn set_x_address(x: u8) -> u8 {
    op::SET_X_ADDRESS | (x & 0x7F)
}

/// Y address instruction; `y` must be at most 5
pub const fn set_y_address(y: u8) -> u8 {
    op::SET_Y_ADDRESS | (y & 0x07)
}

/// Temperature coefficient instruction, clamped to 0..=3
pub const fn temperature_coefficient(tc: u8) -> u8 {
    let tc = if tc > MAX_TEMPERATURE_COEFFICIENT {
        MAX_TEMPERATURE_COEFFICIENT
    } else {
        tc
    };
    op::TEMPERATURE_CONTROL | tc
}

/// Bias system instruction, clamped to 0..=7
///
/// Bias 3 is the recommended 1:48 multiplex rate for this panel.
pub const fn bias_system(bias: u8) -> u8 {
    let bias = if bias > MAX_BIAS { MAX_BIAS } else { bias };
    op::BIAS_SYSTEM | bias
}

/// Vop instruction, clamped to 0..=127
pub const fn set_vop(vop: u8) -> u8 {
    let vop = if vop > MAX_CONTRAST { MAX_CONTRAST } else { vop };
    op::SET_VOP | vop
}

/// Number of instructions in the power-up sequence
pub const INIT_SEQUENCE_LEN: usize = 6;

/// Power-up instruction sequence for `config`
///
/// Configures the extended page, then returns to the basic page so that
/// address instructions can be sent without a function-set preamble.
pub const fn init_sequence(config: &DisplayConfig) -> [u8; INIT_SEQUENCE_LEN] {
    [
        function_set(InstructionSet::Extended),
        temperature_coefficient(config.temperature_coefficient),
        bias_system(config.bias),
        set_vop(config.contrast),
        function_set(InstructionSet::Basic),
        display_control(config.mode),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_encoding() {
        assert_eq!(set_x_address(0), 0x80);
        assert_eq!(set_x_address(83), 0x80 | 83);
        assert_eq!(set_y_address(5), 0x45);
    }

    #[test]
    fn test_display_modes() {
        assert_eq!(display_control(DisplayMode::Normal), 0x0C);
        assert_eq!(display_control(DisplayMode::Inverse), 0x0D);
        assert_eq!(display_control(DisplayMode::Blank), 0x08);
        assert_eq!(display_control(DisplayMode::AllOn), 0x09);
    }

    #[test]
    fn test_extended_values_clamped() {
        assert_eq!(set_vop(0xFF), 0xFF);
        assert_eq!(set_vop(0x3F), 0xBF);
        assert_eq!(bias_system(9), 0x17);
        assert_eq!(temperature_coefficient(8), 0x07);
    }

    #[test]
    fn test_default_init_sequence() {
        let seq = init_sequence(&DisplayConfig::default());
        // Extended page, TC0, bias 1:48, Vop 0x3F, basic page, normal mode
        assert_eq!(seq, [0x21, 0x04, 0x13, 0xBF, 0x20, 0x0C]);
    }
}
