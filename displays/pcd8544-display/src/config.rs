//! Display configuration
//!
//! Panel-level settings sent during initialization. The defaults match the
//! common Nokia 5110 breakout at 3.3V.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::{DisplayMode, MAX_BIAS, MAX_CONTRAST, MAX_TEMPERATURE_COEFFICIENT};

/// PCD8544 panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Bias system (0-7, 3 = 1:48 multiplex)
    pub bias: u8,
    /// Operating voltage Vop (0-127), higher is darker
    pub contrast: u8,
    /// Temperature coefficient (0-3)
    pub temperature_coefficient: u8,
    /// Display control mode applied after init
    pub mode: DisplayMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfig {
    /// Default configuration
    pub const fn new() -> Self {
        Self {
            bias: 3,
            contrast: 0x3F,
            temperature_coefficient: 0,
            mode: DisplayMode::Normal,
        }
    }

    /// Set the contrast (clamped to 0-127)
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = if contrast > MAX_CONTRAST {
            MAX_CONTRAST
        } else {
            contrast
        };
        self
    }

    /// Set the bias system (clamped to 0-7)
    pub const fn with_bias(mut self, bias: u8) -> Self {
        self.bias = if bias > MAX_BIAS { MAX_BIAS } else { bias };
        self
    }

    /// Set the temperature coefficient (clamped to 0-3)
    pub const fn with_temperature_coefficient(mut self, tc: u8) -> Self {
        self.temperature_coefficient = if tc > MAX_TEMPERATURE_COEFFICIENT {
            MAX_TEMPERATURE_COEFFICIENT
        } else {
            tc
        };
        self
    }

    /// Set the display mode
    pub const fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.bias, 3);
        assert_eq!(config.contrast, 0x3F);
        assert_eq!(config.temperature_coefficient, 0);
        assert_eq!(config.mode, DisplayMode::Normal);
    }

    #[test]
    fn test_builders_clamp() {
        let config = DisplayConfig::new()
            .with_contrast(200)
            .with_bias(12)
            .with_temperature_coefficient(4)
            .with_mode(DisplayMode::Inverse);

        assert_eq!(config.contrast, MAX_CONTRAST);
        assert_eq!(config.bias, MAX_BIAS);
        assert_eq!(config.temperature_coefficient, MAX_TEMPERATURE_COEFFICIENT);
        assert_eq!(config.mode, DisplayMode::Inverse);
    }
}
