//! Driver configuration
//!
//! Everything here has a sensible default matching the display's factory
//! firmware, so most applications never need to touch it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use serial_tft_hal::DEFAULT_BAUDRATE;
use serial_tft_protocol::Colour;

/// Default low time of a reset pulse in microseconds
pub const DEFAULT_RESET_PULSE_US: u32 = 1_000;

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TftConfig {
    /// Baud rate used by [`SerialTft::begin_default`](crate::SerialTft::begin_default)
    pub baudrate: u32,
    /// How long the reset line is held low during a reset pulse
    pub reset_pulse_us: u32,
    /// Initial colour for lines, outlines and text
    pub line_colour: Colour,
    /// Initial colour for filled shapes
    pub fill_colour: Colour,
    /// Initial colour for clearing the screen
    pub background_colour: Colour,
}

impl Default for TftConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TftConfig {
    /// Factory defaults: 9600 baud, 1 ms reset pulse, white on black with
    /// blue fills
    pub const fn new() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
            reset_pulse_us: DEFAULT_RESET_PULSE_US,
            line_colour: Colour::White,
            fill_colour: Colour::Blue,
            background_colour: Colour::Black,
        }
    }

    /// Set the default baud rate
    pub const fn with_baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = baudrate;
        self
    }

    /// Set the reset pulse width
    pub const fn with_reset_pulse_us(mut self, us: u32) -> Self {
        self.reset_pulse_us = us;
        self
    }

    /// Set the initial line colour
    pub const fn with_line_colour(mut self, colour: Colour) -> Self {
        self.line_colour = colour;
        self
    }

    /// Set the initial fill colour
    pub const fn with_fill_colour(mut self, colour: Colour) -> Self {
        self.fill_colour = colour;
        self
    }

    /// Set the initial background colour
    pub const fn with_background_colour(mut self, colour: Colour) -> Self {
        self.background_colour = colour;
        self
    }
}
