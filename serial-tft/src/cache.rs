//! Drawing colours and the colour cache
//!
//! The display has a single foreground colour register shared by lines,
//! fills and text, plus a background register. The driver keeps separate
//! line and fill colours and switches the foreground register between them
//! on demand. Tracking what was last sent lets it skip commands that would
//! not change anything.

use serial_tft_protocol::Colour;

use crate::config::TftConfig;

/// Colours selected by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawingColours {
    /// Lines, outlines and text
    pub line: Colour,
    /// Shape interiors
    pub fill: Colour,
    /// Screen clear and text background
    pub background: Colour,
}

impl DrawingColours {
    /// Initial colours from a configuration
    pub fn from_config(config: &TftConfig) -> Self {
        Self {
            line: config.line_colour,
            fill: config.fill_colour,
            background: config.background_colour,
        }
    }
}

/// Colour register values last sent to the display
///
/// `None` means nothing has been sent yet, so the first use of any colour
/// always goes out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColourCache {
    foreground: Option<Colour>,
    background: Option<Colour>,
}

impl ColourCache {
    /// Empty cache
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
        }
    }

    /// Whether the foreground register must be set to reach `colour`
    pub fn foreground_stale(&self, colour: Colour) -> bool {
        self.foreground != Some(colour)
    }

    /// Whether the background register must be set to reach `colour`
    pub fn background_stale(&self, colour: Colour) -> bool {
        self.background != Some(colour)
    }

    /// Record a foreground colour as sent
    pub fn mark_foreground(&mut self, colour: Colour) {
        self.foreground = Some(colour);
    }

    /// Record a background colour as sent
    pub fn mark_background(&mut self, colour: Colour) {
        self.background = Some(colour);
    }

    /// Last foreground colour sent, if any
    pub fn foreground(&self) -> Option<Colour> {
        self.foreground
    }

    /// Last background colour sent, if any
    pub fn background(&self) -> Option<Colour> {
        self.background
    }

    /// Forget everything, forcing the next colours to be resent
    pub fn invalidate(&mut self) {
        *self = Self::new();
    }
}
