//! Driver for the Hobbytronics 1.8" serial TFT display
//!
//! The display is a 160x128 colour LCD with its own controller. It is driven
//! over a one-way serial link with short command frames, and anything sent
//! outside a frame is drawn as text at the text cursor.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ Application                        │
//! └─────────────────┬──────────────────┘
//!                   │ draw_box(), print(), ...
//! ┌─────────────────▼──────────────────┐
//! │ SerialTft                          │
//! │  - drawing colours + colour cache  │
//! │  - command framing                 │
//! │  - optional reset line             │
//! └─────────────────┬──────────────────┘
//!                   │ Transport (borrowed or owned)
//! ┌─────────────────▼──────────────────┐
//! │ serial-tft-hal: SerialPort         │
//! └────────────────────────────────────┘
//! ```
//!
//! # Connection modes
//!
//! - Hardware UART: pass a `&mut` to a [`SerialPort`] the application owns.
//! - Software UART owned by the application: same as above.
//! - Software UART created from a pin pair with [`SerialTft::from_pins`].
//!   The driver owns that port and releases it when dropped.
//!
//! The display never replies. Failed writes are counted in
//! [`Diagnostics`] rather than returned from every drawing call.
//!
//! # Example
//!
//! ```ignore
//! use serial_tft::prelude::*;
//!
//! let mut tft = SerialTft::new(&mut uart);
//! tft.begin_default();
//! tft.set_background_colour(Colour::Black);
//! tft.clear_screen();
//! tft.set_fill_colour(Colour::Blue);
//! tft.draw_box(10, 10, 60, 40, ShapeStyle::FilledOutline);
//! tft.goto_character_position(0, 6);
//! tft.print("Hello");
//! ```

#![no_std]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod display;
pub mod reset;
pub mod transport;

pub use cache::{ColourCache, DrawingColours};
pub use config::{TftConfig, DEFAULT_RESET_PULSE_US};
pub use diagnostics::Diagnostics;
pub use display::SerialTft;
pub use reset::ResetLine;
pub use transport::{SerialMode, Transport};

pub use serial_tft_hal::{NoPin, OutputPin, SerialPort, SoftwareSerial, UartTx};
pub use serial_tft_protocol::{Color, Colour, FontSize, Rotation, ShapeStyle};

/// Commonly used items
pub mod prelude {
    pub use crate::config::TftConfig;
    pub use crate::display::SerialTft;
    pub use serial_tft_protocol::{Color, Colour, FontSize, Rotation, ShapeStyle};
}
