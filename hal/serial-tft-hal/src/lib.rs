//! Serial TFT Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware interfaces the serial TFT driver
//! consumes. Board support code implements them directly, or wraps existing
//! `embedded-io` writers and `embedded-hal` pins with the adapters in
//! [`adapters`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  serial-tft (display command encoder)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  serial-tft-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ hardware UART │       │ software UART │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Blocking byte sink
//! - [`uart::SerialPort`] - A sink that can be opened at a baud rate
//! - [`uart::SoftwareSerial`] - A bit-banged port created from a pin pair
//! - [`gpio::OutputPin`] - Digital output for the reset line

#![no_std]
#![deny(unsafe_code)]

pub mod adapters;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adapters::{HalPin, IoSerial};
pub use gpio::{NoPin, OutputPin};
pub use uart::{SerialKind, SerialPort, SoftwareSerial, UartConfig, UartTx, DEFAULT_BAUDRATE};
