//! Hobbytronics Serial TFT Command Protocol
//!
//! This crate defines the byte-oriented command protocol understood by the
//! firmware of the Hobbytronics 1.8" serial TFT module. The protocol is
//! write-only: the host sends commands, the display never answers.
//!
//! # Protocol Overview
//!
//! Every command is wrapped in a start and end marker:
//! ```text
//! ┌───────┬────────┬──────────────────┬──────┐
//! │ START │ OPCODE │ PARAMETERS       │ END  │
//! │ 0x1B  │ 1B     │ 0–4B (fixed/op)  │ 0xFF │
//! └───────┴────────┴──────────────────┴──────┘
//! ```
//!
//! There is no length prefix and no checksum. The parameter count is implied
//! by the opcode. The bitmap command is the only exception: it carries a
//! variable-length filename terminated by the end marker.
//!
//! Plain text is sent as raw bytes outside of any frame and is drawn at the
//! current text cursor.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod opcode;
pub mod parser;
pub mod types;

pub use command::{Command, MAX_FILENAME_LEN};
pub use frame::{Frame, FrameError, FRAME_END, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use opcode::Opcode;
pub use parser::{FrameParser, Token};
pub use types::{Color, Colour, FontSize, Rotation, ShapeStyle};
