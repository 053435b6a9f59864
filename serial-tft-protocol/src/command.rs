//! Typed display commands
//!
//! Each variant maps one-to-one onto an opcode. Drawing commands carry raw
//! coordinates; the display clips anything outside the screen.

use heapless::Vec;

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use crate::opcode::Opcode;
use crate::types::{Colour, FontSize, Rotation};

/// Maximum bitmap filename length that fits in a single frame
pub const MAX_FILENAME_LEN: usize = MAX_PAYLOAD_SIZE - 2;

/// Commands sent to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Clear the screen to the current background colour
    Clear,
    /// Set the colour used for lines, shapes and text
    SetForeground(Colour),
    /// Set the colour used for clearing and text background
    SetBackground(Colour),
    /// Set the screen orientation
    SetRotation(Rotation),
    /// Set the text font size
    SetFontSize(FontSize),
    /// Move the text cursor to the start of the current line
    LineStart,
    /// Move the text cursor to a character cell
    GotoCharacter { x: u8, y: u8 },
    /// Move the text cursor to a pixel position
    GotoPixel { x: u8, y: u8 },
    /// Draw a line between two points
    Line { x1: u8, y1: u8, x2: u8, y2: u8 },
    /// Draw a box outline between two corners
    Box { x1: u8, y1: u8, x2: u8, y2: u8 },
    /// Draw a filled box between two corners
    FilledBox { x1: u8, y1: u8, x2: u8, y2: u8 },
    /// Draw a circle outline
    Circle { x: u8, y: u8, radius: u8 },
    /// Draw a filled circle
    FilledCircle { x: u8, y: u8, radius: u8 },
    /// Draw a bitmap file from the SD card with its top-left corner at x, y
    Bitmap { x: u8, y: u8, filename: &'a str },
    /// Set the backlight brightness (0 = off, 100 = maximum)
    Backlight(u8),
}

impl<'a> Command<'a> {
    /// Opcode of this command
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Clear => Opcode::Clear,
            Command::SetForeground(_) => Opcode::SetForeground,
            Command::SetBackground(_) => Opcode::SetBackground,
            Command::SetRotation(_) => Opcode::Rotation,
            Command::SetFontSize(_) => Opcode::FontSize,
            Command::LineStart => Opcode::LineStart,
            Command::GotoCharacter { .. } => Opcode::GotoCharacter,
            Command::GotoPixel { .. } => Opcode::GotoPixel,
            Command::Line { .. } => Opcode::Line,
            Command::Box { .. } => Opcode::Box,
            Command::FilledBox { .. } => Opcode::FilledBox,
            Command::Circle { .. } => Opcode::Circle,
            Command::FilledCircle { .. } => Opcode::FilledCircle,
            Command::Bitmap { .. } => Opcode::Bitmap,
            Command::Backlight(_) => Opcode::Backlight,
        }
    }

    /// Encode this command into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let opcode = self.opcode();
        match *self {
            Command::Clear | Command::LineStart => Ok(Frame::empty(opcode)),
            Command::SetForeground(colour) | Command::SetBackground(colour) => {
                Frame::new(opcode, &[colour.to_byte()])
            }
            Command::SetRotation(rotation) => Frame::new(opcode, &[rotation.to_byte()]),
            Command::SetFontSize(size) => Frame::new(opcode, &[size.to_byte()]),
            Command::GotoCharacter { x, y } | Command::GotoPixel { x, y } => {
                Frame::new(opcode, &[x, y])
            }
            Command::Line { x1, y1, x2, y2 }
            | Command::Box { x1, y1, x2, y2 }
            | Command::FilledBox { x1, y1, x2, y2 } => Frame::new(opcode, &[x1, y1, x2, y2]),
            Command::Circle { x, y, radius } | Command::FilledCircle { x, y, radius } => {
                Frame::new(opcode, &[x, y, radius])
            }
            Command::Bitmap { x, y, filename } => {
                // Payload: [x][y][filename bytes...], no terminator
                let name = filename.as_bytes();
                if name.len() > MAX_FILENAME_LEN {
                    return Err(FrameError::PayloadTooLarge);
                }

                let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                payload.push(x).map_err(|_| FrameError::PayloadTooLarge)?;
                payload.push(y).map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(name)
                    .map_err(|_| FrameError::PayloadTooLarge)?;

                Frame::new(opcode, &payload)
            }
            Command::Backlight(level) => Frame::new(opcode, &[level]),
        }
    }

    /// Parse a command from a frame
    ///
    /// The bitmap filename borrows from the frame payload.
    pub fn from_frame(frame: &'a Frame) -> Result<Self, FrameError> {
        let p = frame.payload.as_slice();
        if let Some(count) = frame.opcode.param_count() {
            if p.len() != count {
                return Err(FrameError::InvalidFrame);
            }
        }

        let colour = |byte: u8| Colour::from_byte(byte).ok_or(FrameError::InvalidParameter);

        let command = match frame.opcode {
            Opcode::Clear => Command::Clear,
            Opcode::SetForeground => Command::SetForeground(colour(p[0])?),
            Opcode::SetBackground => Command::SetBackground(colour(p[0])?),
            Opcode::Rotation => Command::SetRotation(
                Rotation::from_byte(p[0]).ok_or(FrameError::InvalidParameter)?,
            ),
            Opcode::FontSize => Command::SetFontSize(
                FontSize::from_byte(p[0]).ok_or(FrameError::InvalidParameter)?,
            ),
            Opcode::LineStart => Command::LineStart,
            Opcode::GotoCharacter => Command::GotoCharacter { x: p[0], y: p[1] },
            Opcode::GotoPixel => Command::GotoPixel { x: p[0], y: p[1] },
            Opcode::Line => Command::Line {
                x1: p[0],
                y1: p[1],
                x2: p[2],
                y2: p[3],
            },
            Opcode::Box => Command::Box {
                x1: p[0],
                y1: p[1],
                x2: p[2],
                y2: p[3],
            },
            Opcode::FilledBox => Command::FilledBox {
                x1: p[0],
                y1: p[1],
                x2: p[2],
                y2: p[3],
            },
            Opcode::Circle => Command::Circle {
                x: p[0],
                y: p[1],
                radius: p[2],
            },
            Opcode::FilledCircle => Command::FilledCircle {
                x: p[0],
                y: p[1],
                radius: p[2],
            },
            Opcode::Bitmap => {
                if p.len() < 2 {
                    return Err(FrameError::InvalidFrame);
                }
                let filename =
                    core::str::from_utf8(&p[2..]).map_err(|_| FrameError::InvalidParameter)?;
                Command::Bitmap {
                    x: p[0],
                    y: p[1],
                    filename,
                }
            }
            Opcode::Backlight => Command::Backlight(p[0]),
        };
        Ok(command)
    }
}
