//! Stream decoder for the serial TFT protocol
//!
//! The display only ever receives, so this decoder exists for host-side
//! tooling: display emulators, bus sniffers and tests that check what a
//! driver put on the wire.
//!
//! Because parameter bytes may legitimately equal the end marker, frames are
//! delimited using the opcode's parameter count rather than by scanning for
//! 0xFF. Only bitmap frames end at the first 0xFF after their coordinates.

use heapless::Vec;

use crate::frame::{Frame, FrameError, FRAME_END, FRAME_START, MAX_PAYLOAD_SIZE};
use crate::opcode::Opcode;

/// Item decoded from the byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A complete command frame
    Frame(Frame),
    /// A raw text byte sent outside any frame
    Text(u8),
}

/// State machine for parsing the outgoing byte stream
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    opcode: Opcode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Outside a frame; bytes are text
    Idle,
    /// Got START, waiting for OPCODE
    WaitingForOpcode,
    /// Reading a fixed number of parameter bytes
    ReadingParams(usize),
    /// Reading bitmap coordinates and filename up to END
    ReadingBitmap,
    /// Waiting for END
    WaitingForEnd,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::Idle,
            buffer: Vec::new(),
            opcode: Opcode::Clear,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::Idle;
        self.buffer.clear();
        self.opcode = Opcode::Clear;
    }

    /// Returns true when the parser is between frames
    pub fn is_idle(&self) -> bool {
        self.state == ParseState::Idle
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(token))` when a frame completes or a text byte is
    /// seen, `Ok(None)` when more bytes are needed, or `Err` on a malformed
    /// frame. The parser resynchronises on the next START after an error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Token>, FrameError> {
        match self.state {
            ParseState::Idle => {
                if byte == FRAME_START {
                    self.buffer.clear();
                    self.state = ParseState::WaitingForOpcode;
                    return Ok(None);
                }
                Ok(Some(Token::Text(byte)))
            }
            ParseState::WaitingForOpcode => {
                let Some(opcode) = Opcode::from_byte(byte) else {
                    self.reset();
                    return Err(FrameError::UnknownOpcode);
                };
                self.opcode = opcode;
                self.state = match opcode.param_count() {
                    Some(0) => ParseState::WaitingForEnd,
                    Some(count) => ParseState::ReadingParams(count),
                    None => ParseState::ReadingBitmap,
                };
                Ok(None)
            }
            ParseState::ReadingParams(count) => {
                // Cannot overflow: count is at most 4
                let _ = self.buffer.push(byte);
                if self.buffer.len() == count {
                    self.state = ParseState::WaitingForEnd;
                }
                Ok(None)
            }
            ParseState::ReadingBitmap => {
                if byte == FRAME_END && self.buffer.len() >= Opcode::Bitmap.min_payload() {
                    return Ok(Some(self.complete()));
                }
                if self.buffer.push(byte).is_err() {
                    self.reset();
                    return Err(FrameError::PayloadTooLarge);
                }
                Ok(None)
            }
            ParseState::WaitingForEnd => {
                if byte != FRAME_END {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                Ok(Some(self.complete()))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first token found, if any, and the number of bytes
    /// consumed. Remaining bytes after the token are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<(Option<Token>, usize), FrameError> {
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(token) = self.feed(byte)? {
                return Ok((Some(token), i + 1));
            }
        }
        Ok((None, bytes.len()))
    }

    fn complete(&mut self) -> Token {
        let frame = Frame {
            opcode: self.opcode,
            payload: self.buffer.clone(),
        };
        self.reset();
        Token::Frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::types::Colour;

    fn first_frame(bytes: &[u8]) -> Frame {
        let mut parser = FrameParser::new();
        match parser.feed_bytes(bytes).unwrap() {
            (Some(Token::Frame(frame)), _) => frame,
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_roundtrip() {
        let original = Command::Line {
            x1: 1,
            y1: 2,
            x2: 3,
            y2: 4,
        }
        .to_frame()
        .unwrap();
        let encoded = original.encode_to_vec().unwrap();

        let parsed = first_frame(&encoded);
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parameter_equal_to_end_marker() {
        let parsed = first_frame(&[0x1B, 8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(parsed.opcode, Opcode::Line);
        assert_eq!(parsed.payload.as_slice(), &[0xFF; 4]);
    }

    #[test]
    fn test_bitmap_coordinates_may_be_end_marker() {
        let parsed = first_frame(&[0x1B, 13, 0xFF, 0xFF, b'a', 0xFF]);
        let command = Command::from_frame(&parsed).unwrap();
        assert_eq!(
            command,
            Command::Bitmap {
                x: 0xFF,
                y: 0xFF,
                filename: "a"
            }
        );
    }

    #[test]
    fn test_text_outside_frames() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.feed(b'H').unwrap(), Some(Token::Text(b'H')));
        assert_eq!(parser.feed(0x1B).unwrap(), None);
        assert_eq!(parser.feed(1).unwrap(), None);
        assert_eq!(parser.feed(3).unwrap(), None);
        let token = parser.feed(0xFF).unwrap().unwrap();
        let Token::Frame(frame) = token else {
            panic!("expected frame");
        };
        assert_eq!(
            Command::from_frame(&frame).unwrap(),
            Command::SetForeground(Colour::Green)
        );
        assert!(parser.is_idle());
    }

    #[test]
    fn test_unknown_opcode() {
        let mut parser = FrameParser::new();
        parser.feed(0x1B).unwrap();
        assert_eq!(parser.feed(0x42), Err(FrameError::UnknownOpcode));
        assert!(parser.is_idle());
    }

    #[test]
    fn test_missing_end_marker() {
        let mut parser = FrameParser::new();
        let result = parser.feed_bytes(&[0x1B, 0, 0x00]);
        assert_eq!(result, Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_resync_after_garbage() {
        let mut parser = FrameParser::new();
        let _ = parser.feed_bytes(&[0x1B, 0x42]);

        let encoded = Command::Clear.to_frame().unwrap().encode_to_vec().unwrap();
        let parsed = first_frame(&encoded);
        assert_eq!(parsed.opcode, Opcode::Clear);

        assert_eq!(parser.feed(0x1B).unwrap(), None);
        assert_eq!(parser.feed(0).unwrap(), None);
        assert!(matches!(parser.feed(0xFF).unwrap(), Some(Token::Frame(_))));
    }

    #[test]
    fn test_feed_bytes_reports_consumed() {
        let mut parser = FrameParser::new();
        let bytes = [0x1B, 5, 0xFF, b'x'];
        let (token, used) = parser.feed_bytes(&bytes).unwrap();
        assert!(matches!(token, Some(Token::Frame(_))));
        assert_eq!(used, 3);
        let (token, used) = parser.feed_bytes(&bytes[used..]).unwrap();
        assert_eq!(token, Some(Token::Text(b'x')));
        assert_eq!(used, 1);
    }
}
