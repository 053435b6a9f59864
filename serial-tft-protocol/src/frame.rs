//! Frame encoding for the serial TFT protocol.
//!
//! Frame format:
//! - START (1 byte): 0x1B marker
//! - OPCODE (1 byte): command identifier
//! - PAYLOAD (0-4 bytes, or x, y and a filename for bitmaps)
//! - END (1 byte): 0xFF marker
//!
//! Framing relies on the two markers alone. Nothing is escaped, so a bitmap
//! filename must never contain the end marker.

use heapless::Vec;

use crate::opcode::Opcode;

/// Start-of-command marker
pub const FRAME_START: u8 = 0x1B;

/// End-of-command marker
pub const FRAME_END: u8 = 0xFF;

/// Maximum payload size in bytes
///
/// Only bitmap frames approach this: two coordinate bytes plus the filename.
pub const MAX_PAYLOAD_SIZE: usize = 250;

/// Maximum complete frame size (START + OPCODE + MAX_PAYLOAD + END)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Opcode byte outside the command table
    UnknownOpcode,
    /// Payload length does not match the opcode, or a marker is misplaced
    InvalidFrame,
    /// A parameter byte is out of range for its field
    InvalidParameter,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command identifier
    pub opcode: Opcode,
    /// Parameter bytes
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given opcode and payload
    ///
    /// Fixed-size opcodes must be given exactly their parameter count.
    pub fn new(opcode: Opcode, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(FrameError::PayloadTooLarge);
        }
        match opcode.param_count() {
            Some(count) if count != payload.len() => return Err(FrameError::InvalidFrame),
            None if payload.len() < opcode.min_payload() => return Err(FrameError::InvalidFrame),
            _ => {}
        }

        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            opcode,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload
    pub fn empty(opcode: Opcode) -> Self {
        Self {
            opcode,
            payload: Vec::new(),
        }
    }

    /// Number of bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        3 + self.payload.len() // START + OPCODE + payload + END
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = FRAME_START;
        buffer[1] = self.opcode.to_byte();
        buffer[2..2 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[2 + self.payload.len()] = FRAME_END;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_encode_empty_payload() {
        let frame = Frame::empty(Opcode::Clear);
        let mut buffer = [0u8; 10];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 3);
        assert_eq!(&buffer[..3], &[0x1B, 0x00, 0xFF]);
    }

    #[test]
    fn test_frame_encode_with_payload() {
        let frame = Frame::new(Opcode::Line, &[12, 0, 100, 90]).unwrap();
        let mut buffer = [0u8; 20];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 7);
        assert_eq!(&buffer[..7], &[0x1B, 8, 12, 0, 100, 90, 0xFF]);
    }

    #[test]
    fn test_parameter_may_equal_end_marker() {
        let frame = Frame::new(Opcode::Backlight, &[0xFF]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(encoded.as_slice(), &[0x1B, 14, 0xFF, 0xFF]);
    }

    #[test]
    fn test_wrong_param_count_rejected() {
        assert_eq!(
            Frame::new(Opcode::Line, &[1, 2, 3]),
            Err(FrameError::InvalidFrame)
        );
        assert_eq!(
            Frame::new(Opcode::Clear, &[0]),
            Err(FrameError::InvalidFrame)
        );
        assert_eq!(
            Frame::new(Opcode::Bitmap, &[1]),
            Err(FrameError::InvalidFrame)
        );
    }

    #[test]
    fn test_buffer_too_small() {
        let frame = Frame::new(Opcode::Box, &[1, 2, 3, 4]).unwrap();
        let mut buffer = [0u8; 6];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_payload_too_large() {
        let large_payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        let result = Frame::new(Opcode::Bitmap, &large_payload);
        assert_eq!(result, Err(FrameError::PayloadTooLarge));
    }

    #[test]
    fn test_max_bitmap_frame_fits() {
        let payload = [b'a'; MAX_PAYLOAD_SIZE];
        let frame = Frame::new(Opcode::Bitmap, &payload).unwrap();
        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(encoded.len(), MAX_FRAME_SIZE);
        assert_eq!(encoded[MAX_FRAME_SIZE - 1], FRAME_END);
    }
}
