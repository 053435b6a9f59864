//! Command opcode table
//!
//! The opcode numbering is fixed by the display firmware.

/// Display command opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Clear the screen to the background colour
    Clear = 0,
    /// Set the foreground (drawing and text) colour
    SetForeground = 1,
    /// Set the background colour
    SetBackground = 2,
    /// Set the screen rotation
    Rotation = 3,
    /// Set the text font size
    FontSize = 4,
    /// Move the text cursor to the start of the current line
    LineStart = 5,
    /// Move the text cursor to a character cell
    GotoCharacter = 6,
    /// Move the text cursor to a pixel position
    GotoPixel = 7,
    /// Draw a line
    Line = 8,
    /// Draw a box outline
    Box = 9,
    /// Draw a filled box
    FilledBox = 10,
    /// Draw a circle outline
    Circle = 11,
    /// Draw a filled circle
    FilledCircle = 12,
    /// Draw a bitmap file from the display's SD card
    Bitmap = 13,
    /// Set the backlight brightness
    Backlight = 14,
}

impl Opcode {
    /// Every opcode, in wire order
    pub const ALL: [Opcode; 15] = [
        Opcode::Clear,
        Opcode::SetForeground,
        Opcode::SetBackground,
        Opcode::Rotation,
        Opcode::FontSize,
        Opcode::LineStart,
        Opcode::GotoCharacter,
        Opcode::GotoPixel,
        Opcode::Line,
        Opcode::Box,
        Opcode::FilledBox,
        Opcode::Circle,
        Opcode::FilledCircle,
        Opcode::Bitmap,
        Opcode::Backlight,
    ];

    /// Parse an opcode from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(byte as usize).copied()
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Number of parameter bytes carried by this opcode
    ///
    /// Returns `None` for [`Opcode::Bitmap`], whose filename has no fixed
    /// length.
    pub fn param_count(self) -> Option<usize> {
        match self {
            Opcode::Clear | Opcode::LineStart => Some(0),
            Opcode::SetForeground
            | Opcode::SetBackground
            | Opcode::Rotation
            | Opcode::FontSize
            | Opcode::Backlight => Some(1),
            Opcode::GotoCharacter | Opcode::GotoPixel => Some(2),
            Opcode::Circle | Opcode::FilledCircle => Some(3),
            Opcode::Line | Opcode::Box | Opcode::FilledBox => Some(4),
            Opcode::Bitmap => None,
        }
    }

    /// Minimum number of payload bytes for this opcode
    ///
    /// Bitmap frames need at least the x and y coordinates.
    pub fn min_payload(self) -> usize {
        self.param_count().unwrap_or(2)
    }
}
