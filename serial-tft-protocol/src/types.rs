//! Value types understood by the display firmware

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Screen width in pixels in landscape orientation
pub const LANDSCAPE_WIDTH: u8 = 160;

/// Screen height in pixels in landscape orientation
pub const LANDSCAPE_HEIGHT: u8 = 128;

/// End coordinate used for full-width and full-height lines
///
/// The firmware clips coordinates past the edge, so the landscape width is
/// used for both axes.
pub const FULL_SPAN_END: u8 = LANDSCAPE_WIDTH - 1;

/// Colours supported by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Colour {
    Black = 0,
    Blue = 1,
    Red = 2,
    Green = 3,
    Cyan = 4,
    Magenta = 5,
    Yellow = 6,
    White = 7,
}

/// American spelling of [`Colour`]
pub type Color = Colour;

impl Colour {
    /// Every colour, in wire order
    pub const ALL: [Colour; 8] = [
        Colour::Black,
        Colour::Blue,
        Colour::Red,
        Colour::Green,
        Colour::Cyan,
        Colour::Magenta,
        Colour::Yellow,
        Colour::White,
    ];

    /// Parse a colour from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(byte as usize).copied()
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Screen orientation
///
/// Portrait orientations are 128x160 pixels, landscape 160x128.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Rotation {
    PortraitInverted = 0,
    LandscapeInverted = 1,
    Portrait = 2,
    #[default]
    Landscape = 3,
}

impl Rotation {
    /// Parse a rotation from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Rotation::PortraitInverted),
            1 => Some(Rotation::LandscapeInverted),
            2 => Some(Rotation::Portrait),
            3 => Some(Rotation::Landscape),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Returns true for the two portrait orientations
    pub fn is_portrait(self) -> bool {
        matches!(self, Rotation::Portrait | Rotation::PortraitInverted)
    }

    /// Screen size in pixels as (width, height)
    pub fn dimensions(self) -> (u8, u8) {
        if self.is_portrait() {
            (LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH)
        } else {
            (LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT)
        }
    }
}

/// Text font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum FontSize {
    /// 26x16 characters landscape, 21x20 portrait
    Small = 1,
    /// 13x8 characters landscape, 10x10 portrait
    #[default]
    Medium = 2,
    /// 8x5 characters landscape, 7x6 portrait
    Large = 3,
}

impl FontSize {
    /// Parse a font size from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(FontSize::Small),
            2 => Some(FontSize::Medium),
            3 => Some(FontSize::Large),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Screen size in whole characters as (columns, rows)
    pub fn text_grid(self, rotation: Rotation) -> (u8, u8) {
        match (self, rotation.is_portrait()) {
            (FontSize::Small, false) => (26, 16),
            (FontSize::Small, true) => (21, 20),
            (FontSize::Medium, false) => (13, 8),
            (FontSize::Medium, true) => (10, 10),
            (FontSize::Large, false) => (8, 5),
            (FontSize::Large, true) => (7, 6),
        }
    }
}

/// How a shape is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeStyle {
    /// Outline only, in the line colour
    #[default]
    Outline,
    /// Fill only, in the fill colour
    Fill,
    /// Fill, then outline on top
    FilledOutline,
}

impl ShapeStyle {
    /// Whether the shape interior is filled
    pub fn fills(self) -> bool {
        matches!(self, ShapeStyle::Fill | ShapeStyle::FilledOutline)
    }

    /// Whether the shape outline is drawn
    pub fn outlines(self) -> bool {
        matches!(self, ShapeStyle::Outline | ShapeStyle::FilledOutline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_wire_values() {
        assert_eq!(Colour::Black.to_byte(), 0);
        assert_eq!(Colour::White.to_byte(), 7);
        for c in Colour::ALL {
            assert_eq!(Colour::from_byte(c.to_byte()), Some(c));
        }
        assert_eq!(Colour::from_byte(8), None);
    }

    #[test]
    fn test_rotation_default_is_landscape() {
        assert_eq!(Rotation::default(), Rotation::Landscape);
        assert_eq!(Rotation::default().to_byte(), 3);
        assert_eq!(Rotation::from_byte(4), None);
    }

    #[test]
    fn test_rotation_dimensions() {
        assert_eq!(Rotation::Landscape.dimensions(), (160, 128));
        assert_eq!(Rotation::LandscapeInverted.dimensions(), (160, 128));
        assert_eq!(Rotation::Portrait.dimensions(), (128, 160));
        assert_eq!(Rotation::PortraitInverted.dimensions(), (128, 160));
    }

    #[test]
    fn test_font_size_wire_values() {
        assert_eq!(FontSize::Small.to_byte(), 1);
        assert_eq!(FontSize::default(), FontSize::Medium);
        assert_eq!(FontSize::from_byte(0), None);
        assert_eq!(FontSize::from_byte(3), Some(FontSize::Large));
        assert_eq!(FontSize::Medium.text_grid(Rotation::Landscape), (13, 8));
    }

    #[test]
    fn test_shape_style_flags() {
        assert!(ShapeStyle::Outline.outlines() && !ShapeStyle::Outline.fills());
        assert!(ShapeStyle::Fill.fills() && !ShapeStyle::Fill.outlines());
        assert!(ShapeStyle::FilledOutline.fills() && ShapeStyle::FilledOutline.outlines());
    }
}
