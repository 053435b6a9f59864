//! Property-based tests for what the driver puts on the wire.
//! Any sequence of colour changes and drawing calls must put exactly one
//! foreground command on the wire per actual register change.

use proptest::prelude::*;
use serial_tft::{Colour, SerialPort, SerialTft, ShapeStyle, UartTx};
use serial_tft_hal::SerialKind;
use serial_tft_protocol::{Command, FrameParser, Token};

#[derive(Default)]
struct CaptureSerial {
    sent: Vec<u8>,
}

impl UartTx for CaptureSerial {
    type Error = core::convert::Infallible;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.sent.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerialPort for CaptureSerial {
    const KIND: SerialKind = SerialKind::Hardware;

    fn begin(&mut self, _baudrate: u32) {}
}

#[derive(Debug, Clone, Copy)]
enum Op {
    LineColour(Colour),
    FillColour(Colour),
    Pixel(u8, u8),
    FilledBox,
    Text(u8),
}

fn colour() -> impl Strategy<Value = Colour> {
    (0u8..8).prop_map(|b| Colour::from_byte(b).unwrap())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        colour().prop_map(Op::LineColour),
        colour().prop_map(Op::FillColour),
        (any::<u8>(), any::<u8>()).prop_map(|(x, y)| Op::Pixel(x, y)),
        Just(Op::FilledBox),
        (0x20u8..0x7F).prop_map(Op::Text),
    ]
}

/// Foreground colours found on the wire, in order
fn foreground_commands(bytes: &[u8]) -> Vec<Colour> {
    let mut parser = FrameParser::new();
    bytes
        .iter()
        .filter_map(|&b| match parser.feed(b).unwrap() {
            Some(Token::Frame(frame)) => match Command::from_frame(&frame).unwrap() {
                Command::SetForeground(c) => Some(c),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn foreground_sent_only_on_change(ops in prop::collection::vec(op(), 0..64)) {
        let mut port = CaptureSerial::default();
        let mut tft = SerialTft::new(&mut port);

        // Model of the display's foreground register
        let mut line = Colour::White;
        let mut fill = Colour::Blue;
        let mut register: Option<Colour> = None;
        let mut expected = Vec::new();
        let mut use_colour = |colour: Colour, register: &mut Option<Colour>| {
            if *register != Some(colour) {
                *register = Some(colour);
                expected.push(colour);
            }
        };

        for op in &ops {
            match *op {
                Op::LineColour(c) => {
                    line = c;
                    tft.set_line_colour(c);
                }
                Op::FillColour(c) => {
                    fill = c;
                    tft.set_fill_colour(c);
                }
                Op::Pixel(x, y) => {
                    use_colour(line, &mut register);
                    tft.draw_pixel(x, y);
                }
                Op::FilledBox => {
                    use_colour(fill, &mut register);
                    tft.draw_box(0, 0, 10, 10, ShapeStyle::Fill);
                }
                Op::Text(c) => {
                    use_colour(line, &mut register);
                    tft.write_byte(c);
                }
            }
        }
        drop(tft);

        prop_assert_eq!(foreground_commands(&port.sent), expected);
    }

    #[test]
    fn backlight_level_reaches_the_wire(level in any::<u8>()) {
        let mut port = CaptureSerial::default();
        SerialTft::new(&mut port).set_backlight_brightness(level);

        prop_assert_eq!(port.sent, vec![0x1B, 14, level, 0xFF]);
    }

    #[test]
    fn bitmap_name_of_any_length_is_framed(
        len in 0usize..600,
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let name = "b".repeat(len);
        let mut port = CaptureSerial::default();
        SerialTft::new(&mut port).draw_bitmap(x, y, &name);

        prop_assert_eq!(port.sent.len(), len + 5);
        prop_assert_eq!(&port.sent[..4], &[0x1B, 13, x, y][..]);
        prop_assert_eq!(&port.sent[4..4 + len], name.as_bytes());
        prop_assert_eq!(port.sent[len + 4], 0xFF);
    }
}
