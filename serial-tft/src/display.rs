//! Display command encoder
//!
//! [`SerialTft`] turns drawing calls into command frames and writes them to
//! the serial transport. Line and fill colours are applied lazily: the
//! foreground colour command is only sent right before something is drawn,
//! and only if the display is not already using that colour.

use embedded_hal::delay::DelayNs;
use serial_tft_hal::{NoPin, OutputPin, SerialPort, SoftwareSerial};
use serial_tft_protocol::types::FULL_SPAN_END;
use serial_tft_protocol::{
    Colour, Command, FontSize, Opcode, Rotation, ShapeStyle, FRAME_END, FRAME_START,
    MAX_FRAME_SIZE,
};

use crate::cache::{ColourCache, DrawingColours};
use crate::config::TftConfig;
use crate::diagnostics::Diagnostics;
use crate::reset::ResetLine;
use crate::transport::{SerialMode, Transport};

/// Hobbytronics serial TFT driver
///
/// Text can be written with [`SerialTft::print`], or through
/// [`core::fmt::Write`] and [`embedded_io::Write`], which makes `write!`
/// work directly on the driver.
pub struct SerialTft<'a, T, P = NoPin> {
    transport: Transport<'a, T>,
    reset: Option<ResetLine<P>>,
    config: TftConfig,
    colours: DrawingColours,
    cache: ColourCache,
    diagnostics: Diagnostics,
}

impl<'a, T: SerialPort> SerialTft<'a, T, NoPin> {
    /// Create a driver on a port owned by the application
    ///
    /// The port is not opened. Call [`SerialTft::begin`], or open the port
    /// directly, before drawing.
    pub fn new(port: &'a mut T) -> Self {
        Self::with_transport(Transport::Borrowed(port), None)
    }
}

impl<'a, T: SoftwareSerial> SerialTft<'a, T, NoPin> {
    /// Create a driver that owns a software serial port on the given pins
    ///
    /// `tx` connects to the display's RX line. The port is released when
    /// the driver is dropped. Call [`SerialTft::begin`] before drawing.
    pub fn from_pins(rx: u8, tx: u8) -> Self {
        Self::with_transport(Transport::Owned(T::from_pins(rx, tx)), None)
    }
}

impl<'a, T: SoftwareSerial, P: OutputPin> SerialTft<'a, T, P> {
    /// Create a driver that owns a software serial port, with a reset line
    ///
    /// The reset line is driven high but the display is not reset.
    pub fn from_pins_with_reset(rx: u8, tx: u8, reset: P) -> Self {
        Self::with_transport(Transport::Owned(T::from_pins(rx, tx)), Some(reset))
    }
}

impl<'a, T: SerialPort, P: OutputPin> SerialTft<'a, T, P> {
    /// Create a driver on a port owned by the application, with a reset line
    ///
    /// The reset line is driven high but the display is not reset.
    pub fn new_with_reset(port: &'a mut T, reset: P) -> Self {
        Self::with_transport(Transport::Borrowed(port), Some(reset))
    }

    /// Create a driver from any transport and optional reset line
    pub fn with_transport(transport: Transport<'a, T>, reset: Option<P>) -> Self {
        let config = TftConfig::default();
        let driver = Self {
            reset: reset.map(ResetLine::new),
            colours: DrawingColours::from_config(&config),
            config,
            cache: ColourCache::new(),
            diagnostics: Diagnostics::default(),
            transport,
        };
        debug!(
            "serial tft created: mode={}, reset_line={}",
            driver.mode(),
            driver.has_reset_line()
        );
        driver
    }

    /// Replace the configuration
    ///
    /// Drawing colours are reset to the configured defaults.
    pub fn with_config(mut self, config: TftConfig) -> Self {
        self.config = config;
        self.colours = DrawingColours::from_config(&config);
        self
    }

    /// Give back the owned port, if any, and the reset pin, if any
    pub fn release(self) -> (Option<T>, Option<P>) {
        (
            self.transport.into_owned(),
            self.reset.map(ResetLine::into_inner),
        )
    }

    //--------------------------------------------------------------------
    // Connection control

    /// Open the serial connection at the given baud rate
    ///
    /// Not needed if the application opened a borrowed port itself.
    pub fn begin(&mut self, baudrate: u32) {
        info!("opening serial tft at {} baud", baudrate);
        self.transport.begin(baudrate);
    }

    /// Open the serial connection at the configured baud rate (9600 unless
    /// configured otherwise)
    pub fn begin_default(&mut self) {
        self.begin(self.config.baudrate);
    }

    /// Reset the display using the reset line
    ///
    /// Does nothing without a reset line. The display may ignore commands
    /// for up to 4 seconds afterwards, and does not clear its screen.
    pub fn reset(&mut self, delay: &mut impl DelayNs) {
        let Some(line) = self.reset.as_mut() else {
            trace!("reset requested without a reset line");
            return;
        };
        info!("resetting serial tft");
        line.pulse(delay, self.config.reset_pulse_us);
        // The firmware reverts to its own colours after a reset
        self.cache.invalidate();
    }

    /// Wait until all pending outgoing data has been transmitted
    pub fn flush(&mut self) {
        if self.transport.flush().is_err() {
            warn!("serial tft flush failed");
            self.diagnostics.record_flush_failure();
        }
    }

    /// Connection mode in use
    pub fn mode(&self) -> SerialMode {
        self.transport.mode()
    }

    /// Whether a reset line was provided
    pub fn has_reset_line(&self) -> bool {
        self.reset.is_some()
    }

    /// Active configuration
    pub fn config(&self) -> &TftConfig {
        &self.config
    }

    /// Link counters
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Zero the link counters
    pub fn reset_diagnostics(&mut self) {
        self.diagnostics = Diagnostics::default();
    }

    //--------------------------------------------------------------------
    // Colours

    /// Set the colour used to clear the screen and behind text
    ///
    /// Sent to the display on the next [`SerialTft::clear_screen`].
    pub fn set_background_colour(&mut self, colour: Colour) {
        self.colours.background = colour;
    }

    /// Set the colour used for lines, outlines and text
    ///
    /// Sent to the display when next needed.
    pub fn set_line_colour(&mut self, colour: Colour) {
        self.colours.line = colour;
    }

    /// Set the colour used to fill shapes
    ///
    /// Sent to the display when next needed.
    pub fn set_fill_colour(&mut self, colour: Colour) {
        self.colours.fill = colour;
    }

    /// Currently selected drawing colours
    pub fn colours(&self) -> DrawingColours {
        self.colours
    }

    //--------------------------------------------------------------------
    // General display functions

    /// Set the orientation for subsequent drawing
    ///
    /// Existing screen content is not rotated.
    pub fn set_screen_rotation(&mut self, rotation: Rotation) {
        self.send(Command::SetRotation(rotation));
    }

    /// Set the backlight brightness from 0 (off) to 100 (maximum)
    ///
    /// The level is sent as given; the display firmware handles values
    /// above 100.
    pub fn set_backlight_brightness(&mut self, level: u8) {
        self.send(Command::Backlight(level));
    }

    /// Clear the screen to the background colour
    pub fn clear_screen(&mut self) {
        self.apply_background_colour();
        self.send(Command::Clear);
    }

    /// Draw a bitmap file from the display's SD card at x, y
    ///
    /// The filename is streamed straight to the port, so its length is not
    /// limited by the frame buffer. A `&str` can never contain the 0xFF end
    /// marker.
    pub fn draw_bitmap(&mut self, x: u8, y: u8, filename: &str) {
        trace!("tft bitmap at {},{}: {}", x, y, filename);
        let header = [FRAME_START, Opcode::Bitmap.to_byte(), x, y];
        if self.write_raw(&header)
            && self.write_raw(filename.as_bytes())
            && self.write_raw(&[FRAME_END])
        {
            self.diagnostics.record_frame();
        }
    }

    //--------------------------------------------------------------------
    // Shapes

    /// Draw a single pixel in the line colour
    ///
    /// Drawing pixels one at a time is slow.
    pub fn draw_pixel(&mut self, x: u8, y: u8) {
        self.draw_line(x, y, x, y);
    }

    /// Draw a horizontal line across the whole screen
    pub fn draw_horizontal_line(&mut self, y: u8) {
        self.draw_line(0, y, FULL_SPAN_END, y);
    }

    /// Draw a horizontal line from x1,y to x2,y
    pub fn draw_horizontal_segment(&mut self, x1: u8, y: u8, x2: u8) {
        self.draw_line(x1, y, x2, y);
    }

    /// Draw a vertical line down the whole screen
    pub fn draw_vertical_line(&mut self, x: u8) {
        self.draw_line(x, 0, x, FULL_SPAN_END);
    }

    /// Draw a vertical line from x,y1 to x,y2
    pub fn draw_vertical_segment(&mut self, x: u8, y1: u8, y2: u8) {
        self.draw_line(x, y1, x, y2);
    }

    /// Draw a line from x1,y1 to x2,y2 in the line colour
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) {
        self.apply_line_colour();
        self.send(Command::Line { x1, y1, x2, y2 });
    }

    /// Draw a box with opposite corners at x1,y1 and x2,y2
    pub fn draw_box(&mut self, x1: u8, y1: u8, x2: u8, y2: u8, style: ShapeStyle) {
        // Fill first so the outline stays visible on top
        if style.fills() {
            self.apply_fill_colour();
            self.send(Command::FilledBox { x1, y1, x2, y2 });
        }
        if style.outlines() {
            self.apply_line_colour();
            self.send(Command::Box { x1, y1, x2, y2 });
        }
    }

    /// Draw a circle centred on x,y
    pub fn draw_circle(&mut self, x: u8, y: u8, radius: u8, style: ShapeStyle) {
        if style.fills() {
            self.apply_fill_colour();
            self.send(Command::FilledCircle { x, y, radius });
        }
        if style.outlines() {
            self.apply_line_colour();
            self.send(Command::Circle { x, y, radius });
        }
    }

    /// Draw a triangle between three points
    ///
    /// The firmware has no triangle command, so the outline is drawn as
    /// three lines and filling is not supported: `Fill` draws nothing and
    /// `FilledOutline` draws the outline only.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        x3: u8,
        y3: u8,
        style: ShapeStyle,
    ) {
        if style.fills() && !style.outlines() {
            warn!("filled triangles are not supported by the display");
            self.diagnostics.record_dropped();
            return;
        }
        self.draw_line(x1, y1, x2, y2);
        self.draw_line(x2, y2, x3, y3);
        self.draw_line(x3, y3, x1, y1);
    }

    //--------------------------------------------------------------------
    // Text

    /// Set the font size for subsequent text
    pub fn set_font_size(&mut self, size: FontSize) {
        self.send(Command::SetFontSize(size));
    }

    /// Move the text cursor to the start of the current line
    pub fn goto_text_line_start(&mut self) {
        self.send(Command::LineStart);
    }

    /// Move the text cursor to a character cell
    ///
    /// Cell size depends on the current font size.
    pub fn goto_character_position(&mut self, x: u8, y: u8) {
        self.send(Command::GotoCharacter { x, y });
    }

    /// Move the text cursor to a pixel position
    pub fn goto_pixel_position(&mut self, x: u8, y: u8) {
        self.send(Command::GotoPixel { x, y });
    }

    /// Write one character at the text cursor in the line colour
    pub fn write_byte(&mut self, byte: u8) {
        self.apply_line_colour();
        self.write_raw(&[byte]);
    }

    /// Write a string at the text cursor in the line colour
    pub fn print(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Write raw text bytes at the text cursor in the line colour
    ///
    /// Equivalent to calling [`SerialTft::write_byte`] for each byte.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        // Once applied the colour is cached, so per-byte application would
        // put exactly these bytes on the wire
        self.apply_line_colour();
        self.write_raw(bytes);
    }

    //--------------------------------------------------------------------
    // Internal operations

    fn apply_line_colour(&mut self) {
        self.send_foreground(self.colours.line);
    }

    fn apply_fill_colour(&mut self) {
        self.send_foreground(self.colours.fill);
    }

    fn apply_background_colour(&mut self) {
        let colour = self.colours.background;
        if self.cache.background_stale(colour) && self.send(Command::SetBackground(colour)) {
            self.cache.mark_background(colour);
        }
    }

    fn send_foreground(&mut self, colour: Colour) {
        if self.cache.foreground_stale(colour) && self.send(Command::SetForeground(colour)) {
            self.cache.mark_foreground(colour);
        }
    }

    /// Frame and write a command. Returns true if it reached the transport.
    fn send(&mut self, command: Command<'_>) -> bool {
        trace!("tft command: {}", command);
        let frame = match command.to_frame() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("dropping tft command: {}", e);
                self.diagnostics.record_dropped();
                return false;
            }
        };

        let mut buf = [0u8; MAX_FRAME_SIZE];
        let len = match frame.encode(&mut buf) {
            Ok(len) => len,
            Err(e) => {
                warn!("dropping tft command: {}", e);
                self.diagnostics.record_dropped();
                return false;
            }
        };

        let sent = self.write_raw(&buf[..len]);
        if sent {
            self.diagnostics.record_frame();
        }
        sent
    }

    fn write_raw(&mut self, data: &[u8]) -> bool {
        match self.transport.write(data) {
            Ok(()) => {
                self.diagnostics.record_write(data.len());
                true
            }
            Err(_) => {
                warn!("serial tft write of {} bytes failed", data.len());
                self.diagnostics.record_write_failure();
                false
            }
        }
    }
}

impl<'a, T: SerialPort, P: OutputPin> core::fmt::Write for SerialTft<'a, T, P> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s);
        Ok(())
    }
}

impl<'a, T: SerialPort, P: OutputPin> embedded_io::ErrorType for SerialTft<'a, T, P> {
    type Error = core::convert::Infallible;
}

impl<'a, T: SerialPort, P: OutputPin> embedded_io::Write for SerialTft<'a, T, P> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        SerialTft::flush(self);
        Ok(())
    }
}
