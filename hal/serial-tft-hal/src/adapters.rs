//! Adapters from the embedded-hal ecosystem
//!
//! Most HALs already expose UART transmitters as [`embedded_io::Write`] and
//! GPIOs as [`embedded_hal::digital::OutputPin`]. These wrappers let them be
//! handed to the display driver without a bespoke implementation.

use embedded_hal::digital::OutputPin as HalOutputPin;
use embedded_io::Write;

use crate::gpio::OutputPin;
use crate::uart::{SerialKind, SerialPort, UartConfig, UartTx};

/// Hardware UART backed by an [`embedded_io::Write`] transmitter
///
/// HAL UART drivers take their line configuration at construction, so
/// [`SerialPort::begin`] only records the requested baud rate. Use
/// [`IoSerial::config`] to check it against what the peripheral was built
/// with.
pub struct IoSerial<W> {
    writer: W,
    config: UartConfig,
    opened: bool,
}

impl<W: Write> IoSerial<W> {
    /// Wrap a transmitter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: UartConfig::default(),
            opened: false,
        }
    }

    /// Requested line configuration
    pub fn config(&self) -> UartConfig {
        self.config
    }

    /// Whether [`SerialPort::begin`] has been called
    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Borrow the wrapped transmitter
    pub fn inner(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped transmitter
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UartTx for IoSerial<W> {
    type Error = W::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}

impl<W: Write> SerialPort for IoSerial<W> {
    const KIND: SerialKind = SerialKind::Hardware;

    fn begin(&mut self, baudrate: u32) {
        self.config = UartConfig::with_baudrate(baudrate);
        self.opened = true;
    }
}

/// Output pin backed by an [`embedded_hal::digital::OutputPin`]
///
/// Pin errors are discarded: the reset line is fire-and-forget in the same
/// way as the serial link. The last requested level is tracked locally so
/// `is_set_high` works for pins that are not stateful.
pub struct HalPin<P> {
    pin: P,
    high: bool,
}

impl<P: HalOutputPin> HalPin<P> {
    /// Wrap an output pin
    ///
    /// The pin is assumed low until first driven.
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: HalOutputPin> OutputPin for HalPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use heapless::Vec;

    #[derive(Default)]
    struct SinkWriter {
        bytes: Vec<u8, 64>,
        flushes: usize,
    }

    impl embedded_io::ErrorType for SinkWriter {
        type Error = Infallible;
    }

    impl Write for SinkWriter {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
            // Accept one byte at a time to exercise write_all's loop
            match buf.first() {
                Some(&b) => {
                    let _ = self.bytes.push(b);
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingPin {
        levels: Vec<bool, 8>,
    }

    impl embedded_hal::digital::ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl HalOutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let _ = self.levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            let _ = self.levels.push(true);
            Ok(())
        }
    }

    #[test]
    fn test_io_serial_writes_everything() {
        let mut serial = IoSerial::new(SinkWriter::default());
        serial.write_blocking(&[0x1B, 0x00, 0xFF]).unwrap();
        serial.flush().unwrap();
        assert_eq!(serial.inner().bytes.as_slice(), &[0x1B, 0x00, 0xFF]);
        assert_eq!(serial.inner().flushes, 1);
    }

    #[test]
    fn test_io_serial_begin_records_baudrate() {
        let mut serial = IoSerial::new(SinkWriter::default());
        assert!(!serial.is_open());
        serial.begin(115_200);
        assert!(serial.is_open());
        assert_eq!(serial.config().baudrate, 115_200);
        assert_eq!(<IoSerial<SinkWriter> as SerialPort>::KIND, SerialKind::Hardware);
    }

    #[test]
    fn test_hal_pin_tracks_level() {
        let mut pin = HalPin::new(RecordingPin::default());
        assert!(pin.is_set_low());
        pin.set_high();
        assert!(pin.is_set_high());
        pin.set_low();
        let inner = pin.into_inner();
        assert_eq!(inner.levels.as_slice(), &[true, false]);
    }
}
