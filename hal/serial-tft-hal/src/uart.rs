//! UART serial communication abstractions
//!
//! Provides the blocking transmit traits the display driver writes command
//! frames through. The display never talks back, so there is no receive side.

/// Baud rate the display firmware ships with
pub const DEFAULT_BAUDRATE: u32 = 9600;

/// UART transmitter
///
/// Blocking trait for sending data over a UART interface.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    ///
    /// Blocks until every queued byte has left the transmitter.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// How a serial port is implemented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialKind {
    /// Peripheral UART
    Hardware,
    /// Bit-banged UART emulated in software
    Software,
}

/// A serial port that must be opened before use
///
/// Hardware and software ports open differently (a hardware UART takes a
/// full line configuration, a software UART only supports 8N1), but both
/// are driven the same way once open.
pub trait SerialPort: UartTx {
    /// Implementation kind of this port
    const KIND: SerialKind;

    /// Open the port at the given baud rate
    fn begin(&mut self, baudrate: u32);
}

/// Software-emulated serial port
///
/// Implementations can be created from a bare pin pair, which lets the
/// display driver allocate and own one.
pub trait SoftwareSerial: SerialPort + Sized {
    /// Create a port on the given receive and transmit pins
    ///
    /// `tx` is the transmit pin of this MCU and connects to the display's
    /// RX line, and vice versa.
    fn from_pins(rx: u8, tx: u8) -> Self;
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::with_baudrate(DEFAULT_BAUDRATE)
    }
}

impl UartConfig {
    /// 8N1 configuration at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
