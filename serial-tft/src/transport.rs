//! Serial transport selection
//!
//! The driver either borrows a port the application already owns, or owns
//! one it created itself from a pin pair. Owned ports are dropped with the
//! driver; borrowed ones are left alone and the borrow checker guarantees
//! they outlive it.

use serial_tft_hal::{SerialKind, SerialPort};

/// Which of the three supported connection modes is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialMode {
    /// Hardware UART
    Hardware,
    /// Software UART provided by the application
    SoftwareExternal,
    /// Software UART created and owned by the driver
    SoftwareInternal,
}

/// A serial port, borrowed or owned
pub enum Transport<'a, T> {
    /// Port owned by the caller
    Borrowed(&'a mut T),
    /// Port owned by the driver
    Owned(T),
}

impl<'a, T: SerialPort> Transport<'a, T> {
    /// Connection mode of this transport
    pub fn mode(&self) -> SerialMode {
        match (T::KIND, self.is_owned()) {
            (SerialKind::Hardware, _) => SerialMode::Hardware,
            (SerialKind::Software, false) => SerialMode::SoftwareExternal,
            (SerialKind::Software, true) => SerialMode::SoftwareInternal,
        }
    }

    /// Whether the port is released together with this transport
    pub fn is_owned(&self) -> bool {
        matches!(self, Transport::Owned(_))
    }

    /// Open the port at the given baud rate
    pub fn begin(&mut self, baudrate: u32) {
        self.port().begin(baudrate);
    }

    /// Write bytes, blocking until they are queued
    pub fn write(&mut self, data: &[u8]) -> Result<(), T::Error> {
        self.port().write_blocking(data)
    }

    /// Block until all queued bytes are transmitted
    pub fn flush(&mut self) -> Result<(), T::Error> {
        self.port().flush()
    }

    /// Take back an owned port
    ///
    /// Returns `None` for a borrowed port.
    pub fn into_owned(self) -> Option<T> {
        match self {
            Transport::Borrowed(_) => None,
            Transport::Owned(port) => Some(port),
        }
    }

    fn port(&mut self) -> &mut T {
        match self {
            Transport::Borrowed(port) => &mut **port,
            Transport::Owned(port) => port,
        }
    }
}
