//! Link diagnostics
//!
//! The display never acknowledges anything, so write failures cannot be
//! reported back through the drawing API. They are counted here instead for
//! applications that want to keep an eye on the link. Counters saturate.

/// Counters describing traffic to the display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Diagnostics {
    /// Command frames written successfully
    pub frames_sent: u32,
    /// Bytes written successfully, frames and text combined
    pub bytes_sent: u32,
    /// Writes the transport reported as failed
    pub write_failures: u32,
    /// Flushes the transport reported as failed
    pub flush_failures: u32,
    /// Commands that could not be expressed on the wire
    pub dropped_commands: u32,
}

impl Diagnostics {
    /// Whether anything has gone wrong since the last reset
    pub fn is_healthy(&self) -> bool {
        self.write_failures == 0 && self.flush_failures == 0 && self.dropped_commands == 0
    }

    pub(crate) fn record_write(&mut self, len: usize) {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        self.bytes_sent = self.bytes_sent.saturating_add(len);
    }

    pub(crate) fn record_frame(&mut self) {
        self.frames_sent = self.frames_sent.saturating_add(1);
    }

    pub(crate) fn record_write_failure(&mut self) {
        self.write_failures = self.write_failures.saturating_add(1);
    }

    pub(crate) fn record_flush_failure(&mut self) {
        self.flush_failures = self.flush_failures.saturating_add(1);
    }

    pub(crate) fn record_dropped(&mut self) {
        self.dropped_commands = self.dropped_commands.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_saturate() {
        let mut diag = Diagnostics {
            frames_sent: u32::MAX,
            ..Default::default()
        };
        diag.record_frame();
        diag.record_write(usize::MAX);
        diag.record_write(1);
        assert_eq!(diag.frames_sent, u32::MAX);
        assert_eq!(diag.bytes_sent, u32::MAX);
    }

    #[test]
    fn test_health() {
        let mut diag = Diagnostics::default();
        assert!(diag.is_healthy());
        diag.record_frame();
        assert!(diag.is_healthy());
        diag.record_write_failure();
        assert!(!diag.is_healthy());
    }
}
