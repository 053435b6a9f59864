//! Hardware reset line
//!
//! The display's reset input is active-low, so the line idles high.
//!
//! After a pulse the display can take up to 4 seconds before it responds
//! to commands again, and it does not clear the screen. The driver does not
//! wait for it.

use embedded_hal::delay::DelayNs;
use serial_tft_hal::OutputPin;

/// Active-low reset line
pub struct ResetLine<P> {
    pin: P,
}

impl<P: OutputPin> ResetLine<P> {
    /// Take control of the pin and drive it to its inactive (high) level
    pub fn new(mut pin: P) -> Self {
        pin.set_high();
        Self { pin }
    }

    /// Pulse the line low for `pulse_us` microseconds, then release it
    pub fn pulse(&mut self, delay: &mut impl DelayNs, pulse_us: u32) {
        self.pin.set_low();
        delay.delay_us(pulse_us);
        self.pin.set_high();
    }

    /// Give the pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Mock GPIO pin recording every level written
    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: Vec<bool, 8>,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            let _ = self.writes.push(true);
        }

        fn set_low(&mut self) {
            self.high = false;
            let _ = self.writes.push(false);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_new_drives_high() {
        let pin = ResetLine::new(MockPin::default()).into_inner();
        assert!(pin.is_set_high());
        assert_eq!(pin.writes.as_slice(), &[true]);
    }

    #[test]
    fn test_pulse_is_low_then_high() {
        let mut line = ResetLine::new(MockPin::default());
        let mut delay = MockDelay::default();

        line.pulse(&mut delay, 1_000);

        assert!(delay.total_ns >= 1_000_000);
        let pin = line.into_inner();
        assert!(pin.is_set_high());
        assert_eq!(pin.writes.as_slice(), &[true, false, true]);
    }
}
