//! Plain switch output
//!
//! Used for lines that are only ever on or off (the printer-port switch);
//! no timing behavior, so no timer and no `update`.

use pharos_hal::OutputPin;

/// On/off output with polarity handling
pub struct SimpleOutput<P> {
    pin: P,
    inverted: bool,
}

impl<P: OutputPin> SimpleOutput<P> {
    /// Create the output; the line is driven inactive immediately
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut dev = Self { pin, inverted };
        dev.off();
        dev
    }

    /// Active level is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Active level is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Drive the line active
    pub fn on(&mut self) {
        let high = !self.inverted;
        self.pin.set_state(high);
    }

    /// Drive the line inactive
    pub fn off(&mut self) {
        let high = self.inverted;
        self.pin.set_state(high);
    }

    /// Whether the line is currently driven to its active level
    pub fn is_active(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn polarity() {
        let mut sw = SimpleOutput::new_active_low(MockPin { high: false });
        assert!(!sw.is_active());
        assert!(sw.pin.is_set_high());

        sw.on();
        assert!(sw.is_active());
        assert!(!sw.pin.is_set_high());
    }
}
