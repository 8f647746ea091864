//! GPIO pin abstractions
//!
//! Traits for the digital lines the board logic drives (LEDs, printer
//! reset, port switch) and reads (hold button). Chip HALs implement these
//! over their register interface; host tests implement them over plain
//! bools.

/// Digital output line
///
/// Polarity handling (active-low LEDs and the like) is *not* done here;
/// drivers layer it on top so a mock pin in tests always reflects the
/// electrical level.
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Last level the line was driven to
    ///
    /// Used for `is_active()`-style readback; implementations may read the
    /// output latch rather than the pad.
    fn is_set_high(&self) -> bool;

    /// Inverse of [`OutputPin::is_set_high`]
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input line
pub trait InputPin {
    /// Instantaneous electrical level (logic 1)
    fn is_high(&self) -> bool;

    /// Instantaneous electrical level (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
