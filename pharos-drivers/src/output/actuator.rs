//! Patterned GPIO actuator
//!
//! Drives one binary output (status LED, printer reset line) in one of
//! three modes: constant level, blink pattern, or a one-shot pulse.

use pharos_core::status::LedPattern;
use pharos_core::time::Timer;
use pharos_hal::OutputPin;

/// Behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Mode {
    /// Holds whatever level was last commanded
    Constant,
    /// Repeating on/off cycle; phase zero is the start of the on window
    Blink { on_ms: u32, off_ms: u32 },
    /// Active until `remaining_ms` elapses, then constant off
    Pulse { remaining_ms: u32 },
}

/// Binary output actuator with timed patterns
///
/// Bound to one physical line for the process lifetime. Commands
/// supersede each other; there is no cancellation beyond issuing the next
/// command. `update` must be called periodically (tens of milliseconds)
/// for Blink and Pulse modes to progress.
pub struct GpioActuator<P> {
    pin: P,
    /// Active level is electrically low
    inverted: bool,
    mode: Mode,
    timer: Timer,
}

impl<P: OutputPin> GpioActuator<P> {
    /// Create an actuator; the line is driven inactive immediately
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut dev = Self {
            pin,
            inverted,
            mode: Mode::Constant,
            timer: Timer::new(),
        };
        dev.drive(false);
        dev
    }

    /// Active level is high (positive-logic loads)
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Active level is low (LEDs to VCC, open-drain resets)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    fn drive(&mut self, active: bool) {
        self.pin.set_state(active != self.inverted);
    }

    /// Constant active; cancels any blink or pulse in progress
    pub fn on(&mut self) {
        self.mode = Mode::Constant;
        self.drive(true);
    }

    /// Constant inactive; cancels any blink or pulse in progress
    pub fn off(&mut self) {
        self.mode = Mode::Constant;
        self.drive(false);
    }

    /// Whether the line is currently driven to its active level
    pub fn is_active(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }

    /// Symmetric blink: on for `cycle_ms / 2`, off for the remainder
    pub fn blink_cycle(&mut self, cycle_ms: u32, now_ms: u32) {
        let on_ms = cycle_ms / 2;
        self.blink(on_ms, cycle_ms - on_ms, now_ms);
    }

    /// Start a blink pattern
    ///
    /// Re-issuing the pattern already running is a no-op: the phase is
    /// preserved, so callers may apply their desired pattern every tick
    /// without visible glitches. A changed pattern restarts at phase zero
    /// with the line active.
    ///
    /// Both durations are expected to be non-zero; a zero-length cycle is
    /// a caller error and makes `update` divide by zero.
    pub fn blink(&mut self, on_ms: u32, off_ms: u32, now_ms: u32) {
        if self.mode == (Mode::Blink { on_ms, off_ms }) {
            return;
        }

        self.mode = Mode::Blink { on_ms, off_ms };
        self.timer.restart(now_ms);
        self.drive(true);
    }

    /// Drive active for `duration_ms`, then go constant inactive
    ///
    /// Re-triggering while a pulse is running extends it: the new duration
    /// is added to the remaining on-time, it does not restart it.
    pub fn pulse(&mut self, duration_ms: u32, now_ms: u32) {
        if let Mode::Pulse { remaining_ms } = &mut self.mode {
            *remaining_ms = remaining_ms.saturating_add(duration_ms);
            return;
        }

        self.mode = Mode::Pulse {
            remaining_ms: duration_ms,
        };
        self.timer.restart(now_ms);
        self.drive(true);
    }

    /// Advance the pattern; no-op in constant mode
    pub fn update(&mut self, now_ms: u32) {
        match self.mode {
            Mode::Constant => {}
            Mode::Blink { on_ms, off_ms } => {
                let dt = self.timer.elapsed_ms(now_ms);
                let cycle = on_ms + off_ms;
                let phase = dt % cycle;
                self.drive(phase < on_ms);

                // Drop the whole cycles so elapsed time stays bounded
                // while the phase within the current cycle is untouched.
                self.timer.rebase(dt - phase);
            }
            Mode::Pulse { remaining_ms } => {
                if self.timer.elapsed_ms(now_ms) >= remaining_ms {
                    self.off();
                }
            }
        }
    }

    /// Apply a status LED pattern
    ///
    /// Safe to call every tick: `On`/`Off` just re-drive the constant
    /// level, and `Blink` is idempotent for an unchanged cycle.
    pub fn apply(&mut self, pattern: LedPattern, now_ms: u32) {
        match pattern {
            LedPattern::Off => self.off(),
            LedPattern::On => self.on(),
            LedPattern::Blink { cycle_ms } => self.blink_cycle(cycle_ms, now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
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
    fn constant_mode_with_polarity() {
        let mut led = GpioActuator::new_active_low(MockPin::new());
        // Inactive at construction means the line rests high.
        assert!(!led.is_active());
        assert!(led.pin.is_set_high());

        led.on();
        assert!(led.is_active());
        assert!(!led.pin.is_set_high());

        led.off();
        assert!(!led.is_active());
    }

    #[test]
    fn blink_300_700_boundaries() {
        let mut led = GpioActuator::new_active_high(MockPin::new());
        led.blink(300, 700, 0);
        // Phase zero starts the on window immediately.
        assert!(led.is_active());

        for (now, active) in [
            (0, true),
            (299, true),
            (300, false),
            (999, false),
            (1000, true),
            (1300, false),
        ] {
            led.update(now);
            assert_eq!(led.is_active(), active, "at t={now}");
        }
    }

    #[test]
    fn blink_reissue_preserves_phase() {
        let mut led = GpioActuator::new_active_high(MockPin::new());
        led.blink(300, 700, 0);

        // Same pattern again mid-cycle must not reset phase zero to t=250.
        led.blink(300, 700, 250);

        led.update(350);
        assert!(!led.is_active(), "phase was reset by an identical blink()");
    }

    #[test]
    fn blink_with_new_durations_restarts_phase() {
        let mut led = GpioActuator::new_active_high(MockPin::new());
        led.blink(300, 700, 0);

        led.blink(100, 100, 450);
        assert!(led.is_active());

        led.update(500); // phase 50, on window
        assert!(led.is_active());
        led.update(560); // phase 110, off window
        assert!(!led.is_active());
    }

    #[test]
    fn blink_phase_survives_sparse_updates() {
        let mut led = GpioActuator::new_active_high(MockPin::new());
        led.blink(300, 700, 0);

        // Many whole cycles between polls; rebase keeps phase exact.
        led.update(10_000_000);
        assert!(led.is_active());
        led.update(10_000_300);
        assert!(!led.is_active());
        led.update(10_001_000);
        assert!(led.is_active());
    }

    #[test]
    fn pulse_retrigger_accumulates() {
        let mut led = GpioActuator::new_active_high(MockPin::new());
        led.pulse(1000, 0);
        assert!(led.is_active());

        led.update(400);
        assert!(led.is_active());

        // Extends to 1500 ms total from the first trigger.
        led.pulse(500, 400);
        led.update(1499);
        assert!(led.is_active());
        led.update(1500);
        assert!(!led.is_active());

        // A pulse after completion starts fresh.
        led.pulse(200, 2000);
        assert!(led.is_active());
        led.update(2200);
        assert!(!led.is_active());
    }

    #[test]
    fn commands_supersede_patterns() {
        let mut led = GpioActuator::new_active_high(MockPin::new());
        led.blink(300, 700, 0);
        led.on();

        // Deep in what would have been the off window.
        led.update(500);
        assert!(led.is_active());

        led.pulse(100, 600);
        led.off();
        led.update(1000);
        assert!(!led.is_active());
    }

    #[test]
    fn apply_maps_patterns() {
        let mut led = GpioActuator::new_active_high(MockPin::new());

        led.apply(LedPattern::On, 0);
        assert!(led.is_active());

        led.apply(LedPattern::Blink { cycle_ms: 500 }, 0);
        led.update(250); // phase 250, on half is [0, 250)
        assert!(!led.is_active());

        // Re-applying each tick does not glitch the phase.
        led.apply(LedPattern::Blink { cycle_ms: 500 }, 300);
        led.update(400);
        assert!(!led.is_active());

        led.apply(LedPattern::Off, 500);
        assert!(!led.is_active());
    }
}
