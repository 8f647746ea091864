//! Debounced hold button
//!
//! Models a mechanical button that must be held for a configured duration
//! before it acts - long enough that contact bounce and brushed transients
//! never fire it.
//!
//! The debounce works off an [`EdgeTimestamp`] the platform's edge ISR
//! writes on *every* electrical transition: any bounce or early release
//! moves the timestamp forward, so only an uninterrupted hold ever
//! accumulates the full duration.

use pharos_core::config::HoldButtonConfig;
use pharos_core::time::EdgeTimestamp;
use pharos_hal::InputPin;

/// Hold-to-trigger button over an ISR-shared edge timestamp
///
/// The timestamp cell is shared with the interrupt handler, so it usually
/// lives in a `static` next to the ISR; the button only borrows it. The
/// callback runs in poll context during `update`, never in the ISR.
pub struct HoldButton<'a, P, F> {
    pin: P,
    /// Pressed level is electrically low
    inverted: bool,
    hold_ms: u32,
    edge: &'a EdgeTimestamp,
    on_hold: F,
}

impl<'a, P: InputPin, F: FnMut()> HoldButton<'a, P, F> {
    /// Create the button
    ///
    /// Seeds the edge timestamp with `now_ms`, the same effect as the edge
    /// handler firing once at attach time - a press that predates boot
    /// must still be held for the full duration from here.
    pub fn new(
        pin: P,
        edge: &'a EdgeTimestamp,
        cfg: HoldButtonConfig,
        on_hold: F,
        inverted: bool,
        now_ms: u32,
    ) -> Self {
        edge.record(now_ms);
        Self {
            pin,
            inverted,
            hold_ms: cfg.hold_ms,
            edge,
            on_hold,
        }
    }

    /// Button wired to ground (pressed = low), the common case
    pub fn new_active_low(
        pin: P,
        edge: &'a EdgeTimestamp,
        cfg: HoldButtonConfig,
        on_hold: F,
        now_ms: u32,
    ) -> Self {
        Self::new(pin, edge, cfg, on_hold, true, now_ms)
    }

    /// Instantaneous electrical state, independent of timing
    ///
    /// For cancel-window checks: "is the user still holding after the
    /// confirmation delay".
    pub fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.inverted
    }

    /// Poll entry; fires the callback once per completed hold period
    ///
    /// While the button stays pressed the callback repeats every
    /// `hold_ms`, because a successful trigger re-records the timestamp.
    /// A release before the threshold re-arms silently (the release edge
    /// already moved the timestamp).
    pub fn update(&mut self, now_ms: u32) {
        let pressed = self.is_pressed();

        // Single guarded read; must not interleave with an ISR write.
        let held_ms = self.edge.elapsed_ms(now_ms);

        if pressed && held_ms >= self.hold_ms {
            (self.on_hold)();
            self.edge.record(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    const CFG: HoldButtonConfig = HoldButtonConfig { hold_ms: 10_000 };

    /// Input pin backed by a shared level the test flips
    struct LevelPin<'a>(&'a Cell<bool>);

    impl InputPin for LevelPin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn continuous_hold_fires_at_threshold_intervals() {
        let level = Cell::new(true); // active-low: high = released
        let edge = EdgeTimestamp::new();
        let fired = Cell::new(0u32);
        let mut btn = HoldButton::new_active_low(
            LevelPin(&level),
            &edge,
            CFG,
            || fired.set(fired.get() + 1),
            0,
        );

        // Press at t=0 and hold for 25 s, polling every 100 ms.
        level.set(false);
        edge.record(0); // press edge, as the ISR would
        let mut t = 0;
        while t <= 25_000 {
            btn.update(t);
            match t {
                9_900 => assert_eq!(fired.get(), 0),
                10_000 => assert_eq!(fired.get(), 1),
                19_900 => assert_eq!(fired.get(), 1),
                20_000 => assert_eq!(fired.get(), 2),
                _ => {}
            }
            t += 100;
        }
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn release_before_threshold_cancels() {
        let level = Cell::new(true);
        let edge = EdgeTimestamp::new();
        let fired = Cell::new(0u32);
        let mut btn = HoldButton::new_active_low(
            LevelPin(&level),
            &edge,
            CFG,
            || fired.set(fired.get() + 1),
            0,
        );

        level.set(false);
        edge.record(0);
        btn.update(9_900);

        // Released just short of the threshold.
        level.set(true);
        edge.record(9_950);
        btn.update(10_000);
        btn.update(30_000);
        assert_eq!(fired.get(), 0);

        // Second press must accumulate the full duration again.
        level.set(false);
        edge.record(31_000);
        btn.update(40_900);
        assert_eq!(fired.get(), 0);
        btn.update(41_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn bounce_restarts_the_clock() {
        let level = Cell::new(true);
        let edge = EdgeTimestamp::new();
        let fired = Cell::new(0u32);
        let mut btn = HoldButton::new_active_low(
            LevelPin(&level),
            &edge,
            CFG,
            || fired.set(fired.get() + 1),
            0,
        );

        level.set(false);
        edge.record(0);
        // Contact bounce at 8 s: two edges in quick succession.
        edge.record(8_000);
        edge.record(8_004);

        btn.update(10_000);
        assert_eq!(fired.get(), 0, "bounce must defer the trigger");
        btn.update(18_004);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn is_pressed_tracks_the_electrical_level() {
        let level = Cell::new(true);
        let edge = EdgeTimestamp::new();
        let btn = HoldButton::new_active_low(LevelPin(&level), &edge, CFG, || {}, 0);

        assert!(!btn.is_pressed());
        level.set(false);
        assert!(btn.is_pressed());
    }
}
