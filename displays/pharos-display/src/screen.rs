//! Differential status screen
//!
//! One summary line plus a fixed-depth scrolling log. Incoming text is
//! diff-copied into fixed line buffers; the expensive full-frame commit
//! only happens when a copy actually changed a byte. Brightness dims
//! independently of content after an idle delay.

use pharos_core::config::DimmingConfig;
use pharos_core::status::StatusIcon;
use pharos_core::time::Timer;

use crate::backend::{DisplayBackend, DisplayError};
use crate::icons::{icon_xbm, ICON_SIZE};

/// Depth of the scrolling log
pub const LOG_LINES: usize = 5;

/// Line buffer capacity, including the NUL terminator
pub const LINE_CAP: usize = 48;

/// Brightness right after a redraw
pub const BRIGHTNESS_MAX: u8 = 255;

/// Frame width in pixels
const FRAME_WIDTH: u16 = 128;

/// Summary text x position when an icon is drawn
const SUMMARY_INDENT: i16 = 15;

/// y of the summary/log separator line
const SEPARATOR_Y: i16 = 13;

/// y of the first log line and the per-line step
const LOG_Y0: i16 = 12;
const LOG_LINE_STEP: i16 = 10;

/// Diff-copy `src` into a line buffer, unescaping doubled `%`
///
/// A `%%` pair collapses to one literal `%` as it is stored; the doubling
/// protects text that passes through printer status channels, where a
/// bare `%` can be taken for a formatting directive. Copying stops at the
/// buffer capacity; the buffer always ends up NUL-terminated within it.
///
/// Returns whether any stored byte changed.
fn diff_copy(src: &str, dst: &mut [u8; LINE_CAP]) -> bool {
    let src = src.as_bytes();
    let mut changed = false;
    let mut at = 0;
    let mut escape_armed = false;

    for slot in dst.iter_mut().take(LINE_CAP - 1) {
        let mut byte = src.get(at).copied().unwrap_or(0);
        if escape_armed && byte == b'%' {
            // Second half of a %% pair: drop it.
            at += 1;
            byte = src.get(at).copied().unwrap_or(0);
        }
        escape_armed = byte == b'%';

        if *slot != byte {
            *slot = byte;
            changed = true;
        }

        if byte == 0 {
            break;
        }
        at += 1;
    }

    changed
}

/// The stored text of a line buffer, up to its terminator
fn line_str(buf: &[u8; LINE_CAP]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(LINE_CAP - 1);
    core::str::from_utf8(&buf[..end]).unwrap_or("")
}

/// Board status screen over any [`DisplayBackend`]
///
/// Created once at startup and never torn down. The log is a ring: the
/// head index marks the newest line and rotates *backward* on
/// [`StatusScreen::new_line`], so rendering from the head walks newest to
/// oldest without moving any text.
pub struct StatusScreen<B> {
    backend: B,
    icon: StatusIcon,
    summary: [u8; LINE_CAP],
    log: [[u8; LINE_CAP]; LOG_LINES],
    /// Ring head, always in [0, LOG_LINES)
    head: usize,
    brightness: u8,
    dimming: DimmingConfig,
    dim_timer: Timer,
}

impl<B: DisplayBackend> StatusScreen<B> {
    /// Create a screen; call [`StatusScreen::init`] before first use
    ///
    /// `dimming.step_ms` must be non-zero.
    pub fn new(backend: B, dimming: DimmingConfig) -> Self {
        Self {
            backend,
            icon: StatusIcon::None,
            summary: [0; LINE_CAP],
            log: [[0; LINE_CAP]; LOG_LINES],
            head: 0,
            brightness: BRIGHTNESS_MAX,
            dimming,
            dim_timer: Timer::new(),
        }
    }

    /// Bring the panel up at full brightness
    pub fn init(&mut self, now_ms: u32) -> Result<(), DisplayError> {
        self.backend.init()?;
        self.brightness = BRIGHTNESS_MAX;
        self.backend.set_contrast(BRIGHTNESS_MAX)?;
        self.dim_timer.restart(now_ms);
        Ok(())
    }

    /// Update the summary line and its icon; redraws only on change
    pub fn print_summary(
        &mut self,
        icon: StatusIcon,
        text: &str,
        now_ms: u32,
    ) -> Result<(), DisplayError> {
        let mut changed = self.icon != icon;
        self.icon = icon;

        changed |= diff_copy(text, &mut self.summary);
        if changed {
            self.refresh(now_ms)?;
        }
        Ok(())
    }

    /// Write into the newest log line; redraws only on change
    pub fn print(&mut self, text: &str, now_ms: u32) -> Result<(), DisplayError> {
        if diff_copy(text, &mut self.log[self.head]) {
            self.refresh(now_ms)?;
        }
        Ok(())
    }

    /// Open a new top log line for the next [`StatusScreen::print`]
    ///
    /// Rotates the ring head backward; the oldest line becomes the one
    /// that will be overwritten. Touches no hardware by itself.
    pub fn new_line(&mut self) {
        self.head = if self.head == 0 {
            LOG_LINES - 1
        } else {
            self.head - 1
        };
    }

    /// Redraw the whole frame and commit it
    ///
    /// Also snaps brightness back to maximum and re-arms the dim timer;
    /// any visible change means someone is probably looking.
    pub fn refresh(&mut self, now_ms: u32) -> Result<(), DisplayError> {
        self.backend.clear()?;

        // Summary area
        let mut text_x = 0;
        if let Some(xbm) = icon_xbm(self.icon) {
            self.backend.draw_xbm(0, 0, ICON_SIZE, ICON_SIZE, xbm)?;
            text_x = SUMMARY_INDENT;
        }
        self.backend.draw_text(text_x, 0, line_str(&self.summary))?;
        self.backend.draw_hline(0, SEPARATOR_Y, FRAME_WIDTH)?;

        // Log section, newest first from the ring head
        let mut y = LOG_Y0;
        for i in 0..LOG_LINES {
            let idx = (self.head + i) % LOG_LINES;
            self.backend.draw_text(0, y, line_str(&self.log[idx]))?;
            y += LOG_LINE_STEP;
        }

        self.backend.flush()?;

        self.brightness = BRIGHTNESS_MAX;
        self.backend.set_contrast(BRIGHTNESS_MAX)?;
        self.dim_timer.restart(now_ms);
        Ok(())
    }

    /// Poll entry: dim the panel after idle
    ///
    /// Once the idle delay has passed, brightness falls linearly by one
    /// unit per `step_ms` until it reaches the configured floor. Content
    /// changes are irrelevant here; a redraw resets the ramp.
    pub fn update(&mut self, now_ms: u32) -> Result<(), DisplayError> {
        if self.brightness <= self.dimming.floor {
            return Ok(());
        }

        let dt = self.dim_timer.elapsed_ms(now_ms);
        if dt < self.dimming.delay_ms {
            return Ok(());
        }

        let steps = (dt - self.dimming.delay_ms) / self.dimming.step_ms;
        let dimmed = u32::from(BRIGHTNESS_MAX).saturating_sub(steps) as u8;
        let target = dimmed.max(self.dimming.floor);

        if target < self.brightness {
            self.brightness = target;
            self.backend.set_contrast(target)?;
        }
        Ok(())
    }

    /// Current brightness, `[floor, BRIGHTNESS_MAX]`
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// The underlying backend (simulators, tests)
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored summary text (unescaped)
    pub fn summary_text(&self) -> &str {
        line_str(&self.summary)
    }

    /// Stored log line text, `n` lines down from the newest
    pub fn log_line(&self, n: usize) -> &str {
        line_str(&self.log[(self.head + n) % LOG_LINES])
    }
}
