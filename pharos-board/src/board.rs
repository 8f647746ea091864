//! Board device table and status controller

use heapless::String;
use pharos_core::config::BoardConfig;
use pharos_core::status::{
    fault_led_pattern, icon_for, link_led_pattern, logs_transition, summary_for, LinkKind,
    LinkState, RailStatus, HEARTBEAT_BLINK_MS, STARTUP_PULSE_MS, SUMMARY_LEN,
};
use pharos_core::time::Timer;
use pharos_display::{DisplayBackend, StatusScreen};
use pharos_drivers::{GpioActuator, HoldButton, RailMonitor, SimpleOutput};
use pharos_hal::{AdcReader, InputPin, OutputPin};

/// Status-line prefix the printer firmware shows on its own display
const STATUS_PREFIX: &[u8] = b"M117 ";

/// Summary and LED recomputation period
const SUMMARY_PERIOD_MS: u32 = 100;

/// The board's device table
///
/// Every peripheral is optional; a variant without a display or rail tap
/// just leaves the field `None`. The printer port is the one collaborator
/// every variant has.
///
/// The status-line path through [`Board::print`] writes text to the
/// printer port byte-for-byte - a `%` stays a `%` there, while the screen
/// path unescapes `%%` pairs. The two channels deliberately differ: the
/// doubling convention exists *for* the printer channel, and the screen
/// is where it gets collapsed back for human eyes.
pub struct Board<'a, OUT, IN, ADC, DSP, PORT, F> {
    pub port_switch: Option<SimpleOutput<OUT>>,
    pub printer_reset: Option<GpioActuator<OUT>>,
    pub reset_button: Option<HoldButton<'a, IN, F>>,
    pub fault_led: Option<GpioActuator<OUT>>,
    pub heartbeat_led: Option<GpioActuator<OUT>>,
    pub link_led: Option<GpioActuator<OUT>>,
    pub rail: Option<RailMonitor<ADC>>,
    pub screen: Option<StatusScreen<DSP>>,
    pub printer_port: PORT,

    // Status controller memory
    last_link: Option<LinkKind>,
    last_rail: RailStatus,
    summary_throttle: Timer,
}

impl<'a, OUT, IN, ADC, DSP, PORT, F> Board<'a, OUT, IN, ADC, DSP, PORT, F>
where
    OUT: OutputPin,
    IN: InputPin,
    ADC: AdcReader,
    DSP: DisplayBackend,
    PORT: embedded_io::Write,
    F: FnMut(),
{
    /// Start an empty table; populate the peripheral fields directly
    pub fn new(printer_port: PORT) -> Self {
        Self {
            port_switch: None,
            printer_reset: None,
            reset_button: None,
            fault_led: None,
            heartbeat_led: None,
            link_led: None,
            rail: None,
            screen: None,
            printer_port,
            last_link: None,
            last_rail: RailStatus::Ok,
            summary_throttle: Timer::new(),
        }
    }

    /// One-time startup
    ///
    /// Applies the soft configuration, brings the screen up, and shows
    /// life on the LEDs: heartbeat blinking, fault and link LEDs pulsed
    /// once as a lamp test. A failed configuration load is reported on
    /// the status channels and otherwise ignored - defaults are fine to
    /// run with.
    pub fn init(&mut self, cfg: &BoardConfig, cfg_loaded_ok: bool, now_ms: u32) {
        if let Some(screen) = &mut self.screen {
            let _ = screen.init(now_ms);
        }

        if let Some(led) = &mut self.heartbeat_led {
            led.blink_cycle(HEARTBEAT_BLINK_MS, now_ms);
        }
        if let Some(led) = &mut self.fault_led {
            led.pulse(STARTUP_PULSE_MS, now_ms);
        }
        if let Some(led) = &mut self.link_led {
            led.pulse(STARTUP_PULSE_MS, now_ms);
        }

        if let Some(rail) = &mut self.rail {
            if let Some(rail_cfg) = &cfg.rail {
                rail.configure(rail_cfg);
            }
        }
        if self.rail.is_some() && !cfg_loaded_ok {
            self.print("Rail cfg. error", false, now_ms);
        }
    }

    /// Poll entry, called once per scheduler tick
    ///
    /// Devices are polled every tick; the summary and LED patterns are
    /// recomputed at most every 100 ms.
    pub fn update(&mut self, link: &LinkState<'_>, now_ms: u32) {
        if let Some(dev) = &mut self.printer_reset {
            dev.update(now_ms);
        }
        if let Some(btn) = &mut self.reset_button {
            btn.update(now_ms);
        }

        if self.summary_throttle.elapsed_ms(now_ms) > SUMMARY_PERIOD_MS {
            let rail_status = self.update_summary(link, now_ms);
            self.update_leds(link, rail_status, now_ms);
            self.summary_throttle.restart(now_ms);
        }

        if let Some(led) = &mut self.fault_led {
            led.update(now_ms);
        }
        if let Some(led) = &mut self.heartbeat_led {
            led.update(now_ms);
        }
        if let Some(led) = &mut self.link_led {
            led.update(now_ms);
        }
        if let Some(screen) = &mut self.screen {
            let _ = screen.update(now_ms);
        }
    }

    /// Log a status line on a fresh screen line and the printer port
    ///
    /// `log_only` suppresses the printer-port half for chatter the
    /// printer operator does not need.
    pub fn print(&mut self, text: &str, log_only: bool, now_ms: u32) {
        if let Some(screen) = &mut self.screen {
            screen.new_line();
        }
        self.print_over(text, log_only, now_ms);
    }

    /// Like [`Board::print`], but overwrites the current screen line
    ///
    /// Used for progress-style updates that should not scroll the log.
    pub fn print_over(&mut self, text: &str, log_only: bool, now_ms: u32) {
        if !log_only {
            // Byte-for-byte; no unescaping on this channel.
            let _ = self.printer_port.write_all(STATUS_PREFIX);
            let _ = self.printer_port.write_all(text.as_bytes());
            let _ = self.printer_port.write_all(b"\r\n");
        }

        if let Some(screen) = &mut self.screen {
            let _ = screen.print(text, now_ms);
        }
    }

    /// Recompute the summary line; returns the rail classification
    fn update_summary(&mut self, link: &LinkState<'_>, now_ms: u32) -> RailStatus {
        let icon = icon_for(link);
        let mut summary = summary_for(link);

        // Log link transitions once.
        let kind = link.kind();
        if logs_transition(link) && self.last_link != Some(kind) {
            let line = summary.clone();
            self.print(line.as_str(), false, now_ms);
        }

        // A rail alarm takes over the summary line.
        let rail_status = match &mut self.rail {
            Some(rail) => rail.status(),
            None => RailStatus::Ok,
        };
        if rail_status != RailStatus::Ok {
            summary = String::new();
            let _ = summary.push_str(match rail_status {
                RailStatus::Undervoltage => "Undervoltage ",
                _ => "Overvoltage ",
            });
            if let Some(rail) = &mut self.rail {
                let _ = summary.push_str(rail.format_voltage().as_str());
            }
            if rail_status != self.last_rail {
                let line: String<SUMMARY_LEN> = summary.clone();
                self.print(line.as_str(), false, now_ms);
            }
        }

        if let Some(screen) = &mut self.screen {
            let _ = screen.print_summary(icon, summary.as_str(), now_ms);
        }

        self.last_link = Some(kind);
        self.last_rail = rail_status;
        rail_status
    }

    /// Re-apply the LED patterns for the current status
    ///
    /// Runs unconditionally every period; blink idempotence in the
    /// actuator keeps an unchanged pattern's phase intact.
    fn update_leds(&mut self, link: &LinkState<'_>, rail_status: RailStatus, now_ms: u32) {
        if let Some(led) = &mut self.fault_led {
            led.apply(fault_led_pattern(link, rail_status), now_ms);
        }
        if let Some(led) = &mut self.link_led {
            led.apply(link_led_pattern(link), now_ms);
        }
    }
}
