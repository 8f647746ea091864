//! Link/rail status to display-summary and LED-pattern mapping
//!
//! The network stack itself is outside this workspace; each scheduler tick
//! the orchestration glue hands in a [`LinkState`] snapshot. This module
//! turns that snapshot (plus the rail monitor's classification) into the
//! things the board shows: a summary line, a status icon, and LED
//! patterns. All of it is pure so the whole mapping tests on the host.

use heapless::String;

/// Maximum summary text length, matching the display line capacity
pub const SUMMARY_LEN: usize = 47;

/// Heartbeat LED blink cycle
pub const HEARTBEAT_BLINK_MS: u32 = 1500;

/// Length of the power-on indicator pulse on the fault and link LEDs
pub const STARTUP_PULSE_MS: u32 = 1000;

/// Snapshot of the network link, fed in by external orchestration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState<'a> {
    /// Radio disabled
    Off,
    /// Access point up, clients may join
    AccessPoint {
        /// SSID the board announces
        ssid: &'a str,
    },
    /// Station mode, association in progress
    Connecting,
    /// Station mode, associated and addressed
    Connected {
        /// Formatted address, e.g. "192.168.1.5"
        ip: &'a str,
    },
    /// Station mode, configured network not found
    NoSsidFound,
    /// Station mode, association failed
    ConnectFailed,
    /// Station mode, association dropped
    ConnectionLost,
}

/// Fieldless mirror of [`LinkState`] for change detection
///
/// The status controller keeps the previous tick's kind to decide whether
/// a transition is new enough to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkKind {
    Off,
    AccessPoint,
    Connecting,
    Connected,
    NoSsidFound,
    ConnectFailed,
    ConnectionLost,
}

impl LinkState<'_> {
    /// The fieldless kind of this state
    pub fn kind(&self) -> LinkKind {
        match self {
            LinkState::Off => LinkKind::Off,
            LinkState::AccessPoint { .. } => LinkKind::AccessPoint,
            LinkState::Connecting => LinkKind::Connecting,
            LinkState::Connected { .. } => LinkKind::Connected,
            LinkState::NoSsidFound => LinkKind::NoSsidFound,
            LinkState::ConnectFailed => LinkKind::ConnectFailed,
            LinkState::ConnectionLost => LinkKind::ConnectionLost,
        }
    }
}

/// Icon tag shown next to the summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusIcon {
    /// No icon drawn
    #[default]
    None,
    /// Radio off
    Off,
    /// Access-point mode
    AccessPoint,
    /// Station mode
    Station,
}

/// Rail monitor classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailStatus {
    /// Within the alarm window, or alarm disabled
    #[default]
    Ok,
    /// Below target by more than the threshold
    Undervoltage,
    /// Above target by more than the threshold
    Overvoltage,
}

/// Command for one status LED, applied each tick by the board
///
/// Pulse is not represented; the one-shot power-on pulse is issued
/// directly at init, not re-applied per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPattern {
    #[default]
    Off,
    On,
    Blink {
        cycle_ms: u32,
    },
}

/// Icon for a link snapshot
pub fn icon_for(link: &LinkState<'_>) -> StatusIcon {
    match link {
        LinkState::Off => StatusIcon::Off,
        LinkState::AccessPoint { .. } => StatusIcon::AccessPoint,
        LinkState::Connecting | LinkState::Connected { .. } => StatusIcon::Station,
        // Failure states keep the radio-off glyph
        LinkState::NoSsidFound | LinkState::ConnectFailed | LinkState::ConnectionLost => {
            StatusIcon::Off
        }
    }
}

/// Summary text for a link snapshot
///
/// Text longer than the summary capacity is truncated.
pub fn summary_for(link: &LinkState<'_>) -> String<SUMMARY_LEN> {
    let text = match link {
        LinkState::Off => "WiFi off",
        LinkState::AccessPoint { ssid } => ssid,
        LinkState::Connecting => "...",
        LinkState::Connected { ip } => ip,
        LinkState::NoSsidFound => "No SSID found",
        LinkState::ConnectFailed => "Connection failed",
        LinkState::ConnectionLost => "Connection lost",
    };

    let mut s = String::new();
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}

/// Whether a transition into this state deserves a log line
///
/// Becoming connected and the three failure states are logged once per
/// transition; transient states (connecting) are not.
pub fn logs_transition(link: &LinkState<'_>) -> bool {
    matches!(
        link,
        LinkState::Connected { .. }
            | LinkState::NoSsidFound
            | LinkState::ConnectFailed
            | LinkState::ConnectionLost
    )
}

/// Fault LED pattern: rail alarms beat link trouble
pub fn fault_led_pattern(link: &LinkState<'_>, rail: RailStatus) -> LedPattern {
    if rail != RailStatus::Ok {
        return LedPattern::Blink { cycle_ms: 250 };
    }

    match link {
        LinkState::NoSsidFound | LinkState::ConnectFailed | LinkState::ConnectionLost => {
            LedPattern::Blink { cycle_ms: 500 }
        }
        _ => LedPattern::Off,
    }
}

/// Link LED pattern: solid when associated, slow blink in AP mode
pub fn link_led_pattern(link: &LinkState<'_>) -> LedPattern {
    match link {
        LinkState::Connected { .. } => LedPattern::On,
        LinkState::AccessPoint { .. } => LedPattern::Blink { cycle_ms: 1500 },
        _ => LedPattern::Off,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_summary_is_the_address() {
        let link = LinkState::Connected { ip: "192.168.1.5" };
        assert_eq!(summary_for(&link).as_str(), "192.168.1.5");
        assert_eq!(icon_for(&link), StatusIcon::Station);
        assert!(logs_transition(&link));
    }

    #[test]
    fn ap_summary_is_the_ssid() {
        let link = LinkState::AccessPoint { ssid: "pharos-setup" };
        assert_eq!(summary_for(&link).as_str(), "pharos-setup");
        assert_eq!(icon_for(&link), StatusIcon::AccessPoint);
        assert!(!logs_transition(&link));
    }

    #[test]
    fn failure_states_keep_off_icon_and_log() {
        for link in [
            LinkState::NoSsidFound,
            LinkState::ConnectFailed,
            LinkState::ConnectionLost,
        ] {
            assert_eq!(icon_for(&link), StatusIcon::Off);
            assert!(logs_transition(&link));
        }
    }

    #[test]
    fn overlong_summary_truncates() {
        // 60 chars, over the 47-char summary capacity
        let long = "longer-than-any-summary-line-can-ever-hold-0123456789012345";
        let link = LinkState::AccessPoint { ssid: long };
        assert_eq!(summary_for(&link).len(), SUMMARY_LEN);
    }

    #[test]
    fn rail_fault_beats_link_fault_on_fault_led() {
        let link = LinkState::ConnectionLost;
        assert_eq!(
            fault_led_pattern(&link, RailStatus::Overvoltage),
            LedPattern::Blink { cycle_ms: 250 }
        );
        assert_eq!(
            fault_led_pattern(&link, RailStatus::Ok),
            LedPattern::Blink { cycle_ms: 500 }
        );
        assert_eq!(
            fault_led_pattern(&LinkState::Connecting, RailStatus::Ok),
            LedPattern::Off
        );
    }

    #[test]
    fn link_led_follows_association() {
        assert_eq!(
            link_led_pattern(&LinkState::Connected { ip: "10.0.0.2" }),
            LedPattern::On
        );
        assert_eq!(
            link_led_pattern(&LinkState::AccessPoint { ssid: "ap" }),
            LedPattern::Blink { cycle_ms: 1500 }
        );
        assert_eq!(link_led_pattern(&LinkState::Off), LedPattern::Off);
    }
}
