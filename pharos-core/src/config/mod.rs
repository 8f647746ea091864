//! Composition-root configuration types
//!
//! A board variant is described by one [`BoardConfig`] value assembled at
//! startup and handed to the composition root, replacing per-variant
//! compile-time device tables. `Option` fields mean "not fitted on this
//! variant"; call sites skip absent peripherals, they do not error.
//!
//! Persistent storage and retrieval of these values is external; this
//! crate only defines the shapes and their defaults.

/// Voltage rail monitor settings
///
/// The divider ratio is not here: it is a property of the fitted resistors
/// and goes to the monitor's constructor, like the ADC channel itself.
/// These three are the soft, persistable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RailConfig {
    /// Nominal rail voltage in millivolts
    pub target_mv: i32,
    /// Calibration offset from nominal, parts per million
    pub correction_ppm: i32,
    /// Alarm window as a percentage of target; 0 disables the alarm
    pub alarm_percent: u8,
}

impl RailConfig {
    /// 12 V rail, alarm at ±10 %
    pub const fn psu_12v() -> Self {
        Self {
            target_mv: 12_000,
            correction_ppm: 0,
            alarm_percent: 10,
        }
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self::psu_12v()
    }
}

/// Hold-button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldButtonConfig {
    /// Sustained-press duration before the button fires
    pub hold_ms: u32,
}

impl Default for HoldButtonConfig {
    fn default() -> Self {
        // Long enough that nobody wipes their settings by leaning on the case
        Self { hold_ms: 10_000 }
    }
}

/// Display auto-dimming configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DimmingConfig {
    /// Idle time after the last redraw before dimming starts
    pub delay_ms: u32,
    /// Milliseconds per one-unit brightness decrease
    pub step_ms: u32,
    /// Brightness floor; dimming never goes darker
    pub floor: u8,
}

impl Default for DimmingConfig {
    fn default() -> Self {
        Self {
            delay_ms: 20_000,
            step_ms: 20,
            floor: 16,
        }
    }
}

/// Everything configurable about one board variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Rail monitor settings; `None` when the variant has no monitor tap
    pub rail: Option<RailConfig>,
    /// Settings-reset button; `None` when not fitted
    pub reset_button: Option<HoldButtonConfig>,
    /// Display dimming parameters (harmless when no display is fitted)
    pub dimming: DimmingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rail_is_12v_with_10_percent_alarm() {
        let cfg = RailConfig::default();
        assert_eq!(cfg.target_mv, 12_000);
        assert_eq!(cfg.alarm_percent, 10);
        assert_eq!(cfg.correction_ppm, 0);
    }

    #[test]
    fn default_board_has_no_optional_peripherals() {
        let cfg = BoardConfig::default();
        assert!(cfg.rail.is_none());
        assert!(cfg.reset_button.is_none());
    }
}
