//! Voltage rail monitor
//!
//! Converts a raw ADC sample into a calibrated microvolt reading and
//! classifies it against a target ± tolerance window. Stateless per call:
//! one sample in, one classification out. Callers wanting smoothing
//! average multiple calls themselves.

use core::fmt::Write;

use heapless::String;
use pharos_core::config::RailConfig;
use pharos_core::status::RailStatus;
use pharos_hal::AdcReader;

/// Nominal calibration multiplier: no correction
const PPM_NOMINAL: i32 = 1_000_000;

/// Calibrated monitor for one supply rail
///
/// The divider ratio is fixed by the resistors on the board and set at
/// construction; target, calibration, and alarm window are soft settings
/// applied through [`RailMonitor::configure`] or the individual setters.
pub struct RailMonitor<A> {
    adc: A,
    divider_ratio: i32,
    target_uv: i32,
    calibration_ppm: i32,
    alarm_percent: u8,
    alarm_threshold_uv: i32,
}

impl<A: AdcReader> RailMonitor<A> {
    /// Create a monitor with nominal calibration and the alarm disabled
    pub fn new(adc: A, divider_ratio: i32) -> Self {
        Self {
            adc,
            divider_ratio,
            target_uv: 0,
            calibration_ppm: PPM_NOMINAL,
            alarm_percent: 0,
            alarm_threshold_uv: 0,
        }
    }

    /// Apply the soft settings in one go
    pub fn configure(&mut self, cfg: &RailConfig) {
        self.set_correction_ppm(cfg.correction_ppm);
        self.set_target_mv(cfg.target_mv);
        self.set_alarm_threshold_percent(cfg.alarm_percent);
    }

    /// Set the calibration correction as an offset from nominal
    ///
    /// `0` means the ADC is trusted as-is; `+10_000` scales readings up
    /// by 1 %.
    pub fn set_correction_ppm(&mut self, correction_ppm: i32) {
        self.calibration_ppm = PPM_NOMINAL + correction_ppm;
    }

    /// Set the nominal rail voltage; re-derives the alarm threshold
    pub fn set_target_mv(&mut self, target_mv: i32) {
        self.target_uv = target_mv.saturating_mul(1_000);
        self.set_alarm_threshold_percent(self.alarm_percent);
    }

    /// Set the alarm window as a percentage of target; 0 disables
    pub fn set_alarm_threshold_percent(&mut self, percent: u8) {
        self.alarm_percent = percent;
        self.alarm_threshold_uv =
            (i64::from(self.target_uv) * i64::from(percent) / 100) as i32;
    }

    /// Take one sample and return the rail voltage in microvolts
    ///
    /// Rounding happens at half scale before the divide so quantization
    /// bias stays below half an ADC step.
    pub fn read_uv(&mut self) -> i32 {
        let raw = i64::from(self.adc.read());
        let full_scale = i64::from(A::FULL_SCALE);
        let input_uv = (raw * i64::from(self.calibration_ppm) + full_scale / 2) / full_scale;
        (input_uv * i64::from(self.divider_ratio)) as i32
    }

    /// Take one sample and return the rail voltage in millivolts
    pub fn read_mv(&mut self) -> i32 {
        (self.read_uv() + 500) / 1_000
    }

    /// Classify an already-measured voltage against the alarm window
    ///
    /// The window is inclusive: a deviation of exactly the threshold is
    /// still Ok. Advisory only - nothing here halts the board.
    pub fn classify(&self, measured_uv: i32) -> RailStatus {
        if self.alarm_threshold_uv < 1 {
            return RailStatus::Ok;
        }

        let dv = measured_uv - self.target_uv;
        if dv > self.alarm_threshold_uv {
            RailStatus::Overvoltage
        } else if dv < -self.alarm_threshold_uv {
            RailStatus::Undervoltage
        } else {
            RailStatus::Ok
        }
    }

    /// Take one sample and classify it
    pub fn status(&mut self) -> RailStatus {
        let uv = self.read_uv();
        self.classify(uv)
    }

    /// Take one sample and format it as volts, e.g. "11.87V"
    pub fn format_voltage(&mut self) -> String<16> {
        let mv = self.read_mv();
        let mut s = String::new();
        let _ = write!(s, "{}.{:02}V", mv / 1_000, (mv % 1_000).unsigned_abs() / 10);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10-bit ADC returning a fixed raw value
    struct FixedAdc(u16);

    impl AdcReader for FixedAdc {
        const FULL_SCALE: u16 = 1024;

        fn read(&mut self) -> u16 {
            self.0
        }
    }

    fn monitor_12v(raw: u16) -> RailMonitor<FixedAdc> {
        let mut m = RailMonitor::new(FixedAdc(raw), 28);
        m.configure(&RailConfig::psu_12v());
        m
    }

    #[test]
    fn midscale_sample_converts_with_divider() {
        // 512/1024 of full scale at nominal ppm is 0.5 V at the pin,
        // 14 V at the rail behind the 28:1 divider.
        let mut m = RailMonitor::new(FixedAdc(512), 28);
        assert_eq!(m.read_uv(), 14_000_000);
        assert_eq!(m.read_mv(), 14_000);
    }

    #[test]
    fn correction_scales_readings() {
        let mut m = RailMonitor::new(FixedAdc(512), 28);
        m.set_correction_ppm(10_000); // +1 %
        assert_eq!(m.read_uv(), 14_140_000);
    }

    #[test]
    fn alarm_window_boundaries_are_inclusive() {
        // 12 V target, 10 % window: threshold 1.2 V.
        let m = monitor_12v(0);
        assert_eq!(m.classify(13_200_001), RailStatus::Overvoltage);
        assert_eq!(m.classify(13_200_000), RailStatus::Ok);
        assert_eq!(m.classify(10_800_000), RailStatus::Ok);
        assert_eq!(m.classify(10_799_999), RailStatus::Undervoltage);
    }

    #[test]
    fn zero_percent_disables_the_alarm() {
        let mut m = monitor_12v(0);
        m.set_alarm_threshold_percent(0);
        assert_eq!(m.classify(0), RailStatus::Ok);
        assert_eq!(m.classify(i32::MAX), RailStatus::Ok);
    }

    #[test]
    fn changing_target_rederives_the_threshold() {
        let mut m = monitor_12v(0);
        m.set_target_mv(24_000);
        // 10 % of 24 V now.
        assert_eq!(m.classify(26_400_000), RailStatus::Ok);
        assert_eq!(m.classify(26_400_001), RailStatus::Overvoltage);
    }

    #[test]
    fn end_to_end_overvoltage() {
        // 562/1024 at nominal ppm -> ~0.549 V pin, ~15.4 V rail: well
        // outside the 10 % window around 12 V.
        let mut m = monitor_12v(562);
        assert_eq!(m.status(), RailStatus::Overvoltage);
    }

    #[test]
    fn formats_volts_with_two_decimals() {
        let mut m = RailMonitor::new(FixedAdc(512), 28);
        assert_eq!(m.format_voltage().as_str(), "14.00V");
    }
}
