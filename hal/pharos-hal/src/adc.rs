//! Analog sampling abstraction

/// One channel of the chip's ADC
///
/// A single call takes a single sample; no filtering or averaging happens
/// at this level. Callers that want smoothing average multiple calls.
pub trait AdcReader {
    /// Full-scale value of [`AdcReader::read`], exclusive
    ///
    /// A 10-bit converter reports 1024. The rail monitor scales raw
    /// samples against this.
    const FULL_SCALE: u16;

    /// Take one raw sample
    fn read(&mut self) -> u16;
}
