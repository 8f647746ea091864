//! Display backend trait
//!
//! Defines the interface for the display hardware driver.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Hardware-agnostic rendering interface
///
/// Implementations buffer drawing calls and push the whole frame to the
/// panel in [`DisplayBackend::flush`]; everything before that is cheap
/// memory writes. Coordinates are pixels, origin top-left.
pub trait DisplayBackend {
    /// Bring the panel up (power, orientation, charge pump)
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw a text run with the panel's built-in font
    fn draw_text(&mut self, x: i16, y: i16, text: &str) -> Result<(), DisplayError>;

    /// Draw an XBM bitmap (LSB-first rows, byte-padded)
    fn draw_xbm(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<(), DisplayError>;

    /// Draw a horizontal line
    fn draw_hline(&mut self, x: i16, y: i16, length: u16) -> Result<(), DisplayError>;

    /// Commit the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Set panel contrast/brightness, 0 darkest to 255 brightest
    fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError>;
}
