//! Status icon bitmaps
//!
//! 12x12 XBM glyphs drawn next to the summary line. XBM rows are
//! LSB-first and padded to whole bytes, so each row is 2 bytes.

use pharos_core::status::StatusIcon;

/// Icon edge length in pixels
pub const ICON_SIZE: u16 = 12;

/// Radio off: an X
const OFF_12: [u8; 24] = [
    0x01, 0x08, //
    0x02, 0x04, //
    0x04, 0x02, //
    0x08, 0x01, //
    0x90, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x90, 0x00, //
    0x08, 0x01, //
    0x04, 0x02, //
    0x02, 0x04, //
    0x01, 0x08, //
];

/// Access point: a mast
const AP_12: [u8; 24] = [
    0xF0, 0x00, //
    0xF0, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
    0x60, 0x00, //
];

/// Station: ascending signal bars
const STA_12: [u8; 24] = [
    0x00, 0x00, //
    0x00, 0x06, //
    0x00, 0x06, //
    0x00, 0x06, //
    0x00, 0x06, //
    0x60, 0x06, //
    0x60, 0x06, //
    0x60, 0x06, //
    0x60, 0x06, //
    0x66, 0x06, //
    0x66, 0x06, //
    0x66, 0x06, //
];

/// Bitmap for an icon tag; `None` draws nothing
pub fn icon_xbm(icon: StatusIcon) -> Option<&'static [u8]> {
    match icon {
        StatusIcon::None => None,
        StatusIcon::Off => Some(&OFF_12),
        StatusIcon::AccessPoint => Some(&AP_12),
        StatusIcon::Station => Some(&STA_12),
    }
}
