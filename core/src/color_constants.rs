// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default board palette and hex color parsing

use thiserror::Error;

/// Default play view palette as hex strings, the form the settings store keeps them in
pub mod board_hex {
    pub const BACKGROUND: &str = "#FFFFFF";
    pub const BOARD: &str = "#DCB35C"; // kaya wood
    pub const LINE: &str = "#000000";
    pub const STAR_POINT: &str = "#000000";
    pub const CROSS_HAIR: &str = "#0000FF";
    pub const BLACK_STONE: &str = "#000000";
    pub const WHITE_STONE: &str = "#FFFFFF";
}

/// Error returned for a malformed hex color
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid hex color: {0:?}")]
    Format(String),

    #[error("Invalid {component} component in {input:?}")]
    Component { component: &'static str, input: String },
}

/// Parse `#RRGGBB` (the leading `#` is optional) into 8-bit RGB
pub fn parse_hex_rgb(hex: &str) -> Result<[u8; 3], ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorParseError::Format(hex.to_string()));
    }

    let component = |range: std::ops::Range<usize>, component: &'static str| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError::Component {
            component,
            input: hex.to_string(),
        })
    };

    Ok([
        component(0..2, "red")?,
        component(2..4, "green")?,
        component(4..6, "blue")?,
    ])
}

/// Format 8-bit RGB as `#RRGGBB`
pub fn rgb_to_hex(color: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}
