// SPDX-License-Identifier: MIT OR Apache-2.0

//! Play view configuration.
//!
//! [`BoardConfig`] is the serializable form kept by the settings store: colors
//! as hex strings, margins as percentages, widths and radii in whole pixels.
//! [`BoardStyle`] is the parsed form injected into layout and drawing calls.

use egui::Color32;
use littlego_core::color_constants::{board_hex, parse_hex_rgb, ColorParseError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`BoardConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Setting `{key}`: {source}")]
    Color {
        key: &'static str,
        #[source]
        source: ColorParseError,
    },

    #[error("Setting `{key}` out of range: {value}")]
    OutOfRange { key: &'static str, value: f32 },
}

/// Board appearance as stored by the settings store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Fill behind the board square
    pub background_color: String,
    /// Board square fill
    pub board_color: String,
    /// Grid line color
    pub line_color: String,
    pub star_point_color: String,
    /// Highlight for the cross-hair lines and stone
    pub cross_hair_color: String,
    pub black_stone_color: String,
    pub white_stone_color: String,
    /// Outer margin as a percentage of the smaller view dimension
    pub board_outer_margin_percentage: f32,
    /// Inner margin as a percentage of the board square
    pub board_inner_margin_percentage: f32,
    /// Width of the two outermost lines on each axis
    pub bounding_line_width: u32,
    /// Width of all other lines
    pub normal_line_width: u32,
    pub star_point_radius: u32,
    /// Stone radius as a fraction of half the point distance
    pub stone_radius_percentage: f32,
    /// How many cells above the finger the cross-hair appears on touch input
    pub cross_hair_point_distance_from_finger: u32,
    /// Mark the most recently placed stone
    pub mark_last_move: bool,
    /// Draw column letters and row numbers
    pub display_coordinates: bool,
    pub coordinate_font_size: f32,
    /// Shade empty intersections by the player with more influence
    pub display_influence: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background_color: board_hex::BACKGROUND.to_string(),
            board_color: board_hex::BOARD.to_string(),
            line_color: board_hex::LINE.to_string(),
            star_point_color: board_hex::STAR_POINT.to_string(),
            cross_hair_color: board_hex::CROSS_HAIR.to_string(),
            black_stone_color: board_hex::BLACK_STONE.to_string(),
            white_stone_color: board_hex::WHITE_STONE.to_string(),
            board_outer_margin_percentage: 1.0,
            board_inner_margin_percentage: 4.0,
            bounding_line_width: 2,
            normal_line_width: 1,
            star_point_radius: 3,
            stone_radius_percentage: 0.9,
            cross_hair_point_distance_from_finger: 2,
            mark_last_move: false,
            display_coordinates: false,
            coordinate_font_size: 10.0,
            display_influence: false,
        }
    }
}

impl BoardConfig {
    /// Load config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Parse colors and check ranges
    pub fn to_style(&self) -> Result<BoardStyle, ConfigError> {
        BoardStyle::try_from(self)
    }
}

/// Parsed board appearance, ready for layout and drawing
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStyle {
    pub background_color: Color32,
    pub board_color: Color32,
    pub line_color: Color32,
    pub star_point_color: Color32,
    pub cross_hair_color: Color32,
    pub black_stone_color: Color32,
    pub white_stone_color: Color32,
    pub outer_margin_percentage: f32,
    pub inner_margin_percentage: f32,
    pub bounding_line_width: u32,
    pub normal_line_width: u32,
    pub star_point_radius: u32,
    pub stone_radius_percentage: f32,
    pub cross_hair_point_distance_from_finger: u32,
    pub mark_last_move: bool,
    pub display_coordinates: bool,
    pub coordinate_font_size: f32,
    pub display_influence: bool,
}

impl Default for BoardStyle {
    fn default() -> Self {
        // The default config only holds well-formed constants.
        BoardStyle::try_from(&BoardConfig::default()).unwrap_or_else(|e| unreachable!("{e}"))
    }
}

fn color(key: &'static str, hex: &str) -> Result<Color32, ConfigError> {
    let [r, g, b] = parse_hex_rgb(hex).map_err(|source| ConfigError::Color { key, source })?;
    Ok(Color32::from_rgb(r, g, b))
}

fn margin(key: &'static str, value: f32) -> Result<f32, ConfigError> {
    // Two margins of 50% or more leave no room for the board.
    if (0.0..50.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { key, value })
    }
}

impl TryFrom<&BoardConfig> for BoardStyle {
    type Error = ConfigError;

    fn try_from(config: &BoardConfig) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&config.stone_radius_percentage) {
            return Err(ConfigError::OutOfRange {
                key: "stone_radius_percentage",
                value: config.stone_radius_percentage,
            });
        }

        Ok(Self {
            background_color: color("background_color", &config.background_color)?,
            board_color: color("board_color", &config.board_color)?,
            line_color: color("line_color", &config.line_color)?,
            star_point_color: color("star_point_color", &config.star_point_color)?,
            cross_hair_color: color("cross_hair_color", &config.cross_hair_color)?,
            black_stone_color: color("black_stone_color", &config.black_stone_color)?,
            white_stone_color: color("white_stone_color", &config.white_stone_color)?,
            outer_margin_percentage: margin(
                "board_outer_margin_percentage",
                config.board_outer_margin_percentage,
            )?,
            inner_margin_percentage: margin(
                "board_inner_margin_percentage",
                config.board_inner_margin_percentage,
            )?,
            bounding_line_width: config.bounding_line_width,
            normal_line_width: config.normal_line_width,
            star_point_radius: config.star_point_radius,
            stone_radius_percentage: config.stone_radius_percentage,
            cross_hair_point_distance_from_finger: config.cross_hair_point_distance_from_finger,
            mark_last_move: config.mark_last_move,
            display_coordinates: config.display_coordinates,
            coordinate_font_size: config.coordinate_font_size,
            display_influence: config.display_influence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let style = BoardStyle::default();
        assert_eq!(style.line_color, Color32::BLACK);
        assert_eq!(style.board_color, Color32::from_rgb(0xDC, 0xB3, 0x5C));
        assert_eq!(style.bounding_line_width, 2);
        assert!(!style.mark_last_move);
    }

    #[test]
    fn malformed_color_names_the_setting() {
        let config = BoardConfig {
            cross_hair_color: "blue".to_string(),
            ..BoardConfig::default()
        };

        match config.to_style() {
            Err(ConfigError::Color { key, .. }) => assert_eq!(key, "cross_hair_color"),
            other => panic!("expected color error, got {:?}", other),
        }
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let config = BoardConfig {
            board_outer_margin_percentage: 60.0,
            ..BoardConfig::default()
        };
        assert!(matches!(config.to_style(), Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn unknown_keys_fail_to_load() {
        let result: Result<BoardConfig, _> = serde_json::from_str(r##"{ "grid_colour": "#000000" }"##);
        assert!(result.is_err());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{ "mark_last_move": true }"#).unwrap();
        assert!(config.mark_last_move);
        assert_eq!(config.line_color, board_hex::LINE);
    }
}
