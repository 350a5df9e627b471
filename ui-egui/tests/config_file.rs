// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board config file handling

use egui::Color32;
use littlego_ui_egui::{BoardConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.json");

    let config = BoardConfig {
        board_color: "#C0A060".to_string(),
        display_coordinates: true,
        board_inner_margin_percentage: 6.0,
        ..BoardConfig::default()
    };
    config.save_to_file(&path).unwrap();

    let loaded = BoardConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let style = loaded.to_style().unwrap();
    assert_eq!(style.board_color, Color32::from_rgb(0xC0, 0xA0, 0x60));
    assert!(style.display_coordinates);
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(&path, r#"{ "mark_last_move": true }"#).unwrap();

    let loaded = BoardConfig::load_from_file(&path).unwrap();
    assert!(loaded.mark_last_move);
    assert_eq!(
        BoardConfig {
            mark_last_move: false,
            ..loaded
        },
        BoardConfig::default()
    );
}

#[test]
fn malformed_files_are_rejected() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(BoardConfig::load_from_file(&path), Err(ConfigError::Json(_))));

    let path = dir.path().join("unknown.json");
    std::fs::write(&path, r#"{ "stone_shadow": true }"#).unwrap();
    assert!(matches!(BoardConfig::load_from_file(&path), Err(ConfigError::Json(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(BoardConfig::load_from_file(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn bad_values_fail_style_conversion() {
    let config = BoardConfig {
        line_color: "#12".to_string(),
        ..BoardConfig::default()
    };
    assert!(matches!(config.to_style(), Err(ConfigError::Color { .. })));

    let config = BoardConfig {
        board_outer_margin_percentage: 50.0,
        ..BoardConfig::default()
    };
    assert!(matches!(config.to_style(), Err(ConfigError::OutOfRange { .. })));
}
