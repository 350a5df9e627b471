// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Little Go play view: board layout, rendering and cross-hair tracking on egui

pub mod app;
pub mod components;
pub mod ui_config;

pub use app::PlayApp;
pub use components::board::{BoardLayout, BoardView, CrossHair, DrawingContext, PixelPoint, PixelRect};
pub use ui_config::{BoardConfig, BoardStyle, ConfigError};
