// SPDX-License-Identifier: MIT OR Apache-2.0

//! Headless [`DrawingContext`] that records what would have been painted

use super::layout::{PixelPoint, PixelRect};
use super::renderer::{DrawingContext, Layer};
use egui::Color32;

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: PixelRect,
        color: Color32,
    },
    Line {
        from: PixelPoint,
        to: PixelPoint,
        width: u32,
        color: Color32,
    },
    Circle {
        center: PixelPoint,
        radius: u32,
        color: Color32,
    },
    Text {
        anchor: PixelPoint,
        text: String,
        color: Color32,
    },
}

/// A command and the layer it was painted in
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub layer: Option<Layer>,
    pub command: DrawCommand,
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    current_layer: Option<Layer>,
    layers: Vec<Layer>,
    commands: Vec<Recorded>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything painted so far, in paint order
    pub fn commands(&self) -> &[Recorded] {
        &self.commands
    }

    /// Commands painted within `layer`
    pub fn in_layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(move |r| r.layer == Some(layer))
            .map(|r| &r.command)
    }

    /// Layers in the order they were begun
    pub fn layer_order(&self) -> &[Layer] {
        &self.layers
    }

    pub fn clear(&mut self) {
        self.current_layer = None;
        self.layers.clear();
        self.commands.clear();
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(Recorded {
            layer: self.current_layer,
            command,
        });
    }
}

impl DrawingContext for RecordingCanvas {
    fn begin_layer(&mut self, layer: Layer) {
        self.current_layer = Some(layer);
        self.layers.push(layer);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, width: u32, color: Color32) {
        self.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: u32, color: Color32) {
        self.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_text(&mut self, anchor: PixelPoint, text: &str, _font_size: f32, color: Color32) {
        self.push(DrawCommand::Text {
            anchor,
            text: text.to_string(),
            color,
        });
    }
}
