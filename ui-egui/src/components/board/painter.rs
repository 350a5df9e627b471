// SPDX-License-Identifier: MIT OR Apache-2.0

//! egui backend for [`DrawingContext`]

use super::layout::{PixelPoint, PixelRect};
use super::renderer::DrawingContext;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// Whole-pixel rectangle covering the integer part of `rect`
pub fn pixel_rect(rect: Rect) -> PixelRect {
    PixelRect::new(
        rect.min.x.floor() as i32,
        rect.min.y.floor() as i32,
        rect.width().floor() as i32,
        rect.height().floor() as i32,
    )
}

fn pos(point: PixelPoint) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Paints onto an egui [`Painter`]
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl DrawingContext for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        let min = pos(PixelPoint::new(rect.x, rect.y));
        let size = Vec2::new(rect.width as f32, rect.height as f32);
        self.painter.rect_filled(Rect::from_min_size(min, size), 0.0, color);
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, width: u32, color: Color32) {
        self.painter
            .line_segment([pos(from), pos(to)], Stroke::new(width as f32, color));
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: u32, color: Color32) {
        self.painter.circle_filled(pos(center), radius as f32, color);
    }

    fn draw_text(&mut self, anchor: PixelPoint, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            pos(anchor),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}
