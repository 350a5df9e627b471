// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board rendering logic

use super::interaction::CrossHair;
use super::layout::{BoardLayout, PixelPoint, PixelRect};
use crate::ui_config::BoardStyle;
use egui::Color32;
use littlego_core::{Color, GameState, Vertex};

/// Handicap points marked on the board. This is the 19x19 set and it is
/// drawn unchanged on every board size.
pub const STAR_POINTS: [(u8, u8); 9] = [
    (4, 4),
    (10, 4),
    (16, 4),
    (4, 10),
    (10, 10),
    (16, 10),
    (4, 16),
    (10, 16),
    (16, 16),
];

/// Drawing layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Board,
    Grid,
    StarPoints,
    Stones,
    Influence,
    Symbols,
    CoordinateLabels,
}

impl Layer {
    /// Paint order
    pub const ALL: [Layer; 8] = [
        Layer::Background,
        Layer::Board,
        Layer::Grid,
        Layer::StarPoints,
        Layer::Stones,
        Layer::Influence,
        Layer::Symbols,
        Layer::CoordinateLabels,
    ];
}

/// Target the board is painted onto
pub trait DrawingContext {
    /// Called before the first primitive of each layer
    fn begin_layer(&mut self, _layer: Layer) {}

    fn fill_rect(&mut self, rect: PixelRect, color: Color32);

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, width: u32, color: Color32);

    fn fill_circle(&mut self, center: PixelPoint, radius: u32, color: Color32);

    /// Draw `text` centered on `anchor`
    fn draw_text(&mut self, anchor: PixelPoint, text: &str, font_size: f32, color: Color32);
}

/// Paints one frame of the board for a fixed layout and style
pub struct BoardRenderer<'a> {
    layout: &'a BoardLayout,
    style: &'a BoardStyle,
}

impl<'a> BoardRenderer<'a> {
    pub fn new(layout: &'a BoardLayout, style: &'a BoardStyle) -> Self {
        Self { layout, style }
    }

    /// Render every layer in paint order
    pub fn render(&self, ctx: &mut dyn DrawingContext, game: &GameState, cross_hair: Option<&CrossHair>) {
        for layer in Layer::ALL {
            ctx.begin_layer(layer);
            match layer {
                Layer::Background => self.render_background(ctx),
                Layer::Board => self.render_board(ctx),
                Layer::Grid => self.render_grid(ctx, cross_hair),
                Layer::StarPoints => self.render_star_points(ctx),
                Layer::Stones => self.render_stones(ctx, game, cross_hair),
                Layer::Influence => self.render_influence(ctx, game),
                Layer::Symbols => self.render_symbols(ctx, game),
                Layer::CoordinateLabels => self.render_coordinate_labels(ctx),
            }
        }
    }

    fn render_background(&self, ctx: &mut dyn DrawingContext) {
        ctx.fill_rect(self.layout.view_bounds, self.style.background_color);
    }

    fn render_board(&self, ctx: &mut dyn DrawingContext) {
        ctx.fill_rect(self.layout.board_rect(), self.style.board_color);
    }

    /// Render grid lines, boundary lines thicker, cross-hair lines highlighted
    fn render_grid(&self, ctx: &mut dyn DrawingContext, cross_hair: Option<&CrossHair>) {
        let layout = self.layout;
        let size = layout.board_size;
        let origin = layout.top_left_point;
        let cross_hair_center = cross_hair.map(|c| layout.pixel_from_vertex(c.vertex));

        for index in 0..size {
            let width = if index == 0 || index == size - 1 {
                self.style.bounding_line_width
            } else {
                self.style.normal_line_width
            };
            let offset = layout.line_offset(index);

            // Vertical
            let x = origin.x + offset;
            let color = self.line_color(cross_hair_center.map(|p| p.x) == Some(x));
            ctx.stroke_line(
                PixelPoint::new(x, origin.y),
                PixelPoint::new(x, origin.y + layout.line_length),
                width,
                color,
            );

            // Horizontal
            let y = origin.y + offset;
            let color = self.line_color(cross_hair_center.map(|p| p.y) == Some(y));
            ctx.stroke_line(
                PixelPoint::new(origin.x, y),
                PixelPoint::new(origin.x + layout.line_length, y),
                width,
                color,
            );
        }
    }

    fn line_color(&self, on_cross_hair: bool) -> Color32 {
        if on_cross_hair {
            self.style.cross_hair_color
        } else {
            self.style.line_color
        }
    }

    fn render_star_points(&self, ctx: &mut dyn DrawingContext) {
        for (x, y) in STAR_POINTS {
            let center = self.layout.pixel_from_vertex(Vertex::new(x, y));
            ctx.fill_circle(center, self.style.star_point_radius, self.style.star_point_color);
        }
    }

    /// Stone radius for the current point distance
    pub fn stone_radius(&self) -> u32 {
        let half = self.layout.point_distance as f32 / 2.0;
        (half * self.style.stone_radius_percentage).floor().max(0.0) as u32
    }

    fn stone_color(&self, color: Color) -> Color32 {
        match color {
            Color::Black => self.style.black_stone_color,
            Color::White => self.style.white_stone_color,
        }
    }

    /// Render placed stones, then the cross-hair preview stone if any
    fn render_stones(&self, ctx: &mut dyn DrawingContext, game: &GameState, cross_hair: Option<&CrossHair>) {
        let radius = self.stone_radius();
        let cross_hair_vertex = cross_hair.map(|c| c.vertex);

        for (vertex, color) in game.board.stones() {
            let fill = if cross_hair_vertex == Some(vertex) {
                self.style.cross_hair_color
            } else {
                self.stone_color(color)
            };
            ctx.fill_circle(self.layout.pixel_from_vertex(vertex), radius, fill);
        }

        let Some(vertex) = cross_hair_vertex else {
            return;
        };
        if game.is_game_over() || !vertex.is_valid(game.board_size) || game.stone_at(vertex).is_some() {
            return;
        }
        ctx.fill_circle(
            self.layout.pixel_from_vertex(vertex),
            radius,
            self.stone_color(game.next_player()),
        );
    }

    /// One square per empty intersection in the color of the player with more
    /// influence there. Its side grows with the degree of influence, up to
    /// half the point distance.
    fn render_influence(&self, ctx: &mut dyn DrawingContext, game: &GameState) {
        if !self.style.display_influence {
            return;
        }

        let influence = game.influence();
        let max_side = self.layout.point_distance / 2;
        for y in 1..=game.board_size {
            for x in 1..=game.board_size {
                let vertex = Vertex::new(x, y);
                let Some((color, degree)) = influence.dominant(vertex) else {
                    continue;
                };
                let side = (max_side as f32 * degree).round() as i32;
                if side <= 0 {
                    continue;
                }
                ctx.fill_rect(
                    PixelRect::centered_square(self.layout.pixel_from_vertex(vertex), side),
                    self.stone_color(color),
                );
            }
        }
    }

    /// Last-move marker, a small square in the opposite stone color
    fn render_symbols(&self, ctx: &mut dyn DrawingContext, game: &GameState) {
        if !self.style.mark_last_move {
            return;
        }
        let Some(vertex) = game.last_placed_vertex() else {
            return;
        };
        let Some(color) = game.stone_at(vertex) else {
            return;
        };

        let side = (self.stone_radius() as i32 * 2 / 3).max(1);
        let center = self.layout.pixel_from_vertex(vertex);
        ctx.fill_rect(
            PixelRect::centered_square(center, side),
            self.stone_color(color.opposite()),
        );
    }

    /// Column letters above the grid, row numbers to its left
    fn render_coordinate_labels(&self, ctx: &mut dyn DrawingContext) {
        if !self.style.display_coordinates {
            return;
        }

        let layout = self.layout;
        let origin = layout.top_left_point;
        let gap = (layout.top_left_point.y - layout.top_left_corner.y).max(0) / 2;
        let font_size = self.style.coordinate_font_size;

        for index in 0..layout.board_size {
            let offset = layout.line_offset(index);

            if let Some(letter) = Vertex::new(index + 1, 1).column_letter() {
                ctx.draw_text(
                    PixelPoint::new(origin.x + offset, origin.y - gap),
                    &letter.to_string(),
                    font_size,
                    self.style.line_color,
                );
            }

            let row = layout.board_size - index;
            ctx.draw_text(
                PixelPoint::new(origin.x - gap, origin.y + offset),
                &row.to_string(),
                font_size,
                self.style.line_color,
            );
        }
    }
}
