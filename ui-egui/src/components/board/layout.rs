// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board geometry: layout derivation and pixel/vertex conversion.
//!
//! All quantities are whole pixels. The point distance is fixed first and the
//! line length derived from it, so every grid line sits on an exact multiple
//! of the point distance from the top-left point and conversions round-trip.

use crate::ui_config::BoardStyle;
use littlego_core::Vertex;

/// Pixel coordinate; y grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `size` centered on `center`
    pub fn centered_square(center: PixelPoint, size: i32) -> Self {
        Self::new(center.x - size / 2, center.y - size / 2, size, size)
    }
}

/// Derived measurements for drawing a board into a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Rectangle the layout was derived from
    pub view_bounds: PixelRect,
    pub board_size: u8,
    pub is_portrait: bool,
    /// Side of the board square
    pub board_pixel_size: i32,
    pub outer_margin: i32,
    pub inner_margin: i32,
    pub top_left_corner: PixelPoint,
    /// Distance between adjacent grid lines
    pub point_distance: i32,
    /// Extent of the drawn grid, `point_distance * (board_size - 1)`
    pub line_length: i32,
    /// Pixel position of the top-left intersection
    pub top_left_point: PixelPoint,
}

fn percent_of(value: i32, percentage: f32) -> i32 {
    (value as f32 * percentage / 100.0).floor() as i32
}

/// Derive the layout for `view` from scratch.
///
/// `board_size` must be at least 2.
pub fn compute_layout(view: PixelRect, board_size: u8, style: &BoardStyle) -> BoardLayout {
    debug_assert!(board_size >= 2, "board size {} too small to lay out", board_size);

    let width = view.width.max(0);
    let height = view.height.max(0);
    let available = width.min(height);

    let outer_margin = percent_of(available, style.outer_margin_percentage);
    let board_pixel_size = available - 2 * outer_margin;
    let inner_margin = percent_of(board_pixel_size, style.inner_margin_percentage);

    let top_left_corner = PixelPoint::new(
        view.x + (width - board_pixel_size) / 2,
        view.y + (height - board_pixel_size) / 2,
    );

    let cells = i32::from(board_size.max(2)) - 1;
    let point_distance = (board_pixel_size - 2 * inner_margin) / cells;
    let line_length = point_distance * cells;

    let slack = (board_pixel_size - line_length) / 2;
    let top_left_point = PixelPoint::new(top_left_corner.x + slack, top_left_corner.y + slack);

    BoardLayout {
        view_bounds: view,
        board_size,
        is_portrait: height >= width,
        board_pixel_size,
        outer_margin,
        inner_margin,
        top_left_corner,
        point_distance,
        line_length,
        top_left_point,
    }
}

impl BoardLayout {
    /// The board square
    pub fn board_rect(&self) -> PixelRect {
        PixelRect::new(
            self.top_left_corner.x,
            self.top_left_corner.y,
            self.board_pixel_size,
            self.board_pixel_size,
        )
    }

    /// Pixel position of a grid line index (0 = leftmost / topmost)
    pub fn line_offset(&self, index: u8) -> i32 {
        i32::from(index) * self.point_distance
    }

    /// Pixel position of `vertex`. Vertices off the board are extrapolated.
    pub fn pixel_from_vertex(&self, vertex: Vertex) -> PixelPoint {
        let column = i32::from(vertex.x) - 1;
        let row = i32::from(self.board_size) - i32::from(vertex.y);
        PixelPoint::new(
            self.top_left_point.x + column * self.point_distance,
            self.top_left_point.y + row * self.point_distance,
        )
    }

    /// Vertex nearest to `pixel`, or `None` if it lies more than half a cell
    /// beyond the outermost lines on either axis
    pub fn vertex_at(&self, pixel: PixelPoint) -> Option<Vertex> {
        let column = self.snap(pixel.x, self.top_left_point.x)?;
        let row = self.snap(pixel.y, self.top_left_point.y)?;
        Some(Vertex::new(column + 1, self.board_size - row))
    }

    /// Vertex under the cross-hair for a pointer at `pixel`.
    ///
    /// The pointer is moved up by `finger_offset_cells` point distances so the
    /// cross-hair stays visible above a finger. Positions within half a cell
    /// beyond an edge clamp to that edge.
    pub fn cross_hair_at(&self, pixel: PixelPoint, finger_offset_cells: u32) -> Option<Vertex> {
        let offset = i32::try_from(finger_offset_cells)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.point_distance);
        self.vertex_at(PixelPoint::new(pixel.x, pixel.y.saturating_sub(offset)))
    }

    /// Grid line index for one axis
    fn snap(&self, coordinate: i32, origin: i32) -> Option<u8> {
        if self.point_distance <= 0 {
            return None;
        }

        let half = self.point_distance / 2;
        let offset = coordinate - origin;
        if offset < -half || offset > self.line_length + half {
            return None;
        }

        let offset = offset.clamp(0, self.line_length);
        let index = (offset + half) / self.point_distance;
        Some(index.min(i32::from(self.board_size) - 1) as u8)
    }
}

/// Memo guard around [`compute_layout`], keyed on the view rectangle
#[derive(Debug, Default)]
pub struct LayoutCache {
    layout: Option<BoardLayout>,
    recomputations: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute unless the cached layout was derived from an identical rect.
    /// Returns true if the layout was recomputed.
    pub fn recompute(&mut self, view: PixelRect, board_size: u8, style: &BoardStyle) -> bool {
        let before = self.recomputations;
        self.get_or_compute(view, board_size, style);
        self.recomputations != before
    }

    /// The layout for `view`, derived again only if the rect changed
    pub fn get_or_compute(&mut self, view: PixelRect, board_size: u8, style: &BoardStyle) -> BoardLayout {
        if let Some(layout) = self.layout.filter(|layout| layout.view_bounds == view) {
            return layout;
        }

        let layout = compute_layout(view, board_size, style);
        tracing::debug!(
            "Board layout for {:?}: {}px board, {}px point distance",
            view,
            layout.board_pixel_size,
            layout.point_distance
        );
        self.layout = Some(layout);
        self.recomputations += 1;
        layout
    }

    /// Forget the cached layout so the next call recomputes
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    /// How many times the layout has been derived
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
