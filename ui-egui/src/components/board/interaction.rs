// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board interaction handling

use super::layout::PixelPoint;
use super::BoardView;
use egui::Response;
use littlego_core::{GameState, MoveIsIllegalReason, Vertex};

/// Candidate intersection highlighted while the player drags over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossHair {
    pub vertex: Vertex,
    pub is_legal_move: bool,
    /// Set for illegal moves when the cause is known
    pub illegal_reason: Option<MoveIsIllegalReason>,
}

impl CrossHair {
    /// Cross-hair on `vertex` with legality taken from `game`
    pub fn for_game(vertex: Vertex, game: &GameState) -> Self {
        let illegal_reason = game.move_is_illegal_reason(vertex);
        Self {
            vertex,
            is_legal_move: illegal_reason.is_none(),
            illegal_reason,
        }
    }
}

/// Turns pointer input on the board into cross-hair updates and move requests
#[derive(Debug, Default)]
pub struct BoardInteraction {
    /// Last vertex the cross-hair was moved to during the current gesture
    tracked: Option<CrossHair>,
}

impl BoardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's pointer state into the view.
    ///
    /// Returns the vertex to play when a gesture ends on a legal intersection.
    /// The view's layout must be current for the response's rectangle.
    pub fn handle(
        &mut self,
        response: &Response,
        view: &mut BoardView,
        game: &GameState,
        finger_offset_cells: u32,
    ) -> Option<Vertex> {
        // Touch input gets the finger offset, mouse input points exactly.
        let touching = response.ctx.input(|i| i.any_touches());
        let offset = if touching { finger_offset_cells } else { 0 };

        if let Some(pos) = response.interact_pointer_pos().or_else(|| response.hover_pos()) {
            let pixel = PixelPoint::new(pos.x.floor() as i32, pos.y.floor() as i32);
            self.tracked = view
                .cross_hair_at(pixel, offset)
                .map(|vertex| CrossHair::for_game(vertex, game));
            if let Some(cross_hair) = self.tracked {
                view.set_cross_hair(cross_hair);
            }
        }

        let released = response.drag_released() || response.clicked();
        let target = if released { self.tracked.take() } else { None };
        if !response.hovered() && !response.dragged() {
            self.tracked = None;
        }

        match target {
            Some(CrossHair { vertex, is_legal_move: true, .. }) => Some(vertex),
            Some(CrossHair { vertex, .. }) => {
                tracing::debug!("Ignoring release on illegal vertex {}", vertex);
                None
            }
            None => None,
        }
    }

    /// Cross-hair of the gesture in progress
    pub fn tracked(&self) -> Option<CrossHair> {
        self.tracked
    }
}
