// SPDX-License-Identifier: MIT OR Apache-2.0

//! Status line below the board

use crate::components::board::CrossHair;
use egui::Ui;
use littlego_core::Computation;

/// Appended to the vertex when the cross-hair is on an illegal intersection
pub const ILLEGAL_MOVE_TEXT: &str = "You can't play there";
pub const THINKING_TEXT: &str = "Computer is thinking...";
pub const SCORING_TEXT: &str = "Calculating score...";

/// Text for the status line.
///
/// An active cross-hair wins over a running computation. An illegal
/// cross-hair names the reason when it is known.
pub fn status_text(cross_hair: Option<&CrossHair>, computation: Option<Computation>) -> String {
    match (cross_hair, computation) {
        (Some(cross_hair), _) if cross_hair.is_legal_move => cross_hair.vertex.to_string(),
        (Some(CrossHair { vertex, illegal_reason: Some(reason), .. }), _) => {
            format!("{} - {}: {}", vertex, ILLEGAL_MOVE_TEXT, reason)
        }
        (Some(cross_hair), _) => format!("{} - {}", cross_hair.vertex, ILLEGAL_MOVE_TEXT),
        (None, Some(Computation::Thinking)) => THINKING_TEXT.to_string(),
        (None, Some(Computation::Scoring)) => SCORING_TEXT.to_string(),
        (None, None) => String::new(),
    }
}

/// Game status display component
pub struct GameStatus;

impl GameStatus {
    /// Render the status line with an activity spinner while busy
    pub fn render(ui: &mut Ui, text: &str, busy: bool) {
        ui.horizontal(|ui| {
            if busy {
                ui.spinner();
            }
            ui.label(text);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use littlego_core::{MoveIsIllegalReason, Vertex};

    fn cross_hair(vertex: Vertex, illegal_reason: Option<MoveIsIllegalReason>, is_legal_move: bool) -> CrossHair {
        CrossHair { vertex, is_legal_move, illegal_reason }
    }

    #[test]
    fn empty_by_default() {
        assert_eq!(status_text(None, None), "");
    }

    #[test]
    fn cross_hair_shows_vertex() {
        let legal = cross_hair(Vertex::new(4, 4), None, true);
        assert_eq!(status_text(Some(&legal), None), "D4");

        let illegal = cross_hair(Vertex::new(4, 4), None, false);
        assert_eq!(status_text(Some(&illegal), None), "D4 - You can't play there");
    }

    #[test]
    fn illegal_reason_is_spelled_out() {
        let occupied = cross_hair(Vertex::new(3, 17), Some(MoveIsIllegalReason::Occupied), false);
        assert_eq!(
            status_text(Some(&occupied), None),
            "C17 - You can't play there: Intersection is occupied"
        );

        let over = cross_hair(Vertex::new(1, 1), Some(MoveIsIllegalReason::GameOver), false);
        assert_eq!(
            status_text(Some(&over), Some(Computation::Scoring)),
            "A1 - You can't play there: The game has ended"
        );
    }

    #[test]
    fn computation_shown_without_cross_hair() {
        assert_eq!(status_text(None, Some(Computation::Thinking)), THINKING_TEXT);
        assert_eq!(status_text(None, Some(Computation::Scoring)), SCORING_TEXT);

        let legal = cross_hair(Vertex::new(1, 1), None, true);
        assert_eq!(status_text(Some(&legal), Some(Computation::Thinking)), "A1");
    }
}
