// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game-related UI components

mod controls;
mod status;

pub use controls::{GameAction, GameControls};
pub use status::{status_text, GameStatus, ILLEGAL_MOVE_TEXT, SCORING_TEXT, THINKING_TEXT};
