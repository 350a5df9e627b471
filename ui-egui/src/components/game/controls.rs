// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game control buttons and interactions

use egui::Ui;

/// Action requested from the control bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Pass,
    Resign,
    NewGame,
}

/// Game control buttons
pub struct GameControls;

impl GameControls {
    /// Render game control buttons
    pub fn render(ui: &mut Ui, game_over: bool) -> Option<GameAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.add_enabled_ui(!game_over, |ui| {
                if ui.button("Pass").clicked() {
                    action = Some(GameAction::Pass);
                }
                if ui.button("Resign").clicked() {
                    action = Some(GameAction::Resign);
                }
            });

            ui.separator();

            if ui.button("New Game").clicked() {
                action = Some(GameAction::NewGame);
            }
        });

        action
    }
}
