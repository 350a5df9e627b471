// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and UI logic.

use eframe::egui;
use littlego_core::{Event, EventBus, GameError, GameState, Move};

use crate::components::board::{pixel_rect, BoardInteraction, BoardView, DrawingContext, EguiCanvas, PixelRect};
use crate::components::game::{GameAction, GameControls, GameStatus};
use crate::ui_config::BoardStyle;

/// Desktop play screen: one board view over an in-memory game
pub struct PlayApp {
    game: GameState,
    bus: EventBus,
    view: BoardView,
    interaction: BoardInteraction,
    style: BoardStyle,
}

impl PlayApp {
    /// Create the app and start a game. Must be called on the UI thread,
    /// which becomes the owner of the event bus.
    pub fn new(board_size: u8, style: BoardStyle) -> Self {
        let bus = EventBus::new();
        let mut view = BoardView::new();
        view.attach(&bus);

        let mut app = Self {
            game: GameState::new(board_size),
            bus,
            view,
            interaction: BoardInteraction::new(),
            style,
        };
        app.new_game(board_size);
        app
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut BoardView {
        &mut self.view
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn style(&self) -> &BoardStyle {
        &self.style
    }

    /// Replace the style; the layout is derived again on the next frame
    pub fn set_style(&mut self, style: BoardStyle) {
        self.style = style;
        self.view.invalidate_layout();
    }

    /// Discard the current game and start an empty one
    pub fn new_game(&mut self, board_size: u8) {
        tracing::info!("Starting new {}x{} game", board_size, board_size);
        self.game = GameState::new(board_size);
        self.bus.publish(&Event::NewGame { board_size });
        self.view.process_events();
    }

    /// Play a move for the player to move and notify the view
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        self.game.apply_move(mv)?;
        self.bus.publish(&Event::GameStateChanged);
        self.bus.publish(&Event::LastMoveChanged);
        self.view.process_events();
        Ok(())
    }

    pub fn apply_action(&mut self, action: GameAction) {
        let result = match action {
            GameAction::Pass => self.play(Move::Pass),
            GameAction::Resign => self.play(Move::Resign),
            GameAction::NewGame => {
                self.new_game(self.game.board_size);
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::warn!("{:?} rejected: {}", action, e);
        }
    }

    /// Process pending events and paint one frame without a window
    pub fn tick_headless(&mut self, canvas: &mut dyn DrawingContext, view: PixelRect) {
        self.view.process_events();
        self.view.render(canvas, view, &self.game, &self.style);
    }

    /// Whether another frame is needed after one that displayed `shown_status`.
    ///
    /// The status panel is laid out before the board handles pointer input, so
    /// a status change made while painting the board is only visible in the
    /// next frame.
    pub fn needs_another_frame(&self, shown_status: &str) -> bool {
        self.view.needs_redraw() || self.view.status_text() != shown_status
    }

    /// Unsubscribe the view from the bus
    pub fn shutdown(&mut self) {
        self.view.detach(&self.bus);
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = pixel_rect(response.rect);

        // Pointer mapping needs the layout for this frame's rect.
        self.view.recompute_layout(rect, self.game.board_size, &self.style);

        let finger_offset = self.style.cross_hair_point_distance_from_finger;
        if let Some(vertex) = self.interaction.handle(&response, &mut self.view, &self.game, finger_offset) {
            if let Err(e) = self.play(Move::Place(vertex)) {
                tracing::warn!("Move at {} rejected: {}", vertex, e);
            }
        }

        self.view.render(&mut EguiCanvas::new(&painter), rect, &self.game, &self.style);
    }
}

impl Drop for PlayApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl eframe::App for PlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.process_events();

        let mut action = ctx.input(|i| {
            if i.key_pressed(egui::Key::P) {
                Some(GameAction::Pass)
            } else if i.key_pressed(egui::Key::N) {
                Some(GameAction::NewGame)
            } else {
                None
            }
        });

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            if let Some(clicked) = GameControls::render(ui, self.game.is_game_over()) {
                action = Some(clicked);
            }
        });
        if let Some(action) = action {
            self.apply_action(action);
        }

        let shown_status = self.view.status_text().to_string();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            GameStatus::render(ui, &shown_status, self.view.is_activity_indicator_visible());
        });

        egui::CentralPanel::default().show(ctx, |ui| self.show_board(ui));

        if self.needs_another_frame(&shown_status) {
            ctx.request_repaint();
        }
    }
}
