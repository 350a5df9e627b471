// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board view: layout, rendering and cross-hair tracking

mod interaction;
mod layout;
mod painter;
mod recorder;
mod renderer;

pub use interaction::{BoardInteraction, CrossHair};
pub use layout::{compute_layout, BoardLayout, LayoutCache, PixelPoint, PixelRect};
pub use painter::{pixel_rect, EguiCanvas};
pub use recorder::{DrawCommand, Recorded, RecordingCanvas};
pub use renderer::{BoardRenderer, DrawingContext, Layer, STAR_POINTS};

use crate::components::game::status_text;
use crate::ui_config::BoardStyle;
use crossbeam_channel::{unbounded, Receiver, Sender};
use littlego_core::{Computation, Event, EventBus, EventKind, GameState, SubscriptionId, Vertex};

/// Renders one board and tracks the cross-hair over it.
///
/// Events from an [`EventBus`] are queued by the subscriptions made in
/// [`BoardView::attach`] and applied by [`BoardView::process_events`], so the
/// view only changes while its owner holds it mutably.
pub struct BoardView {
    layout: LayoutCache,
    cross_hair: Option<CrossHair>,
    computation: Option<Computation>,
    status_text: String,
    needs_redraw: bool,
    event_tx: Sender<Event>,
    event_rx: Receiver<Event>,
    subscriptions: Vec<SubscriptionId>,
}

impl BoardView {
    pub fn new() -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            layout: LayoutCache::new(),
            cross_hair: None,
            computation: None,
            status_text: String::new(),
            needs_redraw: true,
            event_tx,
            event_rx,
            subscriptions: Vec::new(),
        }
    }

    /// Subscribe to every event kind on `bus`. Attaching twice is a no-op.
    pub fn attach(&mut self, bus: &EventBus) {
        if self.is_attached() {
            tracing::warn!("Board view already attached to an event bus");
            return;
        }

        for kind in EventKind::ALL {
            let tx = self.event_tx.clone();
            let id = bus.subscribe(kind, move |event| {
                let _ = tx.send(event.clone());
            });
            self.subscriptions.push(id);
        }
    }

    /// Remove every subscription made by [`BoardView::attach`]
    pub fn detach(&mut self, bus: &EventBus) {
        for id in self.subscriptions.drain(..) {
            bus.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Apply queued events. Returns true if a redraw is now pending.
    pub fn process_events(&mut self) -> bool {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                Event::NewGame { board_size } => {
                    tracing::debug!("New {}x{} game, dropping cached layout", board_size, board_size);
                    self.layout.invalidate();
                    self.cross_hair = None;
                    self.needs_redraw = true;
                }
                Event::GameStateChanged | Event::LastMoveChanged => {
                    self.needs_redraw = true;
                }
                Event::ComputationStarted(computation) => {
                    self.computation = Some(computation);
                    self.refresh_status();
                }
                Event::ComputationStopped(computation) => {
                    if self.computation == Some(computation) {
                        self.computation = None;
                    }
                    self.refresh_status();
                }
            }
        }
        self.needs_redraw
    }

    /// Derive the layout for `view` unless it was derived for the same rect.
    /// Returns true if the layout was recomputed.
    pub fn recompute_layout(&mut self, view: PixelRect, board_size: u8, style: &BoardStyle) -> bool {
        self.layout.recompute(view, board_size, style)
    }

    /// Force the next [`BoardView::recompute_layout`] to derive a fresh layout,
    /// e.g. after the style's margins changed
    pub fn invalidate_layout(&mut self) {
        self.layout.invalidate();
    }

    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.layout()
    }

    /// How many times the layout has been derived since the view was created
    pub fn layout_recomputations(&self) -> u64 {
        self.layout.recomputations()
    }

    /// Paint the board into `ctx`, refresh the status line and clear the cross-hair
    pub fn render(&mut self, ctx: &mut dyn DrawingContext, view: PixelRect, game: &GameState, style: &BoardStyle) {
        let layout = self.layout.get_or_compute(view, game.board_size, style);
        BoardRenderer::new(&layout, style).render(ctx, game, self.cross_hair.as_ref());

        self.refresh_status();
        self.cross_hair = None;
        self.needs_redraw = false;
    }

    /// Vertex under `pixel`, `None` off the board or before the first layout
    pub fn vertex_at(&self, pixel: PixelPoint) -> Option<Vertex> {
        self.layout.layout()?.vertex_at(pixel)
    }

    /// Pixel position of `vertex`, `None` before the first layout
    pub fn pixel_from_vertex(&self, vertex: Vertex) -> Option<PixelPoint> {
        Some(self.layout.layout()?.pixel_from_vertex(vertex))
    }

    /// Vertex the cross-hair should jump to for a pointer at `pixel`
    pub fn cross_hair_at(&self, pixel: PixelPoint, finger_offset_cells: u32) -> Option<Vertex> {
        self.layout.layout()?.cross_hair_at(pixel, finger_offset_cells)
    }

    /// Show the cross-hair on `vertex` for the next render
    pub fn move_cross_hair_to(&mut self, vertex: Vertex, is_legal_move: bool) {
        self.set_cross_hair(CrossHair {
            vertex,
            is_legal_move,
            illegal_reason: None,
        });
    }

    /// Like [`BoardView::move_cross_hair_to`], keeping the illegal-move reason
    pub fn set_cross_hair(&mut self, cross_hair: CrossHair) {
        self.cross_hair = Some(cross_hair);
        self.needs_redraw = true;
    }

    pub fn cross_hair(&self) -> Option<CrossHair> {
        self.cross_hair
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// True while an external computation is running
    pub fn is_activity_indicator_visible(&self) -> bool {
        self.computation.is_some()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn refresh_status(&mut self) {
        self.status_text = status_text(self.cross_hair.as_ref(), self.computation);
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}
