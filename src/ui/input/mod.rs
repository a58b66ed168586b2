//! Viewport-Input-Handling: Maus-Events, Pin-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Pick, Platzieren, Rechtsklick-Löschen)
//! - `drag_primary` — Drag-Start/-Ende (Pin-Move, Kamera-Pan)
//! - `pointer_delta` — Pan/Move-Deltas während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::state::SessionState;
use crate::app::AppIntent;
use crate::core::Camera2D;
use crate::shared::options::{PIN_HEIGHT_PX, PIN_WIDTH_PX};
use crate::shared::EditorOptions;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    CameraPan,
    /// Drag eines Marker-Pins
    MarkerMove(u64),
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub session: &'a SessionState,
    pub options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        session: &SessionState,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            session,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui, session));

        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}

/// Hit-Test: oberster sichtbarer Pin unter der Bildschirmposition.
///
/// Getestet wird gegen die Pin-Bounding-Box (Spitze unten-mittig).
/// Bei Überlappung gewinnt der zuletzt gezeichnete Pin.
pub(crate) fn pick_marker_at(ctx: &ViewportContext, pointer_pos: egui::Pos2) -> Option<u64> {
    let local = pointer_pos - ctx.response.rect.min;
    let local = glam::Vec2::new(local.x, local.y);
    let viewport = glam::Vec2::new(ctx.viewport_size[0], ctx.viewport_size[1]);

    let scale = ctx.options.marker_scale;
    let half_width = PIN_WIDTH_PX * scale / 2.0;
    let height = PIN_HEIGHT_PX * scale;

    let mut hit = None;
    for marker in ctx
        .session
        .markers
        .visible_markers(ctx.session.active_map, &ctx.session.filters)
    {
        let tip = ctx.camera.world_to_screen(marker.position, viewport);
        let inside = local.x >= tip.x - half_width
            && local.x <= tip.x + half_width
            && local.y >= tip.y - height
            && local.y <= tip.y;
        if inside {
            hit = Some(marker.id);
        }
    }
    hit
}
