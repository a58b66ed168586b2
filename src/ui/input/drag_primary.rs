//! Drag-Start/-Ende: Pin-Move oder Kamera-Pan.

use super::{pick_marker_at, InputState, PrimaryDragMode, ViewportContext};
use crate::app::state::AppMode;
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus (Pin-Move oder Pan).
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung,
        // was zu asymmetrischen Hitboxen führen kann.
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());

        let marker_hit = if ctx.session.mode == AppMode::Editor {
            press_pos.and_then(|pos| pick_marker_at(ctx, pos))
        } else {
            None
        };

        match marker_hit {
            Some(id) => {
                events.push(AppIntent::MarkerDragStarted { id });
                self.primary_drag_mode = PrimaryDragMode::MarkerMove(id);
            }
            None => {
                self.primary_drag_mode = PrimaryDragMode::CameraPan;
            }
        }
    }

    /// Beendet einen Drag und committet ggf. die Pin-Position.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if matches!(self.primary_drag_mode, PrimaryDragMode::MarkerMove(_)) {
            events.push(AppIntent::MarkerDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
