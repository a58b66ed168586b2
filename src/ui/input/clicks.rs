//! Klick-Events: Pick, Platzieren, Rechtsklick-Löschen.

use super::{pick_marker_at, screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::state::AppMode;
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Klick-Events im Viewport.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                match pick_marker_at(ctx, pointer_pos) {
                    // Pin-Klick: selektieren (Label-Overlay), kein Store-Effekt
                    Some(id) => events.push(AppIntent::MarkerPicked { id }),
                    // Hintergrund-Klick: Editor platziert, Viewer deselektiert
                    None => {
                        let world_pos = screen_pos_to_world(
                            pointer_pos,
                            ctx.response,
                            ctx.viewport_size,
                            ctx.camera,
                        );
                        match ctx.session.mode {
                            AppMode::Editor => {
                                events.push(AppIntent::MarkerPlacementRequested { world_pos })
                            }
                            AppMode::Viewer => events.push(AppIntent::SelectionCleared),
                        }
                    }
                }
            }

            self.primary_drag_mode = PrimaryDragMode::None;
        }

        // Rechtsklick auf Pin: sofort löschen (nur Editor, keine Bestätigung)
        if ctx.response.secondary_clicked() && ctx.session.mode == AppMode::Editor {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                if let Some(id) = pick_marker_at(ctx, pointer_pos) {
                    events.push(AppIntent::MarkerRemovalRequested { id });
                }
            }
        }
    }
}
