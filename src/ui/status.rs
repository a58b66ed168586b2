//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.session.mode.label()));

            ui.separator();

            ui.label(format!(
                "Map: {} | Marker: {} (sichtbar: {}) | Filter: {} aktiv",
                state.session.active_map.label(),
                state.marker_count_on_active_map(),
                state.visible_marker_count(),
                state.session.filters.enabled_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.0}, {:.0})",
                state.view.camera.zoom,
                state.view.camera.position.x,
                state.view.camera.position.y
            ));

            ui.separator();

            match state.session.selected_marker_id {
                Some(id) => ui.label(format!("Selektiert: Marker {}", id)),
                None => ui.label("Selektiert: —"),
            };

            // Statusnachricht (z.B. Speicher-Fehler, Export-Ergebnis)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
