//! Top-Menü (Datei, Ansicht, Modus, Karte).

use crate::app::state::AppMode;
use crate::app::{AppIntent, AppState};
use crate::core::MapId;

/// Rendert die Menü-Leiste.
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                let has_markers = !state.session.markers.is_empty();

                if ui
                    .add_enabled(has_markers, egui::Button::new("Marker exportieren..."))
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen (0)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Hineinzoomen (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Herauszoomen (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let mut options = state.options.clone();
                if ui
                    .checkbox(&mut options.show_grid, "Kilometer-Raster")
                    .changed()
                {
                    events.push(AppIntent::OptionsChanged { options });
                    ui.close();
                }
            });

            ui.menu_button("Modus", |ui| {
                for mode in [AppMode::Viewer, AppMode::Editor] {
                    if ui
                        .radio(state.session.mode == mode, mode.label())
                        .clicked()
                    {
                        events.push(AppIntent::ModeSelected { mode });
                        ui.close();
                    }
                }
            });

            ui.menu_button("Karte", |ui| {
                for map in MapId::ALL {
                    if ui
                        .radio(state.session.active_map == map, map.label())
                        .clicked()
                    {
                        events.push(AppIntent::MapSelected { map });
                        ui.close();
                    }
                }
            });
        });
    });

    events
}
