//! Editor-Toolbar: Kategorie-Buttons mit Zähler-Badges und Map-Leeren.

use crate::app::state::AppMode;
use crate::app::{AppIntent, AppState};
use crate::core::MarkerCategory;

/// Rendert die Toolbar (nur im Editor-Modus) und gibt erzeugte Events zurück.
///
/// Button-Verhalten wie im Viewer-Pendant der Sidebar: der Zähler zählt
/// unabhängig von der Sichtbarkeit der Kategorie.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if state.session.mode != AppMode::Editor {
        return events;
    }

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kategorie:");
            ui.separator();

            for category in MarkerCategory::ALL {
                render_category_button(ui, state, category, &mut events);
            }

            ui.separator();

            // Leeren-Button mit Gesamtzahl der aktiven Map
            let total = state.marker_count_on_active_map();
            if ui
                .add_enabled(
                    total > 0,
                    egui::Button::new(format!("🗑 Map leeren ({})", total)),
                )
                .clicked()
            {
                events.push(AppIntent::ClearMapRequested);
            }

            // Persistenz-Status (rechts ausgerichtet)
            if !state.session.markers_loaded {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("⚠ Speichern deaktiviert")
                            .color(egui::Color32::YELLOW),
                    );
                });
            }
        });
    });

    events
}

/// Rendert einen Kategorie-Button mit Glyphe, Label und Zähler-Badge.
fn render_category_button(
    ui: &mut egui::Ui,
    state: &AppState,
    category: MarkerCategory,
    events: &mut Vec<AppIntent>,
) {
    let icon = category.icon();
    let count = state
        .session
        .markers
        .count_by_category(state.session.active_map, category);
    let enabled = state.session.filters.is_enabled(category);
    let is_active = state.session.active_category == category;

    let text = format!("{} {} ({})", icon.glyph, category.label(), count);
    let rich = if enabled {
        egui::RichText::new(text).color(egui::Color32::from_rgb(
            icon.fill[0],
            icon.fill[1],
            icon.fill[2],
        ))
    } else {
        egui::RichText::new(text).weak()
    };

    let button = egui::Button::new(rich).selected(is_active);
    if ui.add(button).clicked() {
        events.push(AppIntent::CategoryButtonPressed { category });
    }
}
