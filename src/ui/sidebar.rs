//! Sidebar: Map-Auswahl und Kategorie-Filterliste mit Zähler-Badges.

use crate::app::{AppIntent, AppState};
use crate::core::{MapId, MarkerCategory};

/// Rendert die linke Sidebar und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(state.session.active_map.label());
            ui.add_space(4.0);

            // Map-Auswahl
            egui::ComboBox::from_id_salt("map_select")
                .selected_text(state.session.active_map.label())
                .width(200.0)
                .show_ui(ui, |ui| {
                    for map in MapId::ALL {
                        if ui
                            .selectable_label(state.session.active_map == map, map.label())
                            .clicked()
                        {
                            events.push(AppIntent::MapSelected { map });
                        }
                    }
                });

            ui.separator();

            // Filterliste: Klick auf Zeile kippt genau ein Kategorie-Flag
            for category in MarkerCategory::ALL {
                render_filter_row(ui, state, category, &mut events);
            }

            ui.separator();
            ui.label(format!(
                "Sichtbar: {} / {}",
                state.visible_marker_count(),
                state.marker_count_on_active_map()
            ));
        });

    events
}

/// Rendert eine Filterzeile mit Glyphe, Label und Zähler-Badge.
///
/// Der Zähler wird auch für ausgeblendete Kategorien angezeigt.
fn render_filter_row(
    ui: &mut egui::Ui,
    state: &AppState,
    category: MarkerCategory,
    events: &mut Vec<AppIntent>,
) {
    let icon = category.icon();
    let enabled = state.session.filters.is_enabled(category);
    let count = state
        .session
        .markers
        .count_by_category(state.session.active_map, category);

    let text = format!("{} {}  ({})", icon.glyph, category.label(), count);
    let rich = if enabled {
        egui::RichText::new(text).color(egui::Color32::from_rgb(
            icon.fill[0],
            icon.fill[1],
            icon.fill[2],
        ))
    } else {
        egui::RichText::new(text).weak()
    };

    if ui.selectable_label(enabled, rich).clicked() {
        events.push(AppIntent::FilterToggled { category });
    }
}
