//! Zeichnet Marker-Pins und das Label-Overlay des selektierten Markers.

use crate::core::MarkerIcon;
use crate::shared::options::{PIN_HEAD_OFFSET_PX, PIN_HEAD_RADIUS_PX, PIN_HEIGHT_PX};
use crate::shared::{PinInstance, RenderScene, SelectionOverlay};

/// Hintergrund des Label-Overlays.
const OVERLAY_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(20, 20, 20, 230);
/// Hervorhebungsfarbe selektierter Pins.
const SELECTION_RING: egui::Color32 = egui::Color32::WHITE;

/// Zeichnet alle Pins der Szene in Store-Reihenfolge, danach das Overlay.
pub fn draw_pins(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    for pin in &scene.pins {
        draw_pin(painter, origin, pin, scene.pin_scale);
    }

    if let Some(overlay) = &scene.overlay {
        draw_overlay(painter, origin, overlay, scene.pin_scale);
    }
}

/// Zeichnet einen einzelnen Pin.
///
/// Die Pin-SPITZE liegt exakt auf `screen_pos` — das Icon ankert mit
/// seinem unteren Mittelpunkt auf der Marker-Koordinate und zeigt auf
/// sie herab.
fn draw_pin(painter: &egui::Painter, origin: egui::Pos2, pin: &PinInstance, scale: f32) {
    let icon: &MarkerIcon = pin.category.icon();
    let fill = egui::Color32::from_rgb(icon.fill[0], icon.fill[1], icon.fill[2]);
    let outline = egui::Color32::from_rgb(icon.outline[0], icon.outline[1], icon.outline[2]);

    let tip = origin + egui::vec2(pin.screen_pos.x, pin.screen_pos.y);
    let head_radius = PIN_HEAD_RADIUS_PX * scale;
    let head_center = tip - egui::vec2(0.0, PIN_HEAD_OFFSET_PX * scale);

    // Körper: Dreieck von der Spitze zu den Kopf-Flanken
    let body = vec![
        tip,
        head_center + egui::vec2(-head_radius * 0.85, head_radius * 0.35),
        head_center + egui::vec2(head_radius * 0.85, head_radius * 0.35),
    ];
    painter.add(egui::Shape::convex_polygon(
        body,
        fill,
        egui::Stroke::new(1.0, outline),
    ));

    // Kopf mit Outline
    painter.circle_filled(head_center, head_radius, fill);
    painter.circle_stroke(head_center, head_radius, egui::Stroke::new(1.5, outline));

    // Glyphe im Kopf
    painter.text(
        head_center,
        egui::Align2::CENTER_CENTER,
        icon.glyph,
        egui::FontId::proportional(head_radius * 1.1),
        egui::Color32::WHITE,
    );

    if pin.selected {
        painter.circle_stroke(
            head_center,
            head_radius + 3.0,
            egui::Stroke::new(2.0, SELECTION_RING),
        );
    }
}

/// Zeichnet das transiente Label-Overlay über dem selektierten Pin.
fn draw_overlay(
    painter: &egui::Painter,
    origin: egui::Pos2,
    overlay: &SelectionOverlay,
    scale: f32,
) {
    let anchor = origin + egui::vec2(overlay.screen_pos.x, overlay.screen_pos.y);

    let text = match overlay.marker_id {
        Some(id) => format!("{}  (ID {})", overlay.label, id),
        None => overlay.label.clone(),
    };

    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );

    let padding = egui::vec2(8.0, 5.0);
    let size = galley.size() + padding * 2.0;
    let bottom_center = anchor - egui::vec2(0.0, PIN_HEIGHT_PX * scale + 6.0);
    let rect = egui::Rect::from_min_size(
        bottom_center - egui::vec2(size.x / 2.0, size.y),
        size,
    );

    painter.rect_filled(rect, 4.0, OVERLAY_FILL);
    painter.galley(rect.min + padding, galley, egui::Color32::WHITE);
}
