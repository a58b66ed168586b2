//! Zeichnet den Map-Hintergrund (Textur oder Platzhalter) und das Raster.

use crate::shared::RenderScene;

/// Farbe der Platzhalter-Fläche wenn kein Map-Bild geladen ist.
const PLACEHOLDER_FILL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
/// Rahmenfarbe des Map-Bereichs.
const MAP_BORDER: egui::Color32 = egui::Color32::from_gray(70);
/// Rasterfarbe (Kilometer-Raster).
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(255, 255, 255, 24);
/// Anzahl Rasterzellen pro Achse (8x8-km-Maps).
const GRID_CELLS: u32 = 8;

/// Screen-Rechteck des Map-Bereichs.
fn map_rect(origin: egui::Pos2, scene: &RenderScene) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(scene.map_rect_min.x, scene.map_rect_min.y),
        egui::Vec2::splat(scene.map_rect_size),
    )
}

/// Zeichnet Hintergrundbild bzw. Platzhalter plus optionales Raster.
///
/// Ohne Textur bleibt der Viewport voll interaktiv — es wird nur eine
/// neutrale Fläche mit Hinweistext gezeichnet.
pub fn draw_background(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scene: &RenderScene,
    texture: Option<&egui::TextureHandle>,
) {
    let rect = map_rect(origin, scene);

    match texture {
        Some(texture) if scene.image_available => {
            let tint = egui::Color32::WHITE.gamma_multiply(scene.background_opacity);
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                tint,
            );
        }
        _ => {
            painter.rect_filled(rect, 0.0, PLACEHOLDER_FILL);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Map-Bild nicht verfügbar",
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(120),
            );
        }
    }

    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, MAP_BORDER),
        egui::StrokeKind::Outside,
    );

    if scene.show_grid {
        draw_grid(painter, rect);
    }
}

/// Zeichnet das Kilometer-Raster über dem Map-Bereich.
fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);
    let step = rect.width() / GRID_CELLS as f32;

    for i in 1..GRID_CELLS {
        let offset = i as f32 * step;
        painter.line_segment(
            [
                egui::pos2(rect.min.x + offset, rect.min.y),
                egui::pos2(rect.min.x + offset, rect.max.y),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.min.x, rect.min.y + offset),
                egui::pos2(rect.max.x, rect.min.y + offset),
            ],
            stroke,
        );
    }
}
