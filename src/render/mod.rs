//! Render-Layer: zeichnet die Szene über den egui-Painter.

mod background;
mod pins;

pub use background::draw_background;
pub use pins::draw_pins;

use crate::shared::RenderScene;

/// Zeichnet eine komplette Szene: Hintergrund, Raster, Pins, Overlay.
pub fn draw_scene(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scene: &RenderScene,
    texture: Option<&egui::TextureHandle>,
) {
    draw_background(painter, origin, scene, texture);
    draw_pins(painter, origin, scene);
}
