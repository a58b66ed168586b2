//! 2D-Kamera über dem Bild-Pixelraum einer Map.

use glam::Vec2;

/// Kamera mit Pan und Zoom über einem fixen, planaren Bildraum.
///
/// Koordinatenkonvention: Weltkoordinaten sind Bild-Pixel der Map,
/// Ursprung oben links, Y nach unten — keine geographische Projektion.
/// `zoom` ist Screen-Pixel pro Bild-Pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Welt-Punkt im Viewport-Zentrum
    pub position: Vec2,
    /// Screen-Pixel pro Bild-Pixel
    pub zoom: f32,
}

impl Camera2D {
    /// Maximaler Zoom-Faktor (Nahinspektion).
    pub const ZOOM_MAX: f32 = 4.0;
    /// Untergrenze falls noch keine Viewport-Größe bekannt ist.
    pub const ZOOM_FALLBACK: f32 = 0.1;

    /// Erstellt eine Kamera zentriert auf die Bildmitte der Map.
    ///
    /// Der endgültige Fit-Zoom wird gesetzt, sobald die erste
    /// Viewport-Größe bekannt ist (`reset`).
    pub fn new(extent: f32) -> Self {
        Self {
            position: Vec2::splat(extent / 2.0),
            zoom: Self::ZOOM_FALLBACK,
        }
    }

    /// Zoom, bei dem das gesamte Bild in den Viewport passt (= Minimal-Zoom).
    pub fn fit_zoom(extent: f32, viewport: Vec2) -> f32 {
        if extent <= 0.0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Self::ZOOM_FALLBACK;
        }
        (viewport.x / extent).min(viewport.y / extent)
    }

    /// Vollständiger Reset: Bildmitte zentriert, Fit-Zoom.
    ///
    /// Ein Map-Wechsel MUSS hierüber laufen — Maps sind unabhängige
    /// Koordinatenräume, auch wenn sie dieselbe Pixel-Ausdehnung teilen.
    pub fn reset(&mut self, extent: f32, viewport: Vec2) {
        self.position = Vec2::splat(extent / 2.0);
        self.zoom = Self::fit_zoom(extent, viewport);
    }

    /// Verschiebt die Kamera um ein Welt-Delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Multipliziert den Zoom und klemmt auf [min, max].
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Rechnet eine Viewport-Position (Screen-Pixel, relativ zum
    /// Viewport-Ursprung) in Weltkoordinaten um.
    pub fn screen_to_world(&self, screen_pos: Vec2, viewport: Vec2) -> Vec2 {
        (screen_pos - viewport * 0.5) / self.zoom + self.position
    }

    /// Rechnet Weltkoordinaten in eine Viewport-Position um.
    pub fn world_to_screen(&self, world_pos: Vec2, viewport: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + viewport * 0.5
    }

    /// Umrechnungsfaktor Screen-Pixel → Welt-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom.max(f32::EPSILON)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(super::map_descriptor::MAP_EXTENT)
    }
}
