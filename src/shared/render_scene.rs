//! Render-Szene: der Vertrag zwischen App-Zustand und Painter.
//!
//! Die Szene wird pro Frame aus dem `AppState` gebaut und enthält nur
//! Screen-Space-Daten — der Painter kennt weder Kamera noch Store.

use crate::core::MarkerCategory;
use glam::Vec2;

/// Ein sichtbarer Pin in Screen-Koordinaten.
///
/// `screen_pos` ist die Pin-SPITZE: das Icon ankert mit seinem unteren
/// Mittelpunkt exakt auf der Marker-Koordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PinInstance {
    /// Marker-ID
    pub id: u64,
    /// Kategorie (bestimmt Icon über die statische Tabelle)
    pub category: MarkerCategory,
    /// Position der Pin-Spitze in Screen-Pixeln
    pub screen_pos: Vec2,
    /// Marker ist aktuell selektiert
    pub selected: bool,
}

/// Transientes Label-Overlay eines selektierten Markers.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOverlay {
    /// Anker in Screen-Pixeln (Pin-Spitze des Markers)
    pub screen_pos: Vec2,
    /// Anzeigename des Markers
    pub label: String,
    /// Marker-ID, nur im Editor-Modus angezeigt
    pub marker_id: Option<u64>,
}

/// Vollständige Szene eines Frames.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Viewport-Größe in Screen-Pixeln
    pub viewport_size: [f32; 2],
    /// Obere linke Ecke des Map-Bereichs in Screen-Pixeln
    pub map_rect_min: Vec2,
    /// Kantenlänge des Map-Bereichs in Screen-Pixeln
    pub map_rect_size: f32,
    /// Hintergrundbild vorhanden (sonst Platzhalter zeichnen)
    pub image_available: bool,
    /// Deckungs-Niveau des Hintergrundbilds
    pub background_opacity: f32,
    /// Kilometer-Raster einblenden
    pub show_grid: bool,
    /// Sichtbare Pins in Zeichenreihenfolge
    pub pins: Vec<PinInstance>,
    /// Label-Overlay des selektierten Markers
    pub overlay: Option<SelectionOverlay>,
    /// Skalierungsfaktor der Pin-Icons
    pub pin_scale: f32,
}
