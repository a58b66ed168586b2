//! Marker-Datenmodell: Kategorien, Icon-Tabelle und Marker-Record.

use super::map_descriptor::{MapId, MAP_EXTENT};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Geschlossene Menge der Marker-Kategorien.
///
/// Die Kategorie bestimmt Icon-Form und -Farbe sowie das Standard-Label
/// beim Platzieren im Editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerCategory {
    /// Fahrzeug-Garage (fester Spawn)
    Garage,
    /// Zufälliger Fahrzeug-Spawn
    Random,
    /// Esport-Fahrzeug (Turnier-Fixpunkt)
    Esports,
    /// Boots-Spawn
    Boat,
    /// Esport-Boot (Turnier-Fixpunkt)
    EsportsBoat,
    /// Motor-Gleiter
    Glider,
    /// Schlüssel für Geheimräume
    Key,
}

/// Statischer Icon-Descriptor einer Kategorie (Farbe + Glyphe).
///
/// Die Tabelle wird einmal beim Start aufgelöst und nie pro Frame berechnet —
/// sie ist die einzige Quelle, über die ein Nutzer Kategorien auf einen
/// Blick unterscheidet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIcon {
    /// Füllfarbe des Pins (RGB)
    pub fill: [u8; 3],
    /// Outline-Farbe des Pins (RGB, dunklere Variante der Füllfarbe)
    pub outline: [u8; 3],
    /// Glyphe im Pin-Kopf
    pub glyph: &'static str,
}

/// Icon-Tabelle: Kategorie → (Farbe, Glyphe), 1:1 und exakt.
const ICON_TABLE: [MarkerIcon; MarkerCategory::COUNT] = [
    // Garage: Rot
    MarkerIcon {
        fill: [220, 38, 38],
        outline: [127, 21, 21],
        glyph: "🏠",
    },
    // Random: Bernstein
    MarkerIcon {
        fill: [217, 119, 6],
        outline: [120, 66, 3],
        glyph: "🚗",
    },
    // Esports: Violett
    MarkerIcon {
        fill: [124, 58, 237],
        outline: [69, 32, 131],
        glyph: "🏆",
    },
    // Boat: Blau
    MarkerIcon {
        fill: [37, 99, 235],
        outline: [20, 55, 130],
        glyph: "🚤",
    },
    // EsportsBoat: Helles Violett
    MarkerIcon {
        fill: [139, 92, 246],
        outline: [77, 51, 136],
        glyph: "⛵",
    },
    // Glider: Orange
    MarkerIcon {
        fill: [234, 88, 12],
        outline: [129, 49, 7],
        glyph: "🪂",
    },
    // Key: Grün
    MarkerIcon {
        fill: [22, 163, 74],
        outline: [12, 90, 41],
        glyph: "🔑",
    },
];

impl MarkerCategory {
    /// Anzahl der Kategorien (Array-Dimensionen für FilterState u.a.).
    pub const COUNT: usize = 7;

    /// Alle Kategorien in UI-Reihenfolge.
    pub const ALL: [MarkerCategory; Self::COUNT] = [
        MarkerCategory::Garage,
        MarkerCategory::Random,
        MarkerCategory::Esports,
        MarkerCategory::Boat,
        MarkerCategory::EsportsBoat,
        MarkerCategory::Glider,
        MarkerCategory::Key,
    ];

    /// Stabiler Index für Array-basierte Zustände (FilterState, Zähler).
    pub const fn index(self) -> usize {
        match self {
            MarkerCategory::Garage => 0,
            MarkerCategory::Random => 1,
            MarkerCategory::Esports => 2,
            MarkerCategory::Boat => 3,
            MarkerCategory::EsportsBoat => 4,
            MarkerCategory::Glider => 5,
            MarkerCategory::Key => 6,
        }
    }

    /// Statischer Icon-Descriptor der Kategorie.
    pub const fn icon(self) -> &'static MarkerIcon {
        &ICON_TABLE[self.index()]
    }

    /// Anzeigename der Kategorie (Sidebar, Toolbar).
    pub const fn label(self) -> &'static str {
        match self {
            MarkerCategory::Garage => "Garage",
            MarkerCategory::Random => "Zufallsfahrzeug",
            MarkerCategory::Esports => "Esport-Fahrzeug",
            MarkerCategory::Boat => "Boot",
            MarkerCategory::EsportsBoat => "Esport-Boot",
            MarkerCategory::Glider => "Gleiter",
            MarkerCategory::Key => "Schlüssel",
        }
    }

    /// Standard-Label für neu platzierte Marker dieser Kategorie.
    pub const fn default_label(self) -> &'static str {
        match self {
            MarkerCategory::Garage => "Garage",
            MarkerCategory::Random => "Zufallsfahrzeug",
            MarkerCategory::Esports => "Fixes Fahrzeug",
            MarkerCategory::Boat => "Boot",
            MarkerCategory::EsportsBoat => "Fixes Boot",
            MarkerCategory::Glider => "Gleiter",
            MarkerCategory::Key => "Geheimraum-Schlüssel",
        }
    }
}

/// Punkt-Annotation auf genau einer Map.
///
/// Außer der Position (Editor-Drag) und der Existenz (Platzieren/Löschen)
/// wird kein Feld nachträglich verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MarkerRecord", into = "MarkerRecord")]
pub struct Marker {
    /// Eindeutige, monotone ID — wird nach Löschung nie wiederverwendet
    pub id: u64,
    /// Map, zu der der Marker gehört
    pub map_id: MapId,
    /// Kategorie (bestimmt Icon und Standard-Label)
    pub category: MarkerCategory,
    /// Position im Bild-Pixelraum der Map, beide Achsen in [0, MAP_EXTENT]
    pub position: Vec2,
    /// Anzeigename
    pub label: String,
}

impl Marker {
    /// Erstellt einen Marker mit geklemmter Position und Standard-Label.
    pub fn new(id: u64, map_id: MapId, category: MarkerCategory, position: Vec2) -> Self {
        Self {
            id,
            map_id,
            category,
            position: clamp_to_map(position),
            label: category.default_label().to_string(),
        }
    }
}

/// Klemmt eine Position auf den gültigen Bild-Pixelraum [0, MAP_EXTENT]².
pub fn clamp_to_map(position: Vec2) -> Vec2 {
    position.clamp(Vec2::ZERO, Vec2::splat(MAP_EXTENT))
}

/// Serde-Gestalt eines Markers: exakt die Felder
/// `{id, mapId, category, x, y, label}` — kompatibel zum Slot- und
/// Export-Format, verlustfreier Round-Trip.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkerRecord {
    id: u64,
    map_id: MapId,
    category: MarkerCategory,
    x: f32,
    y: f32,
    label: String,
}

impl From<MarkerRecord> for Marker {
    fn from(r: MarkerRecord) -> Self {
        Self {
            id: r.id,
            map_id: r.map_id,
            category: r.category,
            position: clamp_to_map(Vec2::new(r.x, r.y)),
            label: r.label,
        }
    }
}

impl From<Marker> for MarkerRecord {
    fn from(m: Marker) -> Self {
        Self {
            id: m.id,
            map_id: m.map_id,
            category: m.category,
            x: m.position.x,
            y: m.position.y,
            label: m.label,
        }
    }
}
