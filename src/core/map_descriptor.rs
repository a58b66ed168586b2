//! Statischer Map-Katalog: ID, Anzeigename, Bildpfad, Pixel-Ausdehnung.

use serde::{Deserialize, Serialize};

/// Kantenlänge aller Map-Bilder in Pixeln (quadratisch, für alle Maps gleich).
pub const MAP_EXTENT: f32 = 8192.0;

/// Geschlossene Menge der auswählbaren Maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapId {
    Erangel,
    Miramar,
    Taego,
}

/// Statische Metadaten einer auswählbaren Hintergrund-Map.
///
/// Map-Descriptoren sind zur Build-Zeit fixiert und werden zur Laufzeit
/// weder erstellt noch verändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDescriptor {
    /// Map-Identität
    pub id: MapId,
    /// Anzeigename
    pub label: &'static str,
    /// Pfad zum Hintergrundbild (relativ zum Arbeitsverzeichnis)
    pub image_path: &'static str,
    /// Kantenlänge des Bildes in Pixeln
    pub extent: f32,
}

/// Build-Zeit-Katalog aller Maps.
const MAPS: [MapDescriptor; 3] = [
    MapDescriptor {
        id: MapId::Erangel,
        label: "Erangel",
        image_path: "assets/maps/erangel.png",
        extent: MAP_EXTENT,
    },
    MapDescriptor {
        id: MapId::Miramar,
        label: "Miramar",
        image_path: "assets/maps/miramar.png",
        extent: MAP_EXTENT,
    },
    MapDescriptor {
        id: MapId::Taego,
        label: "Taego",
        image_path: "assets/maps/taego.png",
        extent: MAP_EXTENT,
    },
];

impl MapId {
    /// Alle Maps in UI-Reihenfolge.
    pub const ALL: [MapId; 3] = [MapId::Erangel, MapId::Miramar, MapId::Taego];

    /// Liefert den statischen Descriptor dieser Map.
    pub fn descriptor(self) -> &'static MapDescriptor {
        match self {
            MapId::Erangel => &MAPS[0],
            MapId::Miramar => &MAPS[1],
            MapId::Taego => &MAPS[2],
        }
    }

    /// Anzeigename der Map.
    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl MapDescriptor {
    /// Liefert den vollständigen Katalog.
    pub fn all() -> &'static [MapDescriptor] {
        &MAPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_map_ids() {
        for map_id in MapId::ALL {
            let descriptor = map_id.descriptor();
            assert_eq!(descriptor.id, map_id);
            assert!(!descriptor.label.is_empty());
            assert!(descriptor.image_path.ends_with(".png"));
        }
    }

    #[test]
    fn test_all_maps_share_square_extent() {
        for descriptor in MapDescriptor::all() {
            assert_eq!(descriptor.extent, MAP_EXTENT);
        }
    }

    #[test]
    fn test_map_id_serde_lowercase() {
        let json = serde_json::to_string(&MapId::Taego).expect("Serialisierung erwartet");
        assert_eq!(json, "\"taego\"");

        let back: MapId = serde_json::from_str("\"erangel\"").expect("Deserialisierung erwartet");
        assert_eq!(back, MapId::Erangel);
    }
}
