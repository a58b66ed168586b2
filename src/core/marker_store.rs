//! Der zentrale Marker-Store: geordnete Sammlung mit monotonen IDs.

use super::filter::FilterState;
use super::map_descriptor::MapId;
use super::marker::{clamp_to_map, Marker, MarkerCategory};
use glam::Vec2;
use indexmap::IndexMap;

/// Geordnete In-Memory-Sammlung aller Marker.
///
/// IDs sind monoton und werden nach Löschung nie wiederverwendet —
/// die Hochwassermarke überlebt Deletes und wird beim Laden aus
/// `max(id) + 1` rekonstruiert.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    /// Marker in Einfüge-Reihenfolge, indexiert nach ID
    markers: IndexMap<u64, Marker>,
    /// Nächste zu vergebende ID (Hochwassermarke)
    next_id: u64,
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Platziert einen neuen Marker und gibt dessen frische ID zurück.
    ///
    /// Position wird auf den Bild-Pixelraum geklemmt, das Label aus der
    /// Kategorie abgeleitet.
    pub fn place(&mut self, map_id: MapId, category: MarkerCategory, position: Vec2) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.markers
            .insert(id, Marker::new(id, map_id, category, position));
        id
    }

    /// Verschiebt einen Marker. No-op (`false`) bei unbekannter ID.
    ///
    /// Nur die Position ändert sich; ID, Kategorie, Label und Map bleiben
    /// erhalten.
    pub fn move_marker(&mut self, id: u64, position: Vec2) -> bool {
        let Some(marker) = self.markers.get_mut(&id) else {
            return false;
        };
        marker.position = clamp_to_map(position);
        true
    }

    /// Entfernt einen Marker. Idempotent: der zweite Aufruf auf dieselbe
    /// ID ist ein No-op (`false`), kein Fehler.
    pub fn remove(&mut self, id: u64) -> bool {
        self.markers.shift_remove(&id).is_some()
    }

    /// Leert ausschließlich die Marker der angegebenen Map.
    ///
    /// Gibt die Anzahl entfernter Marker zurück. Marker fremder Maps
    /// bleiben unberührt (Per-Map-Scoping).
    pub fn clear_map(&mut self, map_id: MapId) -> usize {
        let before = self.markers.len();
        self.markers.retain(|_, m| m.map_id != map_id);
        before - self.markers.len()
    }

    /// Ersetzt den gesamten Bestand (Dataset-/Slot-Load) und rekonstruiert
    /// die ID-Hochwassermarke.
    pub fn replace_all(&mut self, markers: Vec<Marker>) {
        self.markers = markers.into_iter().map(|m| (m.id, m)).collect();
        self.next_id = self.markers.keys().max().copied().unwrap_or(0) + 1;
    }

    /// Findet einen Marker nach ID.
    pub fn get(&self, id: u64) -> Option<&Marker> {
        self.markers.get(&id)
    }

    /// Iterator über alle Marker in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Sichtbare Marker der aktiven Map gemäß Filterzustand.
    pub fn visible_markers<'a>(
        &'a self,
        active_map: MapId,
        filters: &'a FilterState,
    ) -> impl Iterator<Item = &'a Marker> {
        self.markers
            .values()
            .filter(move |m| filters.is_visible(m, active_map))
    }

    /// Anzahl der Marker einer Kategorie auf der aktiven Map.
    ///
    /// Zählt unabhängig von der Sichtbarkeit der Kategorie — Badges
    /// zeigen auch für ausgeblendete Kategorien die Anzahl.
    pub fn count_by_category(&self, active_map: MapId, category: MarkerCategory) -> usize {
        self.markers
            .values()
            .filter(|m| m.map_id == active_map && m.category == category)
            .count()
    }

    /// Anzahl aller Marker der aktiven Map.
    pub fn count_on_map(&self, active_map: MapId) -> usize {
        self.markers
            .values()
            .filter(|m| m.map_id == active_map)
            .count()
    }

    /// Gesamtzahl aller Marker im Store.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Vollständiger Bestand in Einfüge-Reihenfolge (Slot-Write, Export).
    pub fn to_vec(&self) -> Vec<Marker> {
        self.markers.values().cloned().collect()
    }
}
