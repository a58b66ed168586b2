//! Kategorie-Filter: Sichtbarkeit pro Kategorie, session-lokal.

use super::map_descriptor::MapId;
use super::marker::{Marker, MarkerCategory};

/// Sichtbarkeits-Flags pro Kategorie.
///
/// Session-lokal, wird nicht persistiert. Sichtbarkeit ist ein reines
/// boolesches UND aus Kategorie-Flag und Map-Identität — es gibt keinen
/// Teilsichtbarkeits- oder Fade-Zustand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    enabled: [bool; MarkerCategory::COUNT],
}

impl FilterState {
    /// Standard-Preset beim Laden: genau eine Kategorie (Garage) sichtbar.
    pub fn new() -> Self {
        let mut enabled = [false; MarkerCategory::COUNT];
        enabled[MarkerCategory::Garage.index()] = true;
        Self { enabled }
    }

    /// Alle Kategorien sichtbar (Tests, Debug-Ansicht).
    pub fn all_visible() -> Self {
        Self {
            enabled: [true; MarkerCategory::COUNT],
        }
    }

    /// Kippt genau ein Kategorie-Flag.
    pub fn toggle(&mut self, category: MarkerCategory) {
        self.enabled[category.index()] = !self.enabled[category.index()];
    }

    /// Setzt ein Kategorie-Flag explizit.
    pub fn set(&mut self, category: MarkerCategory, visible: bool) {
        self.enabled[category.index()] = visible;
    }

    /// Gibt zurück, ob die Kategorie aktuell eingeblendet ist.
    pub fn is_enabled(&self, category: MarkerCategory) -> bool {
        self.enabled[category.index()]
    }

    /// Sichtbarkeitsvertrag: Kategorie-Flag UND Map-Identität.
    pub fn is_visible(&self, marker: &Marker, active_map: MapId) -> bool {
        self.is_enabled(marker.category) && marker.map_id == active_map
    }

    /// Anzahl eingeblendeter Kategorien (Statuszeile).
    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|&&e| e).count()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
