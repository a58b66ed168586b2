//! Core-Domänentypen: Marker, Store, Filter, Map-Katalog, Kamera, Slot.

pub mod camera;
pub mod filter;
pub mod map_descriptor;
pub mod map_image;
/// Core-Datenmodelle des Spawn-Karten-Viewers
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - MarkerStore: geordnete Sammlung aller Marker
/// - Marker: Punkt-Annotation mit Kategorie, Position und Label
/// - FilterState: Sichtbarkeit pro Kategorie
pub mod marker;
pub mod marker_store;
pub mod slot;

pub use camera::Camera2D;
pub use filter::FilterState;
pub use map_descriptor::{MapDescriptor, MapId, MAP_EXTENT};
pub use map_image::MapImage;
pub use marker::{clamp_to_map, Marker, MarkerCategory, MarkerIcon};
pub use marker_store::MarkerStore;
pub use slot::MarkerSlot;
