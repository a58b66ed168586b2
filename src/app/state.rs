//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Camera2D, FilterState, MapId, MapImage, MarkerCategory, MarkerSlot, MarkerStore};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Betriebsmodus der Anwendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Nur-Lese-Ansicht über dem gebündelten Datensatz
    #[default]
    Viewer,
    /// Marker platzieren/verschieben/löschen, persistiert in den Slot
    Editor,
}

impl AppMode {
    /// Anzeigename des Modus.
    pub const fn label(self) -> &'static str {
        match self {
            AppMode::Viewer => "Viewer",
            AppMode::Editor => "Editor",
        }
    }
}

/// Expliziter Session-Kontext: aktive Map, Filter, Marker-Bestand.
///
/// Gehört exklusiv der einen aktiven Session — keine ambienten Globals.
pub struct SessionState {
    /// Betriebsmodus (Viewer/Editor)
    pub mode: AppMode,
    /// Aktive Hintergrund-Map
    pub active_map: MapId,
    /// Sichtbarkeits-Flags pro Kategorie
    pub filters: FilterState,
    /// Marker-Bestand (Viewer: Dataset, Editor: Slot)
    pub markers: MarkerStore,
    /// Aktive Platzierungs-Kategorie im Editor
    pub active_category: MarkerCategory,
    /// Aktuell selektierter Marker (transientes Label-Overlay)
    pub selected_marker_id: Option<u64>,
    /// Initialer Bestand wurde gelesen und angewendet.
    /// Slot-Writes sind erst danach erlaubt — ein früherer Write würde
    /// vorhandene Daten mit leerem Initialzustand überschreiben.
    pub markers_loaded: bool,
}

impl SessionState {
    /// Erstellt den Standard-Session-Kontext (Viewer, Erangel, leer).
    pub fn new() -> Self {
        Self {
            mode: AppMode::Viewer,
            active_map: MapId::Erangel,
            filters: FilterState::new(),
            markers: MarkerStore::new(),
            active_category: MarkerCategory::Garage,
            selected_marker_id: None,
            markers_loaded: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// View-bezogener Anwendungszustand.
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera über dem Bild-Pixelraum
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Kamera wurde initial auf Fit-Zoom gesetzt
    pub camera_initialized: bool,
    /// Dekodiertes Hintergrundbild der aktiven Map (None = Ladefehler/fehlend)
    pub map_image: Option<Arc<MapImage>>,
    /// Signalisiert dem Host, dass die Textur neu hochgeladen werden muss
    pub background_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::default(),
            viewport_size: [0.0, 0.0],
            camera_initialized: false,
            map_image: None,
            background_dirty: false,
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport_vec(&self) -> glam::Vec2 {
        glam::Vec2::new(self.viewport_size[0], self.viewport_size[1])
    }
}

/// Zustand des Leeren-Bestätigungsdialogs.
#[derive(Debug, Clone, Default)]
pub struct ClearMapDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Anzahl betroffener Marker (Anzeige im Dialog)
    pub marker_count: usize,
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Ob der Export-Datei-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Bestätigungsdialog für "alle Marker dieser Map löschen"
    pub clear_dialog: ClearMapDialogState,
    /// Temporäre Statusnachricht (z.B. Speicher-Fehler, Export-Ergebnis)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_export_dialog: false,
            show_options_dialog: false,
            clear_dialog: ClearMapDialogState::default(),
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Session-Kontext (Modus, Map, Filter, Marker)
    pub session: SessionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Größen, Zoom-Schritte, Hintergrund)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Durabler Marker-Slot des Editors
    pub slot: MarkerSlot,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State ohne I/O (Tests konstruieren direkt).
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            slot: MarkerSlot::at_default_path(),
            should_exit: false,
        }
    }

    /// Anzahl der Marker auf der aktiven Map (für UI-Anzeige).
    pub fn marker_count_on_active_map(&self) -> usize {
        self.session.markers.count_on_map(self.session.active_map)
    }

    /// Anzahl aktuell sichtbarer Marker (für UI-Anzeige).
    pub fn visible_marker_count(&self) -> usize {
        self.session
            .markers
            .visible_markers(self.session.active_map, &self.session.filters)
            .count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
