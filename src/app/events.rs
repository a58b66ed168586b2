//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::AppMode;
use crate::core::{MapId, MarkerCategory};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen (Bildmitte, Fit-Zoom)
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Andere Map ausgewählt
    MapSelected { map: MapId },
    /// Betriebsmodus gewechselt (Viewer ⇔ Editor)
    ModeSelected { mode: AppMode },
    /// Kategorie-Filter umschalten (Sidebar-Zeile)
    FilterToggled { category: MarkerCategory },
    /// Kategorie-Button der Editor-Toolbar gedrückt
    /// (setzt die aktive Kategorie; erneuter Druck kippt deren Filter)
    CategoryButtonPressed { category: MarkerCategory },

    /// Hintergrund-Klick im Editor: Marker platzieren
    MarkerPlacementRequested { world_pos: glam::Vec2 },
    /// Pin-Drag gestartet
    MarkerDragStarted { id: u64 },
    /// Pin-Drag-Position aktualisiert
    MarkerDragMoved { id: u64, world_pos: glam::Vec2 },
    /// Pin-Drag beendet (Position committen, persistieren)
    MarkerDragEnded,
    /// Rechtsklick auf Pin im Editor: Marker sofort löschen
    MarkerRemovalRequested { id: u64 },
    /// Pin angeklickt: Marker selektieren (Label-Overlay)
    MarkerPicked { id: u64 },
    /// Selektion aufheben (Hintergrund-Klick, Escape)
    SelectionCleared,

    /// "Alle Marker dieser Map löschen" angefordert (öffnet Bestätigung)
    ClearMapRequested,
    /// Leeren bestätigt
    ClearMapConfirmed,
    /// Leeren abgebrochen
    ClearMapCancelled,

    /// Marker-Export angefordert (öffnet Dateidialog)
    ExportRequested,
    /// Export-Pfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Aktive Map wechseln (voller Viewport-Reset + Bild neu laden)
    SwitchMap { map: MapId },
    /// Betriebsmodus setzen (Bestand neu laden)
    SetMode { mode: AppMode },
    /// Kategorie-Filter umschalten
    ToggleFilter { category: MarkerCategory },
    /// Aktive Platzierungs-Kategorie setzen
    SetActiveCategory { category: MarkerCategory },

    /// Neuen Marker an Weltposition platzieren
    PlaceMarker { world_pos: glam::Vec2 },
    /// Pin-Drag beginnen (Marker selektieren)
    BeginMarkerDrag { id: u64 },
    /// Marker während Drag verschieben
    DragMarkerTo { id: u64, world_pos: glam::Vec2 },
    /// Pin-Drag abschließen (persistieren)
    EndMarkerDrag,
    /// Marker entfernen (idempotent)
    RemoveMarker { id: u64 },
    /// Marker selektieren
    SelectMarker { id: u64 },
    /// Selektion aufheben
    ClearMarkerSelection,

    /// Bestätigungsdialog fürs Leeren öffnen
    RequestClearMapDialog,
    /// Marker der aktiven Map löschen (nach Bestätigung)
    ClearMap,
    /// Bestätigungsdialog schließen (ohne Löschen)
    DismissClearMapDialog,

    /// Export-Dateidialog anfordern
    RequestExportDialog,
    /// Marker-Bestand als JSON exportieren
    ExportMarkers { path: String },

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
