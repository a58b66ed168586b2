//! Use-Case: Marker-Bestand als JSON exportieren.
//!
//! Das Export-Format ist identisch zum Slot-Format — der Admin-Workflow
//! ist "Marker im Editor setzen, exportieren, als Viewer-Datensatz
//! einchecken".

use crate::app::AppState;
use anyhow::Context;

/// Öffnet den Export-Dateidialog über den UI-State.
pub fn request_export(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Schreibt den vollständigen Marker-Bestand als JSON an den Pfad.
///
/// Fehler werden dem Nutzer in der Statuszeile gemeldet — Export ist
/// eine nutzer-initiierte Einmal-Aktion, kein automatischer Retry.
pub fn export_markers(state: &mut AppState, path: &str) {
    let markers = state.session.markers.to_vec();

    let result = serde_json::to_string_pretty(&markers)
        .context("Marker-Bestand nicht serialisierbar")
        .and_then(|json| {
            std::fs::write(path, json).with_context(|| format!("Export nicht schreibbar: {}", path))
        });

    match result {
        Ok(()) => {
            let msg = format!("{} Marker exportiert nach {}", markers.len(), path);
            log::info!("{}", msg);
            state.ui.status_message = Some(msg);
        }
        Err(e) => {
            log::error!("Export fehlgeschlagen: {:#}", e);
            state.ui.status_message = Some(format!("Export fehlgeschlagen: {:#}", e));
        }
    }
}
